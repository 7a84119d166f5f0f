pub mod games;
pub mod health;
pub mod players;
pub mod tournaments;

pub const WELCOME: &str = "Welcome to Gaming Community Platform Backend API!";

// GET / - Plain-text welcome banner
pub async fn root() -> &'static str {
    WELCOME
}

/// Lenient integer coercion for id path segments.
///
/// Leading whitespace, an optional sign and the leading run of digits are
/// accepted; anything after the digits is ignored (`"12abc"` is 12). A `0x`
/// prefix switches to hexadecimal (`"0x1f"` is 31). `None` binds as NULL, so
/// the lookup runs and matches nothing.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits == 0 {
        return None;
    }

    let value = i64::from_str_radix(&rest[..digits], radix).ok()?;
    Some(if negative { -value } else { value })
}
