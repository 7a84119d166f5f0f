use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, FromRow, Row, TypeInfo, ValueRef};

/// One row from `games`, `players` or `tournaments`.
///
/// The tables are owned by the loader, so rows carry every column the query
/// selected, keyed by column name and in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl<'r> FromRow<'r, SqliteRow> for Record {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let mut fields = Map::with_capacity(row.columns().len());
        for column in row.columns() {
            let idx = column.ordinal();
            fields.insert(column.name().to_string(), column_value(row, idx)?);
        }
        Ok(Record(fields))
    }
}

impl Record {
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

// Decodes by the value's storage class rather than the declared column type.
fn column_value(row: &SqliteRow, idx: usize) -> sqlx::Result<Value> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get::<i64, _>(idx)?),
        "REAL" | "NUMERIC" => {
            let n = row.try_get::<f64, _>(idx)?;
            serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
        }
        "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(idx)?),
        _ => Value::from(row.try_get::<String, _>(idx)?),
    };
    Ok(value)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
}
