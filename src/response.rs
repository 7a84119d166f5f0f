use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};

use crate::config::ResponseStyle;
use crate::error::{ApiError, ApiResult};
use crate::models::Record;

/// How one operation presents its result.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    key: &'static str,
    missing_message: &'static str,
    /// Legacy only: extra object the keyed payload is nested in.
    legacy_wrapper: Option<&'static str>,
    /// Legacy only: status for an empty result.
    legacy_missing_status: StatusCode,
    /// Normalized only: replaces `missing_message`.
    normalized_message: Option<&'static str>,
}

impl Envelope {
    pub const fn new(key: &'static str, missing_message: &'static str) -> Self {
        Envelope {
            key,
            missing_message,
            legacy_wrapper: None,
            legacy_missing_status: StatusCode::NOT_FOUND,
            normalized_message: None,
        }
    }

    pub const fn legacy_wrapper(self, wrapper: &'static str) -> Self {
        Envelope {
            legacy_wrapper: Some(wrapper),
            ..self
        }
    }

    pub const fn legacy_missing_status(self, status: StatusCode) -> Self {
        Envelope {
            legacy_missing_status: status,
            ..self
        }
    }

    pub const fn normalized_message(self, message: &'static str) -> Self {
        Envelope {
            normalized_message: Some(message),
            ..self
        }
    }

    /// 200 with the rows, or the miss response when there are none.
    pub fn list(&self, style: ResponseStyle, rows: Vec<Record>) -> ApiResult<Response> {
        if rows.is_empty() {
            return Err(self.missing(style));
        }
        let rows = rows.into_iter().map(Record::into_value).collect();
        Ok(self.found(style, Value::Array(rows)))
    }

    /// 200 with the row, or the miss response when the lookup came back empty.
    pub fn item(&self, style: ResponseStyle, row: Option<Record>) -> ApiResult<Response> {
        match row {
            Some(row) => Ok(self.found(style, row.into_value())),
            None => Err(self.missing(style)),
        }
    }

    fn found(&self, style: ResponseStyle, payload: Value) -> Response {
        let mut body = Map::new();
        body.insert(self.key.to_string(), payload);

        if let (ResponseStyle::Legacy, Some(wrapper)) = (style, self.legacy_wrapper) {
            let mut outer = Map::new();
            outer.insert(wrapper.to_string(), Value::Object(body));
            body = outer;
        }

        (StatusCode::OK, Json(Value::Object(body))).into_response()
    }

    fn missing(&self, style: ResponseStyle) -> ApiError {
        match style {
            ResponseStyle::Legacy => ApiError::NotFound {
                status: self.legacy_missing_status,
                message: self.missing_message,
            },
            ResponseStyle::Normalized => ApiError::NotFound {
                status: StatusCode::NOT_FOUND,
                message: self.normalized_message.unwrap_or(self.missing_message),
            },
        }
    }
}
