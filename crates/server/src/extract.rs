//! Lenient JSON body extractor.
//!
//! Unlike `axum::Json` it does not insist on a `Content-Type` header and
//! treats an empty body as `T::default()`, so validation (not the extractor)
//! decides what a missing body means. Only JSON objects are accepted; a
//! derived struct would otherwise also deserialize from an array by position.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

pub const MSG_INVALID_JSON: &str = "JSON inválido";

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::BadRequest(MSG_INVALID_JSON.into())
            }
        })?;
        parse_body(&bytes).map(JsonBody)
    }
}

pub fn parse_body<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let invalid = || ApiError::BadRequest(MSG_INVALID_JSON.into());
    match serde_json::from_slice::<Value>(bytes).map_err(|_| invalid())? {
        v @ Value::Object(_) => serde_json::from_value(v).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::modules::CreateModuleInput;

    #[test]
    fn empty_body_is_default() {
        let input: CreateModuleInput = parse_body(b"").unwrap();
        assert!(input.title.is_none());
        let input: CreateModuleInput = parse_body(b"  \n").unwrap();
        assert!(input.week.is_none());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = parse_body::<CreateModuleInput>(b"[1,2]").unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_JSON);
        let err = parse_body::<CreateModuleInput>(b"{oops").unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_JSON);
        let positional: [&[u8]; 5] = [br#"["X","desc",5]"#, br#"[null,null,null,"done"]"#, br#""X""#, b"7", b"null"];
        for body in positional {
            let err = parse_body::<CreateModuleInput>(body).unwrap_err();
            assert_eq!(err.to_string(), MSG_INVALID_JSON);
        }
    }

    #[test]
    fn object_body_is_read_by_field_name() {
        let input: CreateModuleInput = parse_body(br#"{"week": 5, "title": "X"}"#).unwrap();
        assert_eq!(input.title, Some(serde_json::json!("X")));
        assert_eq!(input.week, Some(serde_json::json!(5)));
    }
}
