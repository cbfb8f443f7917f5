//! Response envelope shared by every endpoint.
//!
//! Success and failure payloads alike are wrapped as
//! `{"status": <code>, "message": <text>, "data": <payload?>}`; `data` is
//! omitted when an operation returns nothing.

use actix_web::HttpResponse;
use serde::Serialize;

/// Envelope wrapping a response payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 envelope with a payload.
    pub fn success(data: T) -> Self {
        Self {
            status: 200,
            message: "Success".to_owned(),
            data: Some(data),
        }
    }

    /// 201 envelope with a payload.
    pub fn created(data: T) -> Self {
        Self {
            status: 201,
            message: "Created".to_owned(),
            data: Some(data),
        }
    }
}

/// 200 response with a wrapped payload.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data))
}

/// 200 response without a payload.
pub fn ok_empty() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        status: 200,
        message: "Success".to_owned(),
        data: None,
    })
}

/// 201 response with a wrapped payload.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::created(data))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn success_envelope_wraps_the_payload() {
        let envelope = ApiResponse::success(json!({ "id": 1 }));
        let value = serde_json::to_value(&envelope).expect("serialise");
        assert_eq!(value.get("status"), Some(&json!(200)));
        assert_eq!(value.get("message"), Some(&json!("Success")));
        assert_eq!(value.pointer("/data/id"), Some(&json!(1)));
    }

    #[test]
    fn empty_envelope_omits_data() {
        let envelope = ApiResponse::<Value> {
            status: 200,
            message: "Success".to_owned(),
            data: None,
        };
        let value = serde_json::to_value(&envelope).expect("serialise");
        assert!(value.get("data").is_none());
    }
}
