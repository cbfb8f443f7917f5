//! Caller identity extraction.
//!
//! Identity arrives as the `X-Member-Id` header and is trusted without
//! credential verification; there is no authentication layer in front of
//! this service. A missing or malformed header is refused as unauthorized.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::domain::Error;
use crate::inbound::http::error::ApiError;

/// Header carrying the caller's member id.
pub const MEMBER_ID_HEADER: &str = "X-Member-Id";

/// The caller's member id, extracted per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberIdentity(i64);

impl MemberIdentity {
    /// The caller's member id.
    pub fn id(self) -> i64 {
        self.0
    }
}

fn extract(req: &HttpRequest) -> Result<MemberIdentity, ApiError> {
    let raw = req
        .headers()
        .get(MEMBER_ID_HEADER)
        .ok_or_else(|| ApiError::from(Error::unauthorized("missing X-Member-Id header")))?;
    raw.to_str()
        .ok()
        .and_then(|value| value.trim().parse::<i64>().ok())
        .map(MemberIdentity)
        .ok_or_else(|| ApiError::from(Error::unauthorized("invalid X-Member-Id header")))
}

impl FromRequest for MemberIdentity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    fn identity_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().route(
            "/whoami",
            web::get().to(|identity: MemberIdentity| async move {
                HttpResponse::Ok().body(identity.id().to_string())
            }),
        )
    }

    #[actix_web::test]
    async fn header_value_becomes_the_member_id() {
        let app = test::init_service(identity_app()).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((MEMBER_ID_HEADER, "42"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert_eq!(body, "42");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = test::init_service(identity_app()).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_header_is_unauthorized() {
        let app = test::init_service(identity_app()).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((MEMBER_ID_HEADER, "not-a-number"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
