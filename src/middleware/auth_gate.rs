//! Request-authentication gate.
//!
//! Runs once per inbound request, before any handler. The raw value of the
//! `authorization` header is treated as the signed token (no `Bearer` prefix
//! handling). A verified request is forwarded with its claims stored in
//! request extensions; anything else is answered directly with a 401 and the
//! fixed JSON envelope, without reaching the inner service.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::claims::Claims;
use crate::auth::jwt::verify_token;
use crate::error::AuthError;
use crate::response::build_response;
use crate::state::security_config::SecurityConfig;

pub struct AuthGate {
    config: Rc<SecurityConfig>,
}

impl AuthGate {
    /// Build a gate around an injected, read-only security config.
    pub fn new(config: SecurityConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
    config: Rc<SecurityConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        info!(path = %req.path(), "request received");

        match authenticate(&req, &self.config) {
            Ok(claims) => {
                let company = claims.company_id.clone().unwrap_or(Value::Null);
                info!(user_id = %claims.user_id, company_id = %company, "request authenticated");

                // Store claims in request extensions before calling the service
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(err) => {
                let res = deny_response(err);
                let (req, _payload) = req.into_parts();
                Box::pin(ready(Ok(ServiceResponse::new(
                    req,
                    res.map_into_right_body(),
                ))))
            }
        }
    }
}

/// Locate and verify the bearer token on a request.
///
/// The header value is used as-is. A value that is not valid UTF-8 counts as
/// a present-but-unusable token, not a missing one.
fn authenticate(req: &ServiceRequest, config: &SecurityConfig) -> Result<Claims, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;
    let token = value.to_str().map_err(|_| AuthError::InvalidToken)?;

    verify_token(token, config)
}

/// Terminal 401 carrying the fixed envelope. A failed envelope build still
/// denies the request, just without a body.
fn deny_response(err: AuthError) -> HttpResponse {
    match build_response("", err.code(), json!({"message": err.message()})) {
        Some(envelope) => {
            info!(
                code = envelope.code,
                message = err.message(),
                request_id = %envelope.request_id,
                "request rejected"
            );
            HttpResponse::Unauthorized().json(envelope)
        }
        None => HttpResponse::Unauthorized().finish(),
    }
}
