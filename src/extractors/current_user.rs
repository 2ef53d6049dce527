use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::Claims;
use crate::error::AuthError;

/// Claims of the authenticated caller, taken from the request extensions
/// populated by the auth gate. Only resolves on routes behind the gate;
/// elsewhere it rejects with a plain 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        ready(match claims {
            Some(claims) => Ok(CurrentUser(claims)),
            None => Err(actix_web::error::ErrorUnauthorized(
                AuthError::InvalidToken.message(),
            )),
        })
    }
}
