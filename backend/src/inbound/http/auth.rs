//! Header-credential authentication for HTTP handlers.
//!
//! Callers present a `loginid`/`passkey` header pair on every request; the
//! helpers here extract the pair and resolve it through the credential gate.
//! Every rejection path collapses to the same 401 payload so responses do
//! not reveal which part of the check failed.

use actix_web::HttpRequest;

use crate::domain::ports::{CredentialGate, GateError};
use crate::domain::{Error, LoginId, User};

/// Header carrying the caller's login identifier.
pub const LOGIN_ID_HEADER: &str = "loginid";
/// Header carrying the caller's passkey.
pub const PASSKEY_HEADER: &str = "passkey";

fn unauthorized() -> Error {
    Error::unauthorized("Unauthorized")
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

fn presented_credentials(req: &HttpRequest) -> Result<(LoginId, String), Error> {
    let login = header_value(req, LOGIN_ID_HEADER)
        .ok_or_else(unauthorized)
        .and_then(|raw| LoginId::new(raw).map_err(|_| unauthorized()))?;
    let passkey = header_value(req, PASSKEY_HEADER).ok_or_else(unauthorized)?;
    Ok((login, passkey.to_owned()))
}

fn map_gate_error(err: GateError) -> Error {
    match err {
        GateError::InvalidCredentials => unauthorized(),
        GateError::Store(store) => Error::internal(store.to_string()),
    }
}

/// Resolve the request's credentials to a user.
pub async fn require_user(req: &HttpRequest, gate: &dyn CredentialGate) -> Result<User, Error> {
    let (login, passkey) = presented_credentials(req)?;
    gate.authenticate(&login, &passkey)
        .await
        .map_err(map_gate_error)
}

/// Resolve the request's credentials to a user with the admin role.
pub async fn require_admin(req: &HttpRequest, gate: &dyn CredentialGate) -> Result<User, Error> {
    let (login, passkey) = presented_credentials(req)?;
    gate.authenticate_admin(&login, &passkey)
        .await
        .map_err(map_gate_error)
}
