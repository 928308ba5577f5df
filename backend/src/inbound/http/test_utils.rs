//! Shared fixtures for HTTP handler tests.

use actix_web::App;
use actix_web::test::TestRequest;

use crate::domain::{LoginId, User, UserRole};
use crate::inbound::http::auth::{LOGIN_ID_HEADER, PASSKEY_HEADER};
use crate::inbound::http::state::HttpState;
use crate::server::{api_scope, memory_state};

/// Admin credentials seeded into every test application.
pub const ADMIN: (&str, &str) = ("admin", "admin-pk");
/// Regular user credentials seeded into every test application.
pub const ALICE: (&str, &str) = ("alice", "alice-pk");
/// Second regular user, for cross-user scoping assertions.
pub const BOB: (&str, &str) = ("bob", "bob-pk");

fn login(raw: &str) -> LoginId {
    LoginId::new(raw).expect("valid login")
}

/// Fresh state over empty memory stores, seeded with the fixture users.
pub fn seeded_state() -> HttpState {
    memory_state(vec![
        User::new(login(ADMIN.0), "Admin", ADMIN.1).with_role(UserRole::Admin),
        User::new(login(ALICE.0), "Alice", ALICE.1),
        User::new(login(BOB.0), "Bob", BOB.1),
    ])
}

/// Application exposing the `/api` scope over a freshly seeded state.
pub fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().service(api_scope(seeded_state()))
}

/// Attach fixture credentials to a request.
pub fn authed(req: TestRequest, credentials: (&str, &str)) -> TestRequest {
    req.insert_header((LOGIN_ID_HEADER, credentials.0))
        .insert_header((PASSKEY_HEADER, credentials.1))
}
