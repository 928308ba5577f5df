//! Backend entry-point: seeds users, wires adapters, runs the HTTP server.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{LoginId, User, UserRole};
use backend::server::{ServerConfig, memory_state, run};

/// Read a seed credential pair from `login_var`/`passkey_var`, falling back
/// to the given defaults.
fn seed_credentials(
    login_var: &str,
    passkey_var: &str,
    defaults: (&str, &str),
) -> (String, String) {
    let login = std::env::var(login_var).unwrap_or_else(|_| defaults.0.to_owned());
    let passkey = std::env::var(passkey_var).unwrap_or_else(|_| defaults.1.to_owned());
    (login, passkey)
}

fn seed_users() -> std::io::Result<Vec<User>> {
    let (admin_login, admin_passkey) =
        seed_credentials("ADMIN_LOGIN", "ADMIN_PASSKEY", ("admin", "password"));
    let (user_login, user_passkey) =
        seed_credentials("USER_LOGIN", "USER_PASSKEY", ("alice", "password"));

    let admin_login = LoginId::new(&admin_login)
        .map_err(|err| std::io::Error::other(format!("invalid ADMIN_LOGIN: {err}")))?;
    let user_login = LoginId::new(&user_login)
        .map_err(|err| std::io::Error::other(format!("invalid USER_LOGIN: {err}")))?;

    info!(admin = %admin_login, user = %user_login, "seeding users");
    Ok(vec![
        User::new(admin_login, "Administrator", admin_passkey).with_role(UserRole::Admin),
        User::new(user_login, "Booking User", user_passkey),
    ])
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let state = memory_state(seed_users()?);
    run(config, state).await
}
