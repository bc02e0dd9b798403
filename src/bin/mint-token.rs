use anyhow::{Context, Result};
use clap::Parser;

use setlist_api::config::AuthConfig;
use setlist_api::services::auth::{AuthService, Principal};

/// Sign a principal into a bearer token with the server's secret.
///
/// Reads `JWT_SECRET` and `TOKEN_MAX_AGE_SECONDS` the same way the server does
/// (environment, then `.env`), so the printed token verifies against a server
/// started with the same settings.
#[derive(Parser, Debug)]
#[command(name = "mint-token", version, about)]
struct Args {
    /// Principal email
    #[arg(long)]
    email: String,

    /// Principal username
    #[arg(long)]
    username: String,

    /// Principal id (stored as `_id` in the token)
    #[arg(long)]
    id: String,

    /// Mark the principal as admin
    #[arg(long, default_value_t = false)]
    admin: bool,

    /// Print only the token (no extra lines)
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AuthConfig::from_env().context("failed to load JWT settings")?;
    let auth = AuthService::new(&config);

    let principal = Principal {
        email: args.email,
        username: args.username,
        id: args.id,
        is_admin: args.admin,
    };
    let token = auth.sign_token(&principal)?;

    if args.quiet {
        println!("{token}");
        return Ok(());
    }

    println!("token: {token}");
    println!("expires_in: {}s", auth.max_age_seconds());
    println!("header: Authorization: Bearer {token}");
    Ok(())
}
