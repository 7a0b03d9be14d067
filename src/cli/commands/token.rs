use anyhow::Context;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::OutputFormat;
use crate::config::config;

/// Sign a token for local development against the configured secret
pub fn mint(
    user: Option<String>,
    email: Option<String>,
    hours: Option<u64>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let security = &config().security;
    let subject = user.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let hours = hours.unwrap_or(security.jwt_expiry_hours);

    let mut claims = Claims::new(subject, hours).context("invalid token lifetime")?;
    claims.email = email;
    claims.iss = security.jwt_issuer.clone();

    let token = generate_jwt(&claims, &security.jwt_secret).context("failed to sign token")?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "token": token, "sub": claims.sub, "expiresAt": claims.exp })
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
