use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::common::auth::Profile;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    /// Emails seeded into the super-admin allow-list at startup
    pub super_admin_emails: Vec<String>,
    /// Profile assigned to callers without a valid token
    pub default_profile: Profile,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "book-catalog".to_string()),
            allowed_origins: parse_list(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            super_admin_emails: parse_list(&env::var("SUPER_ADMIN_EMAILS").unwrap_or_default()),
            default_profile: parse_default_profile(
                &env::var("DEFAULT_PROFILE").unwrap_or_else(|_| "ANONYMOUS".to_string()),
            )?,
        })
    }
}

/// Split a comma separated variable, dropping blanks
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the profile given to unauthenticated callers.
///
/// ADMIN is refused: it would hand every anonymous request full access.
fn parse_default_profile(raw: &str) -> Result<Profile> {
    let profile: Profile = raw
        .trim()
        .parse()
        .with_context(|| format!("DEFAULT_PROFILE has unknown value '{}'", raw))?;

    if profile == Profile::Admin {
        bail!("DEFAULT_PROFILE cannot be ADMIN: unauthenticated callers must not get admin access");
    }

    Ok(profile)
}
