use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use dairy_dashboard::{config::AppConfig, dto::auth::SessionClaims, models::Role};

/// Mint a development session token: `mint_token [ROLE] [SHOP_ID]`.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let mut args = std::env::args().skip(1);
    let role = match args.next().as_deref() {
        Some("ADMIN") => Role::Admin,
        Some("DRIVER") => Role::Driver,
        None | Some("SHOP") => Role::Shop,
        Some(other) => anyhow::bail!("unknown role {other}"),
    };
    let shop_id = args.next().map(|raw| raw.parse::<i64>()).transpose()?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| anyhow::anyhow!("Failed to set expiration"))?;

    let claims = SessionClaims {
        sub: shop_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "dev".to_string()),
        role,
        exp: expiration.timestamp(),
        shop_id,
        access_token: std::env::var("BACKEND_TOKEN").ok(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )?;

    println!("{token}");
    Ok(())
}
