use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

pub const AUTH_COOKIE: &str = "dev-scheduler-auth";
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

type HmacSha1 = Hmac<Sha1>;

fn sign(secret: &str, payload: &str) -> Option<HmacSha1> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload.as_bytes());
    Some(mac)
}

/// Token format: `<expires_unix>.<nonce>.<base64url hmac>`.
pub fn issue_token(secret: &str, now: DateTime<Utc>) -> String {
    let expires = now.timestamp() + SESSION_TTL_SECS;
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    let payload = format!("{expires}.{nonce}");

    let signature = sign(secret, &payload)
        .map(|mac| URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
        .unwrap_or_default();

    format!("{payload}.{signature}")
}

pub fn verify_token(secret: &str, token: &str, now: DateTime<Utc>) -> bool {
    let Some((payload, signature)) = token.rsplit_once('.') else {
        return false;
    };
    let Some((expires, _nonce)) = payload.split_once('.') else {
        return false;
    };
    let Ok(expires) = expires.parse::<i64>() else {
        return false;
    };
    if expires <= now.timestamp() {
        return false;
    }

    let Ok(signature) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    match sign(secret, payload) {
        Some(mac) => mac.verify_slice(&signature).is_ok(),
        None => false,
    }
}

pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn clear_cookie(secure: bool) -> String {
    let mut cookie = format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value)
}

pub fn is_authenticated(headers: &HeaderMap, secret: &str) -> bool {
    token_from_headers(headers)
        .map(|token| verify_token(secret, token, Utc::now()))
        .unwrap_or(false)
}
