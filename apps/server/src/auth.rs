use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use budgetbook_core::{
    constants::MSG_LOGIN_REQUIRED,
    errors::{Error as CoreError, Result as CoreResult},
    users::PasswordHasherTrait,
    ActionOutcome, Destination, Flash, SessionUser,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cookies::{append_set_cookie, build_cookie, expired_cookie, read_cookie};
use crate::error::AppError;
use crate::flash::redirect_with;
use crate::main_lib::AppState;

pub const SESSION_COOKIE: &str = "bb_session";

const SECRET_LEN: usize = 32;

/// Argon2id hashing with the crate's default parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasherTrait for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CoreError::Credential(format!("Failed to hash password: {e}")))
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> CoreResult<bool> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| CoreError::Credential(format!("Stored password hash is invalid: {e}")))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(other) => Err(CoreError::Credential(format!(
                "Password verification failed: {other}"
            ))),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session is missing, expired or revoked")]
    Unauthorized,
    #[error("{0}")]
    Internal(String),
}

/// Claims carried by the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: String,
    /// Token id, used for revocation on logout.
    pub jti: String,
    pub exp: usize,
    pub iat: usize,
}

/// Issues and validates signed session tokens.
///
/// A token stays valid until it expires unless it is revoked by logout. The
/// revocation list only needs to remember a token until its own expiry.
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    secure_cookies: bool,
    revoked: Mutex<HashMap<String, usize>>,
}

fn unix_now() -> Result<Duration, AuthError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))
}

impl SessionManager {
    pub fn new(secret: &[u8], token_ttl: Duration, secure_cookies: bool) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl,
            secure_cookies,
            revoked: Mutex::new(HashMap::new()),
        }
    }

    pub fn issue_token(&self, user: &SessionUser) -> Result<String, AuthError> {
        let now = unix_now()?;
        let exp = now + self.token_ttl;
        let claims = SessionClaims {
            sub: user.id.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("Rejected session token: {:?}", err.kind());
                AuthError::Unauthorized
            })?;

        let revoked = self.revoked.lock().unwrap_or_else(|e| e.into_inner());
        if revoked.contains_key(&claims.jti) {
            return Err(AuthError::Unauthorized);
        }
        Ok(claims)
    }

    /// Marks the token as unusable and forgets tokens that expired on their own.
    pub fn revoke(&self, claims: &SessionClaims) {
        let now = unix_now().map(|d| d.as_secs() as usize).unwrap_or(0);
        let mut revoked = self.revoked.lock().unwrap_or_else(|e| e.into_inner());
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(claims.jti.clone(), claims.exp);
    }

    pub fn session_cookie(&self, token: &str) -> String {
        build_cookie(
            SESSION_COOKIE,
            token,
            Some(self.token_ttl),
            self.secure_cookies,
        )
    }

    pub fn clear_cookie(&self) -> String {
        expired_cookie(SESSION_COOKIE)
    }
}

/// Accepts a base64 encoding of 32 bytes or a raw 32-byte ASCII string.
/// A 32-character value that also happens to be valid base64 is used raw.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Session secret cannot be empty");
    }
    if let Ok(decoded) = BASE64.decode(trimmed) {
        if decoded.len() == SECRET_LEN {
            return Ok(decoded);
        }
    }
    if trimmed.len() == SECRET_LEN && trimmed.is_ascii() {
        return Ok(trimmed.as_bytes().to_vec());
    }
    anyhow::bail!(
        "Session secret must be {SECRET_LEN} bytes, base64 encoded or as a raw ASCII string"
    )
}

/// Random secret for deployments that did not configure one.
pub fn generate_secret_key() -> Vec<u8> {
    let mut secret = vec![0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut secret);
    secret
}

fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> CoreResult<Option<(SessionUser, SessionClaims)>> {
    let Some(token) = read_cookie(headers, SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(claims) = state.sessions.validate_token(&token) else {
        return Ok(None);
    };
    let user = state.user_service.get_session_user(&claims.sub)?;
    Ok(user.map(|user| (user, claims)))
}

fn login_required(state: &AppState) -> Response {
    let mut response = redirect_with(ActionOutcome::new(
        Destination::Login,
        Flash::info(MSG_LOGIN_REQUIRED),
    ));
    append_set_cookie(&mut response, &state.sessions.clear_cookie());
    response
}

/// Resolves the session cookie into a [`SessionUser`] request extension, or
/// redirects to the login page.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match resolve_session(&state, request.headers()) {
        Ok(Some((user, claims))) => {
            request.extensions_mut().insert(user);
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Ok(None) => login_required(&state),
        Err(err) => AppError::from(err).into_response(),
    }
}
