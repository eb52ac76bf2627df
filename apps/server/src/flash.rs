//! One-shot flash messages carried across a redirect in a short-lived cookie.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use budgetbook_core::{ActionOutcome, Flash, FlashCategory};

use crate::cookies::{append_set_cookie, build_cookie, expired_cookie, read_cookie};

pub const FLASH_COOKIE: &str = "bb_flash";

const FLASH_TTL: Duration = Duration::from_secs(60);

fn encode_flash(flash: &Flash) -> String {
    let raw = format!("{}:{}", flash.category.as_str(), flash.message);
    urlencoding::encode(&raw).into_owned()
}

fn decode_flash(value: &str) -> Option<Flash> {
    let raw = urlencoding::decode(value).ok()?;
    let (category, message) = raw.split_once(':')?;
    Some(Flash {
        category: FlashCategory::parse(category)?,
        message: message.to_string(),
    })
}

/// Turns a service outcome into a `303 See Other` plus flash cookie.
pub fn redirect_with(outcome: ActionOutcome) -> Response {
    let mut response = Redirect::to(outcome.destination.path()).into_response();
    if let Some(flash) = outcome.flash {
        let cookie = build_cookie(FLASH_COOKIE, &encode_flash(&flash), Some(FLASH_TTL), false);
        append_set_cookie(&mut response, &cookie);
    }
    response
}

/// The flash (if any) left by the previous redirect.
///
/// Rendering a page through [`IncomingFlash::finish`] clears the cookie, so
/// each message is shown exactly once.
#[derive(Debug, Default)]
pub struct IncomingFlash(pub Option<Flash>);

impl IncomingFlash {
    pub fn message(&self) -> Option<&Flash> {
        self.0.as_ref()
    }

    pub fn finish(self, page: impl IntoResponse) -> Response {
        let mut response = page.into_response();
        if self.0.is_some() {
            append_set_cookie(&mut response, &expired_cookie(FLASH_COOKIE));
        }
        response
    }
}

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = read_cookie(&parts.headers, FLASH_COOKIE)
            .filter(|value| !value.is_empty())
            .and_then(|value| decode_flash(&value));
        Ok(IncomingFlash(flash))
    }
}
