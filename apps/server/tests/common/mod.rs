#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, Response,
    },
    Router,
};
use budgetbook_core::utils::FixedClock;
use budgetbook_server::{api::app_router, build_state_with_clock, config::Config};
use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds the full router over a fresh database with the clock frozen on `today`.
pub async fn spawn_app(today: NaiveDate) -> TestApp {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        session_secret: None,
        session_ttl: Duration::from_secs(3600),
        request_timeout: Duration::from_secs(30),
        secure_cookies: false,
    };
    let state = build_state_with_clock(&config, Arc::new(FixedClock::on(today)))
        .await
        .unwrap();
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Response<Body> {
        let body = format!(
            "username={}&email={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(email),
            urlencoding::encode(password)
        );
        self.post_form("/register", &body, None).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response<Body> {
        let body = format!(
            "email={}&password={}",
            urlencoding::encode(email),
            urlencoding::encode(password)
        );
        self.post_form("/login", &body, None).await
    }

    /// Registers and logs in, returning the `Cookie` header value for the session.
    pub async fn signed_in(&self, username: &str, email: &str, password: &str) -> String {
        self.register(username, email, password).await;
        let response = self.login(email, password).await;
        session_cookie(&response).expect("login should set a session cookie")
    }
}

fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .filter_map(|c| c.split(';').next().map(str::to_string))
        .find(|pair| pair.starts_with(&format!("{name}=")))
}

/// `bb_session=<token>` when the response starts a session.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    cookie_pair(response, "bb_session").filter(|pair| pair != "bb_session=")
}

/// The decoded flash `category:message` set by a redirect.
pub fn flash(response: &Response<Body>) -> Option<String> {
    let pair = cookie_pair(response, "bb_flash")?;
    let value = pair.strip_prefix("bb_flash=")?;
    if value.is_empty() {
        return None;
    }
    urlencoding::decode(value).ok().map(|v| v.into_owned())
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
