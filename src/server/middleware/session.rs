use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;
use tower_sessions::cookie::{Cookie, CookieJar};

use crate::server::model::session::{keys::SessionKeys, SESSION_COOKIE_NAME};

/// Re-signs a session cookie signed with a retired secret before the session layer sees it
///
/// The session layer only verifies with the primary key. Rotating the secret would otherwise
/// log out every user, instead their cookie is re-signed here and the session layer sends the
/// primary-signed cookie back with the response.
pub async fn rotate_session_cookie(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Response {
    if rotate_request_cookie(&keys, request.headers_mut()) {
        tracing::debug!("Re-signed session cookie signed with a legacy secret");
    }

    next.run(request).await
}

/// Rewrites the `Cookie` headers so a legacy-signed session cookie is signed with the primary key
///
/// Returns whether the session cookie was re-signed. Other cookies are passed through untouched,
/// as is a session cookie that verifies under no key.
pub fn rotate_request_cookie(keys: &SessionKeys, headers: &mut HeaderMap) -> bool {
    if keys.legacy().is_empty() {
        return false;
    }

    let mut rotated = false;
    let mut values: Vec<HeaderValue> = Vec::new();

    for value in headers.get_all(COOKIE) {
        let Ok(cookies) = value.to_str() else {
            values.push(value.clone());
            continue;
        };

        let pairs: Vec<String> = cookies
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| match resign_session_pair(keys, pair) {
                Some(resigned) => {
                    rotated = true;
                    resigned
                }
                None => pair.to_string(),
            })
            .collect();

        match HeaderValue::from_str(&pairs.join("; ")) {
            Ok(value) => values.push(value),
            Err(_) => values.push(value.clone()),
        }
    }

    if rotated {
        headers.remove(COOKIE);
        for value in values {
            headers.append(COOKIE, value);
        }
    }

    rotated
}

// Returns the re-signed `name=value` pair if `pair` is a session cookie signed with a legacy key.
fn resign_session_pair(keys: &SessionKeys, pair: &str) -> Option<String> {
    let cookie = Cookie::parse_encoded(pair.to_string()).ok()?;
    if cookie.name() != SESSION_COOKIE_NAME {
        return None;
    }

    let mut incoming = CookieJar::new();
    incoming.add_original(cookie);

    if incoming.signed(keys.primary()).get(SESSION_COOKIE_NAME).is_some() {
        return None;
    }

    let verified = keys
        .legacy()
        .iter()
        .find_map(|key| incoming.signed(key).get(SESSION_COOKIE_NAME))?;

    let mut outgoing = CookieJar::new();
    outgoing.signed_mut(keys.primary()).add(Cookie::new(
        SESSION_COOKIE_NAME,
        verified.value().to_string(),
    ));

    outgoing
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.encoded().to_string())
}
