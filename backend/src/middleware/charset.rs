//! Response charset middleware.
//!
//! Appends `charset=utf-8` to JSON and text `Content-Type` headers that do not
//! declare a charset, so clients never fall back to a locale default when
//! decoding non-ASCII display names.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::warn;

/// Middleware factory forcing UTF-8 on JSON and text responses.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use signin::middleware::ForceUtf8;
///
/// let app = App::new().wrap(ForceUtf8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceUtf8;

impl<S, B> Transform<S, ServiceRequest> for ForceUtf8
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ForceUtf8Middleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ForceUtf8Middleware { service }))
    }
}

/// Service wrapper produced by [`ForceUtf8`].
pub struct ForceUtf8Middleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ForceUtf8Middleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            force_utf8(res.headers_mut());
            Ok(res)
        })
    }
}

fn force_utf8(headers: &mut HeaderMap) {
    let Some(rewritten) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(with_utf8_charset)
    else {
        return;
    };
    match HeaderValue::from_str(&rewritten) {
        Ok(value) => {
            headers.insert(CONTENT_TYPE, value);
        }
        Err(error) => warn!(%error, "failed to rewrite content type"),
    }
}

/// Return `content_type` with a UTF-8 charset appended, or `None` when it
/// already names a charset or is not a textual type.
fn with_utf8_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_ascii_lowercase();
    if lower.contains("charset=") {
        return None;
    }
    let essence = lower.split(';').next().map_or("", str::trim);
    let textual = essence == "application/json"
        || essence.ends_with("+json")
        || essence.starts_with("text/");
    textual.then(|| format!("{content_type}; charset=utf-8"))
}
