//! Cross-origin resource sharing policy.
//!
//! The API is public: any origin, method, and header is accepted, and
//! preflight requests are answered with `204 No Content` without reaching the
//! handlers.

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode, header};
use actix_web::middleware::Next;

/// Preflight responses may be cached by browsers for this many seconds.
const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Build the CORS middleware applied to every route.
///
/// Responses carry `Access-Control-Allow-Origin: *` rather than echoing the
/// request origin, so credentials are never allowed.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::middleware::permissive_cors;
///
/// let _app = App::new().wrap(permissive_cors());
/// ```
#[must_use]
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}

fn is_preflight(req: &ServiceRequest) -> bool {
    req.method() == Method::OPTIONS
        && req.headers().contains_key(header::ORIGIN)
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Downgrade successful preflight answers to `204 No Content`.
///
/// [`Cors`] replies to preflight with `200 OK`; wrap this outside it with
/// [`actix_web::middleware::from_fn`].
///
/// # Errors
/// Propagates errors from the wrapped service.
pub async fn preflight_no_content(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let preflight = is_preflight(&req);
    let mut res = next.call(req).await?;
    if preflight && res.status() == StatusCode::OK {
        *res.response_mut().status_mut() = StatusCode::NO_CONTENT;
    }
    Ok(res)
}
