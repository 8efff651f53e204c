//! Users API handlers.
//!
//! ```text
//! POST   /api/users       {"name":"Ada","bio":"mathematician"}
//! GET    /api/users
//! GET    /api/users/{id}
//! PUT    /api/users/{id}  {"name":"Ada","bio":"mathematician"}
//! DELETE /api/users/{id}
//! ```
//!
//! Bodies are checked for `name` and `bio` before any port is called. Any
//! body that is not a JSON object is answered with the same 400 as a missing
//! field.

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, USER_NOT_FOUND_MESSAGE, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when `name` or `bio` is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name and bio for the user";

/// Request body for creating or replacing a user.
///
/// Only JSON objects deserialise. A field that is absent or not a string is
/// read as `None` so it can be reported with the API's own message.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(from = "Map<String, Value>")]
pub struct UserRequest {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "mathematician")]
    pub bio: Option<String>,
}

impl From<Map<String, Value>> for UserRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut text = |key: &str| match body.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        };
        Self {
            name: text("name"),
            bio: text("bio"),
        }
    }
}

fn missing_fields() -> Error {
    Error::invalid_request(MISSING_FIELDS_MESSAGE)
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        let UserRequest { name, bio } = value;
        let (Some(name), Some(bio)) = (name, bio) else {
            return Err(missing_fields());
        };
        UserDraft::try_new(name, bio).map_err(|_| missing_fields())
    }
}

/// An id that is not an integer can never have been issued.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>()
        .map_err(|_| Error::not_found(USER_NOT_FOUND_MESSAGE))
}

/// JSON extractor configuration for user bodies.
///
/// Malformed JSON, a wrong content type, or mistyped fields all collapse into
/// the missing-fields 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "rejected user request body");
        missing_fields().into()
    })
}

/// Mount every user route under `/api/users`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let _app = App::new().service(users::scope());
/// ```
pub fn scope() -> Scope {
    web::scope("/api/users")
        .app_data(json_config())
        .service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Missing name or bio", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner())?;
    let user = state.users.create_user(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "Unknown user", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}

/// Replace a user's `name` and `bio`.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Missing name or bio", body = ErrorBody),
        (status = 404, description = "Unknown user", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let draft = UserDraft::try_from(payload.into_inner())?;
    let id = parse_user_id(&path)?;
    let user = state.users.update_user(id, draft).await?;
    Ok(web::Json(user))
}

/// Delete a user, returning the removed record.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Removed user", body = UserSchema),
        (status = 404, description = "Unknown user", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users.delete_user(id).await?;
    Ok(web::Json(user))
}
