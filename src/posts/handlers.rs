// HTTP handlers for post endpoints

use axum::{extract::State, Json};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ResourceId, ValidatedJson};
use crate::models::MessageResponse;
use crate::posts::{CreatePost, Post, UpdatePost};
use crate::AppState;

const RESOURCE: &str = "Post";

/// Handler for POST /posts
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePost,
    responses(
        (status = 200, description = "Post created", body = Post),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreatePost>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .posts
        .create(user.user_id, &payload.title, &payload.description)
        .await?;

    tracing::info!("Created post id={} for user {}", post.id, user.user_id);
    Ok(Json(post))
}

/// Handler for GET /posts
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "The caller's posts", body = Vec<Post>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn list_posts(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.posts.list_owned(user.user_id).await?;
    Ok(Json(posts))
}

/// Handler for GET /posts/:id
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = Post),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn get_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .posts
        .find_owned(id, user.user_id)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    Ok(Json(post))
}

/// Handler for PUT /posts/:id
#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePost,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
    changes: Result<ValidatedJson<UpdatePost>, ApiError>,
) -> Result<Json<Post>, ApiError> {
    if state.posts.find_owned(id, user.user_id).await?.is_none() {
        return Err(ApiError::NotFound { resource: RESOURCE });
    }
    let ValidatedJson(changes) = changes?;

    let post = state
        .posts
        .update_owned(id, user.user_id, changes)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    tracing::info!("Updated post id={}", id);
    Ok(Json(post))
}

/// Handler for DELETE /posts/:id
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "posts"
)]
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.posts.delete_owned(id, user.user_id).await? {
        return Err(ApiError::NotFound { resource: RESOURCE });
    }

    tracing::info!("Deleted post id={}", id);
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
