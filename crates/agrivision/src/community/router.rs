use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::board::{BoardError, CommunityBoard, NewPost, ALL_CATEGORIES};
use super::diary::{DiaryEntry, DiaryError, FarmDiary};
use crate::accounts::router::{auth_error_response, bearer_token};
use crate::accounts::{AccountRepository, AccountService, AuthError, Session};

/// Shared stores behind the diary and community endpoints.
pub struct CommunityState<R> {
    pub accounts: Arc<AccountService<R>>,
    pub board: Arc<CommunityBoard>,
    pub diary: Arc<FarmDiary>,
}

impl<R> Clone for CommunityState<R> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            board: Arc::clone(&self.board),
            diary: Arc::clone(&self.diary),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: String,
}

/// Router for the farm diary and the community board. Every route needs a bearer session.
pub fn community_router<R>(state: CommunityState<R>) -> Router
where
    R: AccountRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/diary",
            get(diary_entries_handler::<R>).post(record_diary_handler::<R>),
        )
        .route("/api/v1/community", get(list_posts_handler::<R>))
        .route("/api/v1/community/posts", post(publish_handler::<R>))
        .route(
            "/api/v1/community/posts/:post_id",
            delete(delete_post_handler::<R>),
        )
        .route(
            "/api/v1/community/posts/:post_id/comments",
            post(comment_handler::<R>),
        )
        .route(
            "/api/v1/community/posts/:post_id/comments/:index",
            delete(delete_comment_handler::<R>),
        )
        .route(
            "/api/v1/community/posts/:post_id/like",
            post(like_handler::<R>),
        )
        .with_state(state)
}

fn authorize<R>(state: &CommunityState<R>, headers: &HeaderMap) -> Result<Session, Response>
where
    R: AccountRepository + 'static,
{
    let token = bearer_token(headers).ok_or_else(|| auth_error_response(AuthError::InvalidSession))?;
    state.accounts.authenticate(token).map_err(auth_error_response)
}

pub(crate) async fn diary_entries_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state.diary.entries(&session.phone) {
        Ok(entries) => (StatusCode::OK, axum::Json(json!({ "entries": entries }))).into_response(),
        Err(error) => diary_error_response(error),
    }
}

pub(crate) async fn record_diary_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    axum::Json(entry): axum::Json<DiaryEntry>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    let recorded = match state.diary.record(&session.phone, entry) {
        Ok(recorded) => recorded,
        Err(error) => return diary_error_response(error),
    };
    match state.diary.entries(&session.phone) {
        Ok(entries) => {
            let status = if recorded.is_some() {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let payload = json!({ "recorded": recorded.is_some(), "entries": entries });
            (status, axum::Json(payload)).into_response()
        }
        Err(error) => diary_error_response(error),
    }
}

pub(crate) async fn list_posts_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    Query(filter): Query<CategoryFilter>,
) -> Response
where
    R: AccountRepository + 'static,
{
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    let category = filter.category.as_deref().unwrap_or(ALL_CATEGORIES);
    match state.board.posts(Some(category)) {
        Ok(posts) => {
            let payload = json!({ "category": category, "posts": posts });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn publish_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    axum::Json(draft): axum::Json<NewPost>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state.board.publish(&session.phone, draft, Utc::now()) {
        Ok(post) => (StatusCode::CREATED, axum::Json(post)).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn comment_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    Path(post_id): Path<u64>,
    axum::Json(request): axum::Json<CommentRequest>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state
        .board
        .comment(post_id, &session.phone, &request.text, Utc::now())
    {
        Ok(post) => (StatusCode::CREATED, axum::Json(post)).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn like_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    Path(post_id): Path<u64>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state.board.like(post_id, &session.phone) {
        Ok(post) => (StatusCode::OK, axum::Json(post)).into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn delete_post_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    Path(post_id): Path<u64>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state.board.delete_post(post_id, &session.phone) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => board_error_response(error),
    }
}

pub(crate) async fn delete_comment_handler<R>(
    State(state): State<CommunityState<R>>,
    headers: HeaderMap,
    Path((post_id, index)): Path<(u64, usize)>,
) -> Response
where
    R: AccountRepository + 'static,
{
    let session = match authorize(&state, &headers) {
        Ok(session) => session,
        Err(response) => return response,
    };
    match state.board.delete_comment(post_id, index, &session.phone) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => board_error_response(error),
    }
}

fn board_error_response(error: BoardError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status(), axum::Json(payload)).into_response()
}

fn diary_error_response(error: DiaryError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

impl BoardError {
    pub fn status(&self) -> StatusCode {
        match self {
            BoardError::MissingTitle | BoardError::MissingContent | BoardError::EmptyComment => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            BoardError::PostNotFound(_) | BoardError::CommentNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            BoardError::NotAuthor => StatusCode::FORBIDDEN,
            BoardError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
