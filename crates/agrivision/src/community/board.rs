use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_CATEGORY: &str = "general";
/// Category filter value that lists every post.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub likes: u32,
    pub liked_by: Vec<String>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// Fields a farmer fills in when sharing a problem or a tip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default)]
struct BoardState {
    last_id: u64,
    /// Newest first.
    posts: Vec<Post>,
}

/// Knowledge-sharing board where farmers post problems, photos and answers.
#[derive(Debug, Default)]
pub struct CommunityBoard {
    state: Mutex<BoardState>,
}

impl CommunityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(
        &self,
        author: &str,
        draft: NewPost,
        now: DateTime<Utc>,
    ) -> Result<Post, BoardError> {
        let title = draft.title.trim();
        let content = draft.content.trim();
        if title.is_empty() {
            return Err(BoardError::MissingTitle);
        }
        if content.is_empty() {
            return Err(BoardError::MissingContent);
        }
        let category = draft
            .category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let image_url = draft
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let mut state = self.lock()?;
        state.last_id += 1;
        let post = Post {
            id: state.last_id,
            author: author.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            image_url,
            likes: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
            created_at: now,
        };
        state.posts.insert(0, post.clone());
        info!(post_id = post.id, category = %post.category, "community post published");
        Ok(post)
    }

    /// Posts newest first; `None` or `"all"` lists every category.
    pub fn posts(&self, category: Option<&str>) -> Result<Vec<Post>, BoardError> {
        let state = self.lock()?;
        let filter = category
            .map(str::trim)
            .filter(|category| !category.is_empty() && !category.eq_ignore_ascii_case(ALL_CATEGORIES));

        Ok(match filter {
            None => state.posts.clone(),
            Some(category) => state
                .posts
                .iter()
                .filter(|post| post.category.eq_ignore_ascii_case(category))
                .cloned()
                .collect(),
        })
    }

    pub fn comment(
        &self,
        post_id: u64,
        author: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Post, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyComment);
        }

        let mut state = self.lock()?;
        let post = find_mut(&mut state, post_id)?;
        post.comments.push(Comment {
            author: author.to_string(),
            text: text.to_string(),
            created_at: now,
        });
        Ok(post.clone())
    }

    /// Counts each user once; repeated likes leave the post unchanged.
    pub fn like(&self, post_id: u64, user: &str) -> Result<Post, BoardError> {
        let mut state = self.lock()?;
        let post = find_mut(&mut state, post_id)?;
        if !post.liked_by.iter().any(|existing| existing == user) {
            post.liked_by.push(user.to_string());
            post.likes += 1;
        }
        Ok(post.clone())
    }

    pub fn delete_post(&self, post_id: u64, user: &str) -> Result<Post, BoardError> {
        let mut state = self.lock()?;
        let position = state
            .posts
            .iter()
            .position(|post| post.id == post_id)
            .ok_or(BoardError::PostNotFound(post_id))?;
        if state.posts[position].author != user {
            return Err(BoardError::NotAuthor);
        }
        let removed = state.posts.remove(position);
        info!(post_id, "community post deleted");
        Ok(removed)
    }

    pub fn delete_comment(
        &self,
        post_id: u64,
        index: usize,
        user: &str,
    ) -> Result<Comment, BoardError> {
        let mut state = self.lock()?;
        let post = find_mut(&mut state, post_id)?;
        let comment = post
            .comments
            .get(index)
            .ok_or(BoardError::CommentNotFound { post_id, index })?;
        if comment.author != user {
            return Err(BoardError::NotAuthor);
        }
        Ok(post.comments.remove(index))
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoardState>, BoardError> {
        self.state.lock().map_err(|_| BoardError::poisoned("board"))
    }
}

fn find_mut(state: &mut BoardState, post_id: u64) -> Result<&mut Post, BoardError> {
    state
        .posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or(BoardError::PostNotFound(post_id))
}

/// Error raised by the diary and the community board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("content must not be empty")]
    MissingContent,
    #[error("comment must not be empty")]
    EmptyComment,
    #[error("post {0} not found")]
    PostNotFound(u64),
    #[error("comment {index} not found on post {post_id}")]
    CommentNotFound { post_id: u64, index: usize },
    #[error("only the author can delete this")]
    NotAuthor,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl BoardError {
    pub(crate) fn poisoned(store: &str) -> Self {
        Self::Unavailable(format!("{store} lock poisoned"))
    }
}
