//! Farm diary and the farmers' knowledge-sharing board.

pub mod board;
pub mod diary;
pub mod router;

#[cfg(test)]
mod tests;

pub use board::{BoardError, Comment, CommunityBoard, NewPost, Post, ALL_CATEGORIES};
pub use diary::{DiaryEntry, DiaryError, FarmDiary, DEFAULT_DIARY_CAPACITY};
pub use router::{community_router, CommunityState};
