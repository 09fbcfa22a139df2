use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::accounts::tests::common::MemoryAccounts;
use crate::accounts::AccountService;
use crate::community::{CommunityBoard, CommunityState, FarmDiary, NewPost};

pub(super) const RAVI: &str = "9847012345";
pub(super) const MEERA: &str = "9447098765";

pub(super) fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn draft(title: &str, content: &str, category: Option<&str>) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: content.to_string(),
        category: category.map(str::to_string),
        image_url: None,
    }
}

pub(super) fn community_state() -> CommunityState<MemoryAccounts> {
    CommunityState {
        accounts: Arc::new(AccountService::new(Arc::new(MemoryAccounts::default()))),
        board: Arc::new(CommunityBoard::new()),
        diary: Arc::new(FarmDiary::default()),
    }
}

/// Bearer header value for a fresh password login.
pub(super) fn bearer(state: &CommunityState<MemoryAccounts>, phone: &str) -> String {
    let session = state
        .accounts
        .password_login(phone, "kuttanad#1", noon())
        .expect("login succeeds");
    format!("Bearer {}", session.token)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
