//! End-to-end scenarios for a farmer who signs up by OTP, keeps a diary and uses the
//! community board, driven entirely through the public HTTP routers.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use agrivision::accounts::{
        accounts_router, Account, AccountRepository, AccountService, MobileNumber,
        RepositoryError,
    };
    use agrivision::community::{community_router, CommunityBoard, CommunityState, FarmDiary};
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::Value;

    #[derive(Default, Clone)]
    pub(super) struct SharedAccounts {
        records: Arc<Mutex<HashMap<MobileNumber, Account>>>,
    }

    impl AccountRepository for SharedAccounts {
        fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
            let mut guard = self.records.lock().expect("accounts mutex poisoned");
            if guard.contains_key(&account.mobile) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(account.mobile.clone(), account.clone());
            Ok(account)
        }

        fn update(&self, account: Account) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("accounts mutex poisoned");
            match guard.get_mut(&account.mobile) {
                Some(existing) => {
                    *existing = account;
                    Ok(())
                }
                None => Err(RepositoryError::NotFound),
            }
        }

        fn fetch(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("accounts mutex poisoned")
                .get(mobile)
                .cloned())
        }

        fn remove(&self, mobile: &MobileNumber) -> Result<Option<Account>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("accounts mutex poisoned")
                .remove(mobile))
        }

        fn list(&self) -> Result<Vec<Account>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("accounts mutex poisoned")
                .values()
                .cloned()
                .collect())
        }
    }

    pub(super) fn app() -> (axum::Router, SharedAccounts) {
        let repository = SharedAccounts::default();
        let accounts = Arc::new(AccountService::new(Arc::new(repository.clone())));
        let state = CommunityState {
            accounts: Arc::clone(&accounts),
            board: Arc::new(CommunityBoard::new()),
            diary: Arc::new(FarmDiary::default()),
        };
        let router = accounts_router(accounts).merge(community_router(state));
        (router, repository)
    }

    pub(super) fn request(
        method: &str,
        uri: &str,
        token: Option<&str>,
        payload: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match payload {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        }
    }

    pub(super) async fn json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    /// Runs the OTP signup for `mobile` and returns the bearer token.
    pub(super) async fn sign_up(router: &axum::Router, mobile: &str, name: &str) -> String {
        use tower::ServiceExt;

        let response = router
            .clone()
            .oneshot(request(
                "POST",
                "/api/v1/auth/otp/request",
                None,
                Some(serde_json::json!({ "mobile": mobile })),
            ))
            .await
            .expect("otp request");
        let dispatch = json(response).await;
        let code = dispatch["otp_for_demo"].as_str().expect("otp echoed").to_string();

        let response = router
            .clone()
            .oneshot(request(
                "POST",
                "/api/v1/auth/otp/verify",
                None,
                Some(serde_json::json!({ "mobile": mobile, "otp": code, "name": name })),
            ))
            .await
            .expect("otp verify");
        let outcome = json(response).await;
        outcome["session"]["token"]
            .as_str()
            .expect("session token")
            .to_string()
    }
}

use agrivision::accounts::{validate_mobile, AccountRepository};
use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn otp_signup_registers_account_and_issues_session() {
    let (router, repository) = app();

    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/auth/otp/request",
            None,
            Some(json!({ "mobile": "98470 12345" })),
        ))
        .await
        .expect("otp request");
    assert_eq!(response.status(), StatusCode::OK);
    let dispatch = json(response).await;
    assert_eq!(dispatch["action"], "signup");
    assert_eq!(dispatch["is_registered"], false);
    assert_eq!(dispatch["masked_destination"], "******2345");
    let code = dispatch["otp_for_demo"].as_str().expect("code").to_string();
    assert_eq!(code.len(), 6);

    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/auth/otp/verify",
            None,
            Some(json!({ "mobile": "9847012345", "otp": code, "name": "Ravi" })),
        ))
        .await
        .expect("otp verify");
    assert_eq!(response.status(), StatusCode::CREATED);
    let outcome = json(response).await;
    assert_eq!(outcome["new_account"], true);
    assert_eq!(outcome["account"]["name"], "Ravi");
    assert_eq!(outcome["account"]["mobile"], "9847012345");

    let mobile = validate_mobile("9847012345").expect("valid mobile");
    let stored = repository.fetch(&mobile).expect("fetch").expect("stored");
    assert!(stored.verified);
}

#[tokio::test]
async fn second_otp_for_registered_number_is_a_login() {
    let (router, _) = app();
    sign_up(&router, "9847012345", "Ravi").await;

    // The cooldown is per pending code, and verification consumed it.
    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/auth/otp/request",
            None,
            Some(json!({ "mobile": "9847012345" })),
        ))
        .await
        .expect("otp request");
    assert_eq!(response.status(), StatusCode::OK);
    let dispatch = json(response).await;
    assert_eq!(dispatch["action"], "login");
    assert_eq!(dispatch["is_registered"], true);

    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/auth/otp/verify",
            None,
            Some(json!({ "mobile": "9847012345", "otp": dispatch["otp_for_demo"] })),
        ))
        .await
        .expect("otp verify");
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = json(response).await;
    assert_eq!(outcome["new_account"], false);
    assert_eq!(outcome["account"]["name"], "Ravi");
}

#[tokio::test]
async fn diary_and_board_follow_the_session() {
    let (router, _) = app();
    let ravi = sign_up(&router, "9847012345", "Ravi").await;
    let meera = sign_up(&router, "9447000111", "Meera").await;

    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/diary",
            Some(&ravi),
            Some(json!({ "date": "2025-06-02", "crop": "Paddy", "irrigation": "Flooded" })),
        ))
        .await
        .expect("diary write");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(request("GET", "/api/v1/diary", Some(&meera), None))
        .await
        .expect("diary read");
    let entries = json(response).await;
    assert_eq!(entries["entries"].as_array().map(Vec::len), Some(0));

    let response = router
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/community/posts",
            Some(&ravi),
            Some(json!({ "title": "Leaf folder", "content": "Rolled leaves on paddy", "category": "Pests" })),
        ))
        .await
        .expect("publish");
    assert_eq!(response.status(), StatusCode::CREATED);
    let post = json(response).await;
    let post_id = post["id"].as_u64().expect("post id");

    let like_uri = format!("/api/v1/community/posts/{post_id}/like");
    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(request("POST", &like_uri, Some(&meera), None))
            .await
            .expect("like");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(request("GET", "/api/v1/community?category=pests", Some(&meera), None))
        .await
        .expect("list");
    let listing = json(response).await;
    assert_eq!(listing["posts"][0]["likes"], 1);

    let delete_uri = format!("/api/v1/community/posts/{post_id}");
    let response = router
        .clone()
        .oneshot(request("DELETE", &delete_uri, Some(&meera), None))
        .await
        .expect("delete by other farmer");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = router
        .clone()
        .oneshot(request("DELETE", &delete_uri, Some(&ravi), None))
        .await
        .expect("delete by author");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn logout_revokes_community_access() {
    let (router, _) = app();
    let token = sign_up(&router, "9847012345", "Ravi").await;

    let response = router
        .clone()
        .oneshot(request("POST", "/api/v1/auth/logout", Some(&token), None))
        .await
        .expect("logout");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .clone()
        .oneshot(request("GET", "/api/v1/community", Some(&token), None))
        .await
        .expect("list after logout");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
