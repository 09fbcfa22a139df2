use super::common::*;
use std::sync::Arc;

use crate::accounts::{
    AccountRepository, AccountService, AuthAction, AuthError, OtpPolicy, RepositoryError,
};

#[test]
fn first_verification_registers_with_default_name() {
    let (service, repository) = build_service();

    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");
    assert_eq!(dispatch.action, AuthAction::Signup);
    assert!(!dispatch.is_registered);
    assert_eq!(dispatch.masked_destination, "******2345");
    assert_eq!(
        dispatch.message,
        "OTP sent to ******2345. Complete registration by verifying OTP."
    );
    assert_eq!(dispatch.otp_for_demo.len(), 6);
    assert!(dispatch.otp_for_demo.chars().all(|c| c.is_ascii_digit()));

    let outcome = service
        .verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(30))
        .expect("otp verified");
    assert!(outcome.new_account);
    assert_eq!(outcome.account.name, "Farmer_2345");
    assert_eq!(
        outcome.message,
        "Registration successful! Welcome to AgriVision."
    );
    assert_eq!(outcome.session.phone, MOBILE);

    let stored = repository
        .fetch(&outcome.account.mobile)
        .expect("fetch succeeds")
        .expect("account stored");
    assert!(stored.verified);
    assert_eq!(stored.registered_at, later(30));

    let session = service
        .authenticate(&outcome.session.token)
        .expect("session resolves");
    assert_eq!(session, outcome.session);
}

#[test]
fn returning_farmer_logs_in_and_refreshes_last_login() {
    let (service, _) = build_service();
    let first = service.request_otp(MOBILE, morning()).expect("otp issued");
    service
        .verify_otp(MOBILE, &first.otp_for_demo, Some("  Lakshmi "), later(5))
        .expect("registered");

    let second = service.request_otp(MOBILE, later(120)).expect("otp issued");
    assert_eq!(second.action, AuthAction::Login);
    assert!(second.is_registered);
    assert!(second.message.ends_with("Welcome back!"));

    let outcome = service
        .verify_otp(MOBILE, &second.otp_for_demo, Some("Ignored"), later(150))
        .expect("logged in");
    assert!(!outcome.new_account);
    assert_eq!(outcome.message, "Login successful! Welcome back.");
    assert_eq!(outcome.account.name, "Lakshmi");
    assert_eq!(outcome.account.registered_at, later(5));
    assert_eq!(outcome.account.last_login, later(150));
}

#[test]
fn resend_is_blocked_during_cooldown() {
    let (service, _) = build_service();
    service.request_otp(MOBILE, morning()).expect("otp issued");

    match service.request_otp(MOBILE, later(10)) {
        Err(AuthError::Cooldown { remaining_secs }) => assert_eq!(remaining_secs, 50),
        other => panic!("expected cooldown, got {other:?}"),
    }

    service
        .request_otp(MOBILE, later(60))
        .expect("cooldown elapsed");
}

#[test]
fn expired_code_is_discarded() {
    let (service, _) = build_service();
    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");

    assert!(matches!(
        service.verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(301)),
        Err(AuthError::OtpExpired)
    ));
    assert!(matches!(
        service.verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(302)),
        Err(AuthError::NoPendingOtp)
    ));
}

#[test]
fn code_is_still_valid_at_the_expiry_instant() {
    let (service, _) = build_service();
    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");
    assert_eq!(dispatch.expires_at, later(300));

    service
        .verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(300))
        .expect("boundary accepted");
}

#[test]
fn three_wrong_codes_lock_the_request() {
    let (service, _) = build_service();
    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");

    assert!(matches!(
        service.verify_otp(MOBILE, "abcdef", None, later(1)),
        Err(AuthError::InvalidOtp { remaining: 2 })
    ));
    assert!(matches!(
        service.verify_otp(MOBILE, "abcdef", None, later(2)),
        Err(AuthError::InvalidOtp { remaining: 1 })
    ));
    assert!(matches!(
        service.verify_otp(MOBILE, "abcdef", None, later(3)),
        Err(AuthError::AttemptsExhausted)
    ));
    assert!(matches!(
        service.verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(4)),
        Err(AuthError::NoPendingOtp)
    ));
}

#[test]
fn invalid_otp_message_counts_down() {
    let err = AuthError::InvalidOtp { remaining: 2 };
    assert_eq!(err.to_string(), "Invalid OTP. 2 attempts remaining.");
}

#[test]
fn custom_policy_changes_code_length() {
    let policy = OtpPolicy {
        code_length: 4,
        ..OtpPolicy::default()
    };
    let service = AccountService::with_policy(Arc::new(MemoryAccounts::default()), policy);
    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");
    assert_eq!(dispatch.otp_for_demo.len(), 4);
}

#[test]
fn password_login_issues_session_until_logout() {
    let (service, _) = build_service();

    let session = service
        .password_login(" 1234567890 ", "paddy#42", morning())
        .expect("login succeeds");
    assert_eq!(session.phone, "1234567890");
    assert!(service.authenticate(&session.token).is_ok());

    service.logout(&session.token).expect("logout succeeds");
    assert!(matches!(
        service.authenticate(&session.token),
        Err(AuthError::InvalidSession)
    ));
    assert!(matches!(
        service.logout(&session.token),
        Err(AuthError::InvalidSession)
    ));
}

#[test]
fn password_login_rejects_weak_passwords() {
    let (service, _) = build_service();
    assert!(matches!(
        service.password_login("1234567890", "paddy42", morning()),
        Err(AuthError::WeakPassword)
    ));
    assert!(matches!(
        service.password_login("12345", "paddy#42", morning()),
        Err(AuthError::PhoneLength)
    ));
}

#[test]
fn deleting_an_account_revokes_its_sessions() {
    let (service, repository) = build_service();
    let dispatch = service.request_otp(MOBILE, morning()).expect("otp issued");
    let outcome = service
        .verify_otp(MOBILE, &dispatch.otp_for_demo, None, later(5))
        .expect("registered");

    assert_eq!(service.accounts().expect("list").len(), 1);
    service.delete_account("98470-12345").expect("deleted");

    assert!(repository.list().expect("list").is_empty());
    assert!(matches!(
        service.authenticate(&outcome.session.token),
        Err(AuthError::InvalidSession)
    ));
    assert!(matches!(
        service.delete_account(MOBILE),
        Err(AuthError::AccountNotFound)
    ));
}

#[test]
fn repository_failures_propagate() {
    let service = AccountService::new(Arc::new(UnavailableAccounts));
    match service.request_otp(MOBILE, morning()) {
        Err(AuthError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository failure, got {other:?}"),
    }
}
