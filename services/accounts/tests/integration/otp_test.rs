use chrono::Utc;

use emporia_accounts::domain::types::OtpPurpose;
use emporia_accounts::error::AccountsServiceError;
use emporia_accounts::usecase::otp::{issue, issue_if_none_valid, verify};

use crate::helpers::{
    MockAccountRepo, MockOtpRepo, expired_code, test_account, valid_code,
};

#[tokio::test]
async fn should_issue_unconsumed_code_with_full_ttl() {
    let account = test_account();
    let otps = MockOtpRepo::empty();

    let code = issue(&otps, account.id, OtpPurpose::Signup).await.unwrap();

    assert_eq!(code.code.len(), 6);
    assert!(code.code.chars().all(|c| c.is_ascii_digit()));
    assert!(code.consumed_at.is_none());
    assert!(code.expires_at > Utc::now());
}

#[tokio::test]
async fn should_consume_code_exactly_once() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![valid_code(account.id, "123456", OtpPurpose::Signup)]);
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let (consumed, _) = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup)
        .await
        .unwrap();
    assert!(consumed.consumed_at.is_none(), "returned snapshot predates the flip");

    // The stored row is now spent; a second verify of the same code must
    // look exactly like a wrong code.
    let second = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup).await;
    assert!(
        matches!(second, Err(AccountsServiceError::InvalidCode)),
        "expected InvalidCode, got {second:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![valid_code(account.id, "123456", OtpPurpose::Signup)]);
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let result = verify(&accounts, &otps, &account.email, "654321", OtpPurpose::Signup).await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidCode)));
}

#[tokio::test]
async fn should_reject_code_issued_for_other_purpose() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![valid_code(
        account.id,
        "123456",
        OtpPurpose::ResetPassword,
    )]);
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let result = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup).await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidCode)));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_email() {
    let otps = MockOtpRepo::empty();
    let accounts = MockAccountRepo::empty();

    let result = verify(
        &accounts,
        &otps,
        "nobody@example.com",
        "123456",
        OtpPurpose::Signup,
    )
    .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_report_expiry_without_consuming() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![expired_code(account.id, "123456", OtpPurpose::Signup)]);
    let codes_handle = otps.codes_handle();
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let first = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup).await;
    assert!(matches!(first, Err(AccountsServiceError::CodeExpired)));
    assert!(
        codes_handle.lock().unwrap()[0].consumed_at.is_none(),
        "expired code must not be burned"
    );

    // Retrying keeps saying expired; it never degrades into InvalidCode.
    let second = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup).await;
    assert!(
        matches!(second, Err(AccountsServiceError::CodeExpired)),
        "expected CodeExpired on retry, got {second:?}"
    );
}

#[tokio::test]
async fn should_reuse_outstanding_code_instead_of_minting() {
    let account = test_account();
    let otps = MockOtpRepo::empty();

    let (first, created) = issue_if_none_valid(&otps, account.id, OtpPurpose::Signup)
        .await
        .unwrap();
    assert!(created);

    let (second, created) = issue_if_none_valid(&otps, account.id, OtpPurpose::Signup)
        .await
        .unwrap();
    assert!(!created, "a live code suppresses re-issuance");
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn should_mint_fresh_code_once_previous_expired() {
    let account = test_account();
    let expired = expired_code(account.id, "123456", OtpPurpose::Signup);
    let otps = MockOtpRepo::new(vec![expired.clone()]);

    let (fresh, created) = issue_if_none_valid(&otps, account.id, OtpPurpose::Signup)
        .await
        .unwrap();
    assert!(created);
    // Compare record identity, not code text: six digits can repeat.
    assert_ne!(fresh.id, expired.id);
}

#[tokio::test]
async fn should_let_exactly_one_concurrent_verifier_win() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![valid_code(account.id, "123456", OtpPurpose::Signup)]);
    let otps_b = otps.sharing_store();
    let accounts = MockAccountRepo::new(vec![account.clone()]);

    let a = verify(&accounts, &otps, &account.email, "123456", OtpPurpose::Signup).await;
    let b = verify(&accounts, &otps_b, &account.email, "123456", OtpPurpose::Signup).await;

    let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one verifier may spend the code");
    assert!(
        matches!(b, Err(AccountsServiceError::InvalidCode)),
        "the loser sees InvalidCode"
    );
}
