use emporia_accounts::domain::types::OtpPurpose;
use emporia_accounts::error::AccountsServiceError;
use emporia_accounts::usecase::password::{
    ForgotPasswordUseCase, ResetPasswordInput, ResetPasswordUseCase, verify_password,
};

use crate::helpers::{MockAccountRepo, MockMailer, MockOtpRepo, test_account, valid_code};

// ── Forgot ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_reset_code_and_mail_it() {
    let account = test_account();
    let otps = MockOtpRepo::empty();
    let codes_handle = otps.codes_handle();
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();

    let uc = ForgotPasswordUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        otps,
        mailer,
    };
    uc.execute(&account.email).await.unwrap();

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].purpose, OtpPurpose::ResetPassword);
    assert_eq!(sent_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_email_on_forgot() {
    let uc = ForgotPasswordUseCase {
        accounts: MockAccountRepo::empty(),
        otps: MockOtpRepo::empty(),
        mailer: MockMailer::new(),
    };

    let result = uc.execute("nobody@example.com").await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

// ── Reset ────────────────────────────────────────────────────────────────────

fn reset_input(email: &str, code: &str) -> ResetPasswordInput {
    ResetPasswordInput {
        email: email.to_owned(),
        code: code.to_owned(),
        new_password: "fresh-password".to_owned(),
        confirm_password: "fresh-password".to_owned(),
    }
}

#[tokio::test]
async fn should_reset_password_with_valid_code() {
    let account = test_account();
    let accounts = MockAccountRepo::new(vec![account.clone()]);
    let accounts_handle = accounts.accounts_handle();
    let otps = MockOtpRepo::new(vec![valid_code(
        account.id,
        "777000",
        OtpPurpose::ResetPassword,
    )]);

    let uc = ResetPasswordUseCase { accounts, otps };
    uc.execute(reset_input(&account.email, "777000")).await.unwrap();

    let stored = accounts_handle.lock().unwrap();
    assert!(verify_password("fresh-password", &stored[0].password_hash).unwrap());
    assert!(!verify_password("hunter2!", &stored[0].password_hash).unwrap());
}

#[tokio::test]
async fn should_not_burn_code_on_confirmation_mismatch() {
    let account = test_account();
    let otps = MockOtpRepo::new(vec![valid_code(
        account.id,
        "777000",
        OtpPurpose::ResetPassword,
    )]);
    let codes_handle = otps.codes_handle();

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        otps,
    };

    let result = uc
        .execute(ResetPasswordInput {
            confirm_password: "tyop".to_owned(),
            ..reset_input(&account.email, "777000")
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::PasswordMismatch)));
    assert!(
        codes_handle.lock().unwrap()[0].consumed_at.is_none(),
        "mismatch is caught before the code is touched"
    );

    // The same code still works on the corrected retry.
    uc.execute(reset_input(&account.email, "777000")).await.unwrap();
}

#[tokio::test]
async fn should_reject_weak_replacement_password() {
    let account = test_account();

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        otps: MockOtpRepo::new(vec![valid_code(
            account.id,
            "777000",
            OtpPurpose::ResetPassword,
        )]),
    };

    let result = uc
        .execute(ResetPasswordInput {
            new_password: "abc".to_owned(),
            confirm_password: "abc".to_owned(),
            ..reset_input(&account.email, "777000")
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::WeakPassword)));
}

#[tokio::test]
async fn should_not_accept_signup_code_for_reset() {
    let account = test_account();

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        otps: MockOtpRepo::new(vec![valid_code(account.id, "777000", OtpPurpose::Signup)]),
    };

    let result = uc.execute(reset_input(&account.email, "777000")).await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidCode)));
}

#[tokio::test]
async fn should_reset_only_once_per_code() {
    let account = test_account();

    let uc = ResetPasswordUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        otps: MockOtpRepo::new(vec![valid_code(
            account.id,
            "777000",
            OtpPurpose::ResetPassword,
        )]),
    };

    uc.execute(reset_input(&account.email, "777000")).await.unwrap();

    let again = uc.execute(reset_input(&account.email, "777000")).await;
    assert!(matches!(again, Err(AccountsServiceError::InvalidCode)));
}
