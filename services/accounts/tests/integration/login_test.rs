use emporia_accounts::error::AccountsServiceError;
use emporia_accounts::usecase::login::{LoginInput, LoginUseCase, issue_access_token};
use emporia_auth_types::token::validate_access_token;

use crate::helpers::{MockAccountRepo, test_account};

#[tokio::test]
async fn should_login_with_correct_credentials() {
    let account = test_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let logged_in = uc
        .execute(LoginInput {
            email: account.email.clone(),
            password: "hunter2!".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.id, account.id);
}

#[tokio::test]
async fn should_normalize_email_on_login() {
    let account = test_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let logged_in = uc
        .execute(LoginInput {
            email: "  Shopper@Example.COM".to_owned(),
            password: "hunter2!".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.id, account.id);
}

#[tokio::test]
async fn should_not_reveal_whether_email_exists() {
    let account = test_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let wrong_password = uc
        .execute(LoginInput {
            email: account.email.clone(),
            password: "wrong".to_owned(),
        })
        .await;
    let unknown_email = uc
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "hunter2!".to_owned(),
        })
        .await;

    assert!(matches!(
        wrong_password,
        Err(AccountsServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        Err(AccountsServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn should_refuse_login_before_activation() {
    let account = crate::helpers::inactive_account();
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let result = uc
        .execute(LoginInput {
            email: account.email,
            password: "hunter2!".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountInactive)));
}

#[tokio::test]
async fn should_refuse_login_for_suspended_account() {
    let mut account = test_account();
    account.is_suspended = true;
    let uc = LoginUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
    };

    let result = uc
        .execute(LoginInput {
            email: account.email,
            password: "hunter2!".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountSuspended)));
}

#[tokio::test]
async fn should_issue_token_the_session_extractor_accepts() {
    let mut account = test_account();
    account.is_partner = true;

    let (token, exp) = issue_access_token(&account, "test-secret").unwrap();
    let info = validate_access_token(&token, "test-secret").unwrap();

    assert_eq!(info.account_id, account.id);
    assert!(info.is_partner);
    assert_eq!(info.access_token_exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_other_secret() {
    let account = test_account();

    let (token, _) = issue_access_token(&account, "test-secret").unwrap();
    assert!(validate_access_token(&token, "other-secret").is_err());
}
