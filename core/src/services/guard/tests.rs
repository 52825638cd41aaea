use std::sync::Arc;

use jsonwebtoken::Algorithm;

use super::{extract_bearer_token, AuthGuard};
use crate::domain::entities::user::{Role, User};
use crate::errors::{AuthError, DomainError, ErrorKind, TokenError};
use crate::repositories::MockUserRepository;
use crate::services::token::{TokenService, TokenServiceConfig};

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        TokenServiceConfig::new("guard-test-secret", Algorithm::HS256).unwrap(),
    ))
}

fn setup(users: Vec<User>) -> (AuthGuard<MockUserRepository>, Arc<MockUserRepository>, Arc<TokenService>) {
    let repo = Arc::new(MockUserRepository::with_users(users));
    let tokens = token_service();
    (AuthGuard::new(repo.clone(), tokens.clone()), repo, tokens)
}

fn bearer_for(tokens: &TokenService, user: &User) -> String {
    format!(
        "Bearer {}",
        tokens.issue(&user.email, &user.id.to_string(), None).unwrap()
    )
}

#[test]
fn test_extract_bearer_token() {
    assert_eq!(extract_bearer_token("Bearer abc.def"), Some("abc.def"));
    assert_eq!(extract_bearer_token("Bearer  abc "), Some("abc"));
    assert_eq!(extract_bearer_token("Bearer "), None);
    assert_eq!(extract_bearer_token("Basic abc"), None);
    assert_eq!(extract_bearer_token("abc"), None);
}

#[test]
fn test_identify_without_token() {
    let (guard, _, _) = setup(vec![]);
    assert_eq!(guard.identify(None).unwrap(), None);
}

#[test]
fn test_identify_valid_token() {
    let (guard, _, tokens) = setup(vec![]);
    let token = tokens.issue("a@b.com", "42", None).unwrap();

    let identity = guard.identify(Some(&token)).unwrap().unwrap();
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.id, "42");
}

#[test]
fn test_identify_invalid_token_is_error() {
    let (guard, _, _) = setup(vec![]);

    let err = guard.identify(Some("garbage")).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn test_identify_does_not_consult_store() {
    // the account was never stored; identity still resolves from the token
    let (guard, _, tokens) = setup(vec![]);
    let token = tokens.issue("ghost@b.com", "1", None).unwrap();

    assert!(guard.identify(Some(&token)).unwrap().is_some());
}

#[test]
fn test_require_authenticated_missing_token() {
    let (guard, _, _) = setup(vec![]);

    let err = guard.require_authenticated(None).unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::MissingToken)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_require_role_success() {
    let admin = User::new("Admin".into(), "admin@x.com".into(), "h".into()).with_role(Role::Admin);
    let (guard, _, tokens) = setup(vec![admin.clone()]);
    let header = bearer_for(&tokens, &admin);

    let user = guard.require_role(Some(&header), Role::Admin).await.unwrap();
    assert_eq!(user.id, admin.id);
}

#[tokio::test]
async fn test_require_role_forbidden() {
    let user = User::new("User".into(), "user@x.com".into(), "h".into());
    let (guard, _, tokens) = setup(vec![user.clone()]);
    let header = bearer_for(&tokens, &user);

    let err = guard.require_role(Some(&header), Role::Admin).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InsufficientRole { required: Role::Admin })
    ));
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_require_role_missing_or_malformed_header() {
    let (guard, _, _) = setup(vec![]);

    let err = guard.require_role(None, Role::Admin).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::MissingToken)));

    let err = guard.require_role(Some("Token abc"), Role::Admin).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::MissingToken)));
}

#[tokio::test]
async fn test_require_role_invalid_token() {
    let (guard, _, _) = setup(vec![]);

    let err = guard
        .require_role(Some("Bearer not.a.token"), Role::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_require_role_account_removed_after_issuance() {
    let admin = User::new("Admin".into(), "admin@x.com".into(), "h".into()).with_role(Role::Admin);
    let (guard, repo, tokens) = setup(vec![admin.clone()]);
    let header = bearer_for(&tokens, &admin);

    repo.remove(admin.id).await;

    let err = guard.require_role(Some(&header), Role::Admin).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}
