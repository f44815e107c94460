//! User service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use linkvault::domain::User;
use linkvault::errors::AppError;
use linkvault::infra::MockUserRepository;
use linkvault::services::{UserManager, UserService};

fn test_user(id: Uuid, email: &str) -> User {
    User {
        id,
        email: email.to_string(),
        password_hash: "hashed".to_string(),
        first_name: None,
        last_name: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn get_user_returns_user() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id, "test@example.com"))));

    let service = UserManager::new(Arc::new(repo));
    let user = service.get_user(user_id).await.unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn update_user_patches_profile_fields() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_update()
        .returning(|id, email, first_name, last_name| {
            let mut user = test_user(id, "test@example.com");
            if let Some(email) = email {
                user.email = email;
            }
            user.first_name = first_name.or(user.first_name);
            user.last_name = last_name.or(user.last_name);
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .update_user(
            user_id,
            Some("ramorban@gmail.com".to_string()),
            Some("Ramon Morban".to_string()),
            None,
        )
        .await
        .unwrap();

    assert_eq!(user.email, "ramorban@gmail.com");
    assert_eq!(user.first_name.as_deref(), Some("Ramon Morban"));
}

#[tokio::test]
async fn update_user_keeps_own_email() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    // The email resolves to the caller's own record, which is not a conflict
    repo.expect_find_by_email()
        .returning(move |email| Ok(Some(test_user(user_id, email))));
    repo.expect_update()
        .returning(|id, email, _, _| {
            let mut user = test_user(id, "test@example.com");
            if let Some(email) = email {
                user.email = email;
            }
            Ok(user)
        });

    let service = UserManager::new(Arc::new(repo));
    let user = service
        .update_user(user_id, Some("test@example.com".to_string()), None, None)
        .await
        .unwrap();

    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn update_user_rejects_email_taken_by_another_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email))));

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(
            Uuid::new_v4(),
            Some("taken@example.com".to_string()),
            None,
            None,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}
