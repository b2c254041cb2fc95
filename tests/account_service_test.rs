// Integration tests for the account service core

mod common;

use common::setup_account_service;
use userstash_backend::errors::AccountError;
use userstash_backend::types::internal::account::UpdateAccount;

#[tokio::test]
async fn test_create_returns_redacted_account() {
    let service = setup_account_service().await;

    let account = service
        .create("Test User", "test@example.com", "password123")
        .await
        .expect("create failed");

    assert!(account.id >= 1);
    assert_eq!(account.name, "Test User");
    assert_eq!(account.email, "test@example.com");

    // The redacted view must not carry the secret under any key
    let value = serde_json::to_value(&account).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("id"));
    assert!(object.contains_key("name"));
    assert!(object.contains_key("email"));
}

#[tokio::test]
async fn test_create_fails_with_duplicate_email() {
    let service = setup_account_service().await;

    service
        .create("First", "dup@example.com", "password123")
        .await
        .expect("first create failed");

    let result = service.create("Second", "dup@example.com", "other456").await;

    match result {
        Err(AccountError::DuplicateEmail { email }) => assert_eq!(email, "dup@example.com"),
        _ => panic!("Expected DuplicateEmail error"),
    }
}

#[tokio::test]
async fn test_validate_with_correct_secret_returns_match() {
    let service = setup_account_service().await;

    let created = service
        .create("Test User", "test@example.com", "password123")
        .await
        .expect("create failed");

    let validated = service
        .validate("test@example.com", "password123")
        .await
        .expect("validate failed");

    assert_eq!(validated, Some(created));
}

#[tokio::test]
async fn test_validate_failures_share_one_sentinel() {
    let service = setup_account_service().await;

    service
        .create("Test User", "test@example.com", "password123")
        .await
        .expect("create failed");

    let wrong_secret = service
        .validate("test@example.com", "wrongpassword")
        .await
        .expect("validate failed");

    let unknown_email = service
        .validate("nobody@example.com", "password123")
        .await
        .expect("validate failed");

    // Same sentinel for both cases, observably indistinguishable
    assert_eq!(wrong_secret, None);
    assert_eq!(wrong_secret, unknown_email);
}

#[tokio::test]
async fn test_find_one_is_idempotent() {
    let service = setup_account_service().await;

    let created = service
        .create("Test User", "test@example.com", "password123")
        .await
        .expect("create failed");

    let first = service.find_one(created.id).await.expect("find_one failed");
    let second = service.find_one(created.id).await.expect("find_one failed");

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_then_find_one_round_trip() {
    let service = setup_account_service().await;

    let created = service
        .create("Round Trip", "round@example.com", "password123")
        .await
        .expect("create failed");

    let fetched = service.find_one(created.id).await.expect("find_one failed");

    assert_eq!(fetched.name, "Round Trip");
    assert_eq!(fetched.email, "round@example.com");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_find_one_missing_id_fails() {
    let service = setup_account_service().await;

    match service.find_one(42).await {
        Err(AccountError::NotFound { id }) => assert_eq!(id, 42),
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_find_all_returns_redacted_accounts_in_order() {
    let service = setup_account_service().await;

    service
        .create("A", "a@example.com", "password123")
        .await
        .expect("create failed");
    service
        .create("B", "b@example.com", "password123")
        .await
        .expect("create failed");

    let all = service.find_all().await.expect("find_all failed");

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].email, "a@example.com");
    assert_eq!(all[1].email, "b@example.com");
}

#[tokio::test]
async fn test_update_name_preserves_email_and_secret() {
    let service = setup_account_service().await;

    let created = service
        .create("Old Name", "keep@example.com", "password123")
        .await
        .expect("create failed");

    let updated = service
        .update(
            created.id,
            UpdateAccount {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.email, "keep@example.com");

    // The original secret still validates
    let validated = service
        .validate("keep@example.com", "password123")
        .await
        .expect("validate failed");
    assert!(validated.is_some());
}

#[tokio::test]
async fn test_update_secret_invalidates_old_secret() {
    let service = setup_account_service().await;

    let created = service
        .create("Test User", "rotate@example.com", "oldpass123")
        .await
        .expect("create failed");

    service
        .update(
            created.id,
            UpdateAccount {
                secret: Some("newpass123".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

    let with_new = service
        .validate("rotate@example.com", "newpass123")
        .await
        .expect("validate failed");
    assert!(with_new.is_some());

    let with_old = service
        .validate("rotate@example.com", "oldpass123")
        .await
        .expect("validate failed");
    assert_eq!(with_old, None);
}

#[tokio::test]
async fn test_update_to_taken_email_fails() {
    let service = setup_account_service().await;

    service
        .create("A", "a@example.com", "password123")
        .await
        .expect("create failed");
    let second = service
        .create("B", "b@example.com", "password123")
        .await
        .expect("create failed");

    let result = service
        .update(
            second.id,
            UpdateAccount {
                email: Some("a@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AccountError::DuplicateEmail { email }) => assert_eq!(email, "a@example.com"),
        _ => panic!("Expected DuplicateEmail error"),
    }
}

#[tokio::test]
async fn test_update_keeping_own_email_succeeds() {
    let service = setup_account_service().await;

    let created = service
        .create("Same Email", "same@example.com", "password123")
        .await
        .expect("create failed");

    // Re-submitting the current email is not a conflict
    let updated = service
        .update(
            created.id,
            UpdateAccount {
                name: Some("Renamed".to_string()),
                email: Some("same@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.email, "same@example.com");
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_update_missing_id_fails() {
    let service = setup_account_service().await;

    let result = service
        .update(
            42,
            UpdateAccount {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AccountError::NotFound { id }) => assert_eq!(id, 42),
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_remove_then_find_one_fails() {
    let service = setup_account_service().await;

    let created = service
        .create("Gone", "gone@example.com", "password123")
        .await
        .expect("create failed");

    service.remove(created.id).await.expect("remove failed");

    match service.find_one(created.id).await {
        Err(AccountError::NotFound { id }) => assert_eq!(id, created.id),
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_remove_missing_id_fails() {
    let service = setup_account_service().await;

    match service.remove(42).await {
        Err(AccountError::NotFound { id }) => assert_eq!(id, 42),
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_registration_scenario() {
    let service = setup_account_service().await;

    let account = service
        .create("Test User", "test@example.com", "password123")
        .await
        .expect("create failed");

    let value = serde_json::to_value(&account).unwrap();
    assert!(value["id"].is_i64());
    assert_eq!(value["name"], "Test User");
    assert_eq!(value["email"], "test@example.com");
    assert!(value.get("secret").is_none());
    assert!(value.get("secret_hash").is_none());
}
