//! In-memory user store integration tests.

use std::sync::Arc;

use uuid::Uuid;

use domain::User;
use user_store::infra::seed;
use user_store::repository::{UserRepository, UserStore};

fn sample_user(first_name: &str, last_name: &str) -> User {
    User::new(
        format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        first_name.to_string(),
        last_name.to_string(),
    )
}

#[tokio::test]
async fn fresh_store_returns_the_generated_sample_set() {
    let users = seed::sample_users(20);
    let store = UserStore::with_users(users.clone());

    let listed = store.list().await;
    assert_eq!(listed.len(), 20);
    assert_eq!(listed, users);
}

#[tokio::test]
async fn save_appends_unknown_user_at_the_end() {
    let store = UserStore::with_users(seed::sample_users(20));
    let user = sample_user("Grace", "Hopper");

    let saved = store.save(user.clone()).await;

    let listed = store.list().await;
    assert_eq!(saved, user);
    assert_eq!(listed.len(), 21);
    assert_eq!(listed.last(), Some(&user));
}

#[tokio::test]
async fn save_replaces_existing_user_in_place() {
    let store = UserStore::with_users(seed::sample_users(20));

    let mut updated = store.list().await[4].clone();
    updated.update_name("Edith".to_string(), "Clarke".to_string());

    store.save(updated.clone()).await;

    let listed = store.list().await;
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[4], updated);
}

#[tokio::test]
async fn delete_removes_exactly_one_matching_entry() {
    let store = UserStore::with_users(seed::sample_users(20));
    let victim = store.list().await[7].clone();

    store.delete(&victim).await;

    let listed = store.list().await;
    assert_eq!(listed.len(), 19);
    assert!(!listed.iter().any(|u| u.id == victim.id));
}

#[tokio::test]
async fn delete_of_unknown_user_is_a_noop() {
    let store = UserStore::with_users(seed::sample_users(20));
    let stranger = sample_user("Ada", "Lovelace");

    store.delete(&stranger).await;

    assert_eq!(store.list().await.len(), 20);
}

#[tokio::test]
async fn find_by_id_matches_only_the_key() {
    let store = UserStore::with_users(seed::sample_users(20));
    let user = store.list().await[0].clone();

    assert_eq!(store.find_by_id(user.id).await, Some(user));
    assert_eq!(store.find_by_id(Uuid::new_v4()).await, None);
}

// The full lifecycle: append, delete, then replace a re-saved user at the
// position its id already holds.
#[tokio::test]
async fn save_delete_save_scenario() {
    let store = UserStore::with_users(seed::sample_users(20));

    let newcomer = sample_user("Grace", "Hopper");
    store.save(newcomer.clone()).await;
    assert_eq!(store.list().await.len(), 21);
    assert_eq!(store.list().await.last(), Some(&newcomer));

    let fifth = store.list().await[4].clone();
    store.delete(&fifth).await;
    let listed = store.list().await;
    assert_eq!(listed.len(), 20);
    assert!(!listed.iter().any(|u| u.id == fifth.id));

    let mut renamed = listed[10].clone();
    let index = 10;
    renamed.update_name("Edith".to_string(), "Clarke".to_string());
    store.save(renamed.clone()).await;

    let listed = store.list().await;
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[index], renamed);
}

#[tokio::test]
async fn concurrent_saves_of_distinct_users_all_land() {
    let store = Arc::new(UserStore::new());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store.save(sample_user(&format!("User{i}"), "Concurrent")).await;
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.len(), 50);
}

#[tokio::test]
async fn concurrent_saves_of_the_same_user_keep_a_single_entry() {
    let original = sample_user("Grace", "Hopper");
    let store = Arc::new(UserStore::with_users(vec![original.clone()]));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            let mut user = original.clone();
            tokio::spawn(async move {
                user.update_name(format!("Grace{i}"), "Hopper".to_string());
                store.save(user).await;
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let listed = store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, original.id);
}
