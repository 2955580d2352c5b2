// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::StoreError;
use crate::tests::helpers::create_test_store;
use linha_domain::{Role, User, UserId};

fn test_user(uid: &str, id_number: &str, role: Role) -> User {
    User {
        user_id: UserId::new(uid),
        id_number: id_number.to_string(),
        name: format!("User {id_number}"),
        role,
    }
}

#[test]
fn test_upsert_and_get_user() {
    let mut store = create_test_store();
    let user = test_user("uid-1", "12345", Role::Volunteer);

    store.upsert_user(&user).unwrap();

    let stored = store.get_user(&UserId::new("uid-1")).unwrap();
    assert_eq!(stored, Some(user));
}

#[test]
fn test_get_missing_user_is_none() {
    let mut store = create_test_store();
    assert_eq!(store.get_user(&UserId::new("nobody")).unwrap(), None);
}

#[test]
fn test_upsert_overwrites_existing_record() {
    // The identity provider is the source of truth; a second write for
    // the same uid replaces the record (role promotions included).
    let mut store = create_test_store();

    store
        .upsert_user(&test_user("uid-1", "12345", Role::Volunteer))
        .unwrap();
    store
        .upsert_user(&test_user("uid-1", "12345", Role::Coordinator))
        .unwrap();

    let stored = store.get_user(&UserId::new("uid-1")).unwrap().unwrap();
    assert_eq!(stored.role, Role::Coordinator);
    assert_eq!(store.list_users().unwrap().len(), 1);
}

#[test]
fn test_malformed_id_number_is_refused() {
    let mut store = create_test_store();

    let result = store.upsert_user(&test_user("uid-1", "12", Role::Volunteer));
    assert!(matches!(result, Err(StoreError::SerializationError(_))));
    assert!(store.list_users().unwrap().is_empty());
}

#[test]
fn test_list_users_is_ordered_by_id_number() {
    let mut store = create_test_store();

    store
        .upsert_user(&test_user("uid-3", "333", Role::Volunteer))
        .unwrap();
    store
        .upsert_user(&test_user("uid-1", "111", Role::Admin))
        .unwrap();
    store
        .upsert_user(&test_user("uid-2", "222", Role::Visitor))
        .unwrap();

    let users = store.list_users().unwrap();
    let id_numbers: Vec<&str> = users.iter().map(|u| u.id_number.as_str()).collect();
    assert_eq!(id_numbers, vec!["111", "222", "333"]);
}
