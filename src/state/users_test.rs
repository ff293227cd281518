use super::*;

fn user(id: i64) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@x.com"),
        role: Role::User,
        is_active: id % 2 == 0,
        created_at: 0,
    }
}

#[test]
fn users_state_default_is_empty_and_idle() {
    let state = UsersState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.details.is_none());
}

#[test]
fn loaded_replaces_items_and_clears_error() {
    let mut state = UsersState { error: Some("old".to_owned()), ..UsersState::default() };
    state.begin();
    assert!(state.loading);
    state.loaded(vec![user(1), user(2)]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_keeps_items_and_sets_error() {
    let mut state = UsersState::default();
    state.loaded(vec![user(1)]);
    state.begin();
    state.failed(Some("Loading users failed: HTTP error: 500".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Loading users failed: HTTP error: 500"));
}

#[test]
fn failed_without_text_only_resets_loading() {
    let mut state = UsersState::default();
    state.begin();
    state.failed(None);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn new_user_draft_defaults_to_user_role() {
    assert_eq!(NewUserDraft::default().role, Role::User);
}
