use super::*;

fn user(email: &str) -> User {
    User {
        email: email.to_owned(),
        created_by: "root".to_owned(),
    }
}

#[test]
fn initial_state_is_loading_with_submit_disabled() {
    let state = UsersState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(state.field_enabled);
    assert!(!state.submit_enabled);
}

#[test]
fn list_loaded_replaces_items_and_clears_loading() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::ListLoaded(vec![user("a@x.com")]));
    assert!(!state.loading);
    assert_eq!(state.items, vec![user("a@x.com")]);
}

#[test]
fn list_loaded_keeps_server_order() {
    let mut state = UsersState::default();
    apply(
        &mut state,
        UsersEvent::ListLoaded(vec![user("z@x.com"), user("a@x.com")]),
    );
    let emails: Vec<&str> = state.items.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["z@x.com", "a@x.com"]);
}

#[test]
fn list_failed_changes_nothing() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::ListFailed);
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn draft_edit_enables_submit_iff_non_empty() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::DraftEdited("a@x.com".to_owned()));
    assert!(state.submit_enabled);
    assert_eq!(state.draft, "a@x.com");

    apply(&mut state, UsersEvent::DraftEdited(String::new()));
    assert!(!state.submit_enabled);
    assert!(state.draft.is_empty());
}

#[test]
fn create_started_disables_field_and_submit() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::DraftEdited("a@x.com".to_owned()));
    apply(&mut state, UsersEvent::CreateStarted);
    assert!(!state.field_enabled);
    assert!(!state.submit_enabled);
}

#[test]
fn create_completed_replaces_items_and_resets_draft() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::DraftEdited("b@x.com".to_owned()));
    apply(&mut state, UsersEvent::CreateStarted);
    apply(
        &mut state,
        UsersEvent::CreateCompleted(vec![user("a@x.com"), user("b@x.com")]),
    );
    assert_eq!(state.items.len(), 2);
    assert!(state.draft.is_empty());
    assert!(state.field_enabled);
    assert!(!state.submit_enabled);
}

#[test]
fn create_failed_re_enables_field_and_submit_preserving_draft() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::DraftEdited("b@x.com".to_owned()));
    apply(&mut state, UsersEvent::CreateStarted);
    apply(&mut state, UsersEvent::CreateFailed);
    assert!(state.field_enabled);
    assert!(state.submit_enabled);
    assert_eq!(state.draft, "b@x.com");
}

#[test]
fn delete_completed_with_collection_replaces_items() {
    let mut state = UsersState::default();
    apply(
        &mut state,
        UsersEvent::ListLoaded(vec![user("a@x.com"), user("b@x.com")]),
    );
    apply(&mut state, UsersEvent::DeleteStarted);
    assert!(state.loading);
    apply(
        &mut state,
        UsersEvent::DeleteCompleted(Some(vec![user("b@x.com")])),
    );
    assert!(!state.loading);
    assert_eq!(state.items, vec![user("b@x.com")]);
}

#[test]
fn delete_completed_without_collection_only_clears_loading() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::ListLoaded(vec![user("a@x.com")]));
    apply(&mut state, UsersEvent::DeleteStarted);
    apply(&mut state, UsersEvent::DeleteCompleted(None));
    assert!(!state.loading);
    assert_eq!(state.items, vec![user("a@x.com")]);
}

#[test]
fn delete_failed_leaves_loading_untouched() {
    let mut state = UsersState::default();
    apply(&mut state, UsersEvent::ListLoaded(vec![user("a@x.com")]));
    apply(&mut state, UsersEvent::DeleteStarted);
    apply(&mut state, UsersEvent::DeleteFailed);
    assert!(state.loading);
    assert_eq!(state.items, vec![user("a@x.com")]);
}
