//! Users page state and its reducer.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::User;

/// State backing the Users page table and its new-user row.
#[derive(Clone, Debug)]
pub struct UsersState {
    /// Canonical collection, replaced wholesale from each server response.
    pub items: Vec<User>,
    /// Unsaved email for the not-yet-created user.
    pub draft: String,
    pub field_enabled: bool,
    pub submit_enabled: bool,
    pub loading: bool,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: String::new(),
            field_enabled: true,
            submit_enabled: false,
            loading: true,
        }
    }
}

/// One state transition per network outcome or input edit.
#[derive(Clone, Debug)]
pub enum UsersEvent {
    ListLoaded(Vec<User>),
    ListFailed,
    DraftEdited(String),
    CreateStarted,
    CreateCompleted(Vec<User>),
    CreateFailed,
    DeleteStarted,
    DeleteCompleted(Option<Vec<User>>),
    DeleteFailed,
}

/// Fold one event into the state.
///
/// The submit control is enabled iff the draft is non-empty. Failure events
/// never touch `items`; the delete-failure path also leaves `loading` as-is
/// since the backend contract for that case is unspecified.
pub fn apply(state: &mut UsersState, event: UsersEvent) {
    match event {
        UsersEvent::ListLoaded(items) => {
            state.items = items;
            state.loading = false;
        }
        UsersEvent::ListFailed | UsersEvent::DeleteFailed => {}
        UsersEvent::DraftEdited(value) => {
            state.submit_enabled = !value.is_empty();
            state.draft = value;
        }
        UsersEvent::CreateStarted => {
            state.field_enabled = false;
            state.submit_enabled = false;
        }
        UsersEvent::CreateCompleted(items) => {
            state.items = items;
            state.draft.clear();
            state.field_enabled = true;
        }
        UsersEvent::CreateFailed => {
            state.field_enabled = true;
            state.submit_enabled = true;
        }
        UsersEvent::DeleteStarted => state.loading = true,
        UsersEvent::DeleteCompleted(items) => {
            if let Some(items) = items {
                state.items = items;
            }
            state.loading = false;
        }
    }
}
