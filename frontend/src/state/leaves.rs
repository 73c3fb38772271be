use std::collections::BTreeMap;

use crate::{api::LeaveResponse, components::messages::truncate_message};

/// Which leave list a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeaveScope {
    /// The caller's own applications.
    Mine,
    /// Every leave the caller may review.
    All,
    /// Approver queue.
    Pending,
    /// Leaves already approved or rejected.
    History,
}

/// Last fetched list per scope; views on different scopes never overwrite
/// each other's snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeavesState {
    pub lists: BTreeMap<LeaveScope, Vec<LeaveResponse>>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LeavesState {
    pub fn items(&self, scope: LeaveScope) -> &[LeaveResponse] {
        self.lists.get(&scope).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeavesAction {
    FetchStarted,
    FetchSucceeded {
        scope: LeaveScope,
        items: Vec<LeaveResponse>,
    },
    FetchFailed(String),
    MutationStarted,
    MutationFinished,
    Clear,
    ClearError,
}

pub fn reduce(state: &mut LeavesState, action: LeavesAction) {
    match action {
        LeavesAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        LeavesAction::FetchSucceeded { scope, items } => {
            state.lists.insert(scope, items);
            state.loading = false;
        }
        LeavesAction::FetchFailed(message) => {
            state.loading = false;
            state.error = Some(truncate_message(&message));
        }
        LeavesAction::MutationStarted => state.submitting = true,
        LeavesAction::MutationFinished => state.submitting = false,
        LeavesAction::Clear => *state = LeavesState::default(),
        LeavesAction::ClearError => state.error = None,
    }
}
