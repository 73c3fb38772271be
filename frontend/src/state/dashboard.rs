use crate::{api::DashboardStats, components::messages::truncate_message};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    FetchStarted,
    FetchSucceeded(DashboardStats),
    FetchFailed(String),
    Clear,
    ClearError,
}

pub fn reduce(state: &mut DashboardState, action: DashboardAction) {
    match action {
        DashboardAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        DashboardAction::FetchSucceeded(stats) => {
            state.stats = Some(stats);
            state.loading = false;
        }
        // Previous stats stay visible next to the error.
        DashboardAction::FetchFailed(message) => {
            state.loading = false;
            state.error = Some(truncate_message(&message));
        }
        DashboardAction::Clear => *state = DashboardState::default(),
        DashboardAction::ClearError => state.error = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_replaced_wholesale() {
        let mut state = DashboardState::default();
        reduce(&mut state, DashboardAction::FetchStarted);
        reduce(
            &mut state,
            DashboardAction::FetchSucceeded(DashboardStats {
                students: 40,
                pending_leaves: 3,
                ..DashboardStats::default()
            }),
        );
        reduce(
            &mut state,
            DashboardAction::FetchSucceeded(DashboardStats {
                teachers: 5,
                ..DashboardStats::default()
            }),
        );
        let stats = state.stats.clone().unwrap();
        assert_eq!(stats.students, 0);
        assert_eq!(stats.teachers, 5);
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_previous_stats() {
        let mut state = DashboardState {
            stats: Some(DashboardStats {
                classes: 2,
                ..DashboardStats::default()
            }),
            ..DashboardState::default()
        };
        reduce(&mut state, DashboardAction::FetchFailed("offline".into()));
        assert_eq!(state.stats.as_ref().map(|s| s.classes), Some(2));
        assert_eq!(state.error.as_deref(), Some("offline"));
        reduce(&mut state, DashboardAction::Clear);
        assert_eq!(state, DashboardState::default());
    }
}
