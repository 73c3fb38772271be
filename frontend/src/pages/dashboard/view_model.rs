use super::repository::DashboardRepository;
use crate::{
    api::{ApiClient, ApiError, DashboardStats, Role},
    state::{dashboard::DashboardAction, StoreHandle},
};
use std::rc::Rc;

pub struct DashboardViewModel {
    repository: DashboardRepository,
    store: StoreHandle,
}

impl DashboardViewModel {
    pub fn new(api: Rc<ApiClient>, store: StoreHandle) -> Self {
        Self {
            repository: DashboardRepository::new_with_client(api),
            store,
        }
    }

    /// Admins get the aggregated counts, which never fail as a whole.
    /// Students and teachers get `/dashboard/stats`; a failure there is kept
    /// in the dashboard slice.
    pub async fn load(&self, role: Role) -> Result<DashboardStats, ApiError> {
        self.store.dispatch(DashboardAction::FetchStarted);
        let result = match role {
            Role::Admin => Ok(self.repository.fetch_admin_stats().await),
            Role::Student | Role::Teacher => self.repository.fetch_user_stats().await,
        };
        match result {
            Ok(stats) => {
                self.store
                    .dispatch(DashboardAction::FetchSucceeded(stats.clone()));
                Ok(stats)
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.store
                    .dispatch(DashboardAction::FetchFailed(err.error.clone()));
                Err(err)
            }
        }
    }

    pub async fn profile_stats(&self) -> DashboardStats {
        self.repository.fetch_profile_stats().await
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        self.store.read(|state| state.dashboard.stats.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.store.read(|state| state.dashboard.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{api_client, memory_store};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn student_stats_come_from_dashboard_endpoint() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(200).json_body(json!({
                    "totalLeaves": 5,
                    "pendingLeaves": 1,
                    "approvedLeaves": 3,
                    "rejectedLeaves": 1
                }));
            })
            .await;

        let vm = DashboardViewModel::new(Rc::new(api_client(&server)), memory_store());
        let stats = vm.load(Role::Student).await.unwrap();
        assert_eq!(stats.approved_leaves, 3);
        assert_eq!(vm.stats(), Some(stats));
        assert!(vm.error().is_none());
    }

    #[tokio::test]
    async fn teacher_stats_failure_is_visible() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(503)
                    .json_body(json!({ "message": "Service unavailable" }));
            })
            .await;

        let vm = DashboardViewModel::new(Rc::new(api_client(&server)), memory_store());
        assert!(vm.load(Role::Teacher).await.is_err());
        assert_eq!(vm.error().as_deref(), Some("Service unavailable"));
        assert!(vm.stats().is_none());
    }

    #[tokio::test]
    async fn admin_load_survives_total_outage() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/api/admin/");
                then.status(500);
            })
            .await;

        let vm = DashboardViewModel::new(Rc::new(api_client(&server)), memory_store());
        let stats = vm.load(Role::Admin).await.unwrap();
        assert_eq!(stats, DashboardStats::default());
        assert!(vm.error().is_none());
    }
}
