use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats, LeaveStatistics},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(self.endpoint("/dashboard/stats")).await
    }

    pub async fn get_leave_statistics(&self) -> Result<LeaveStatistics, ApiError> {
        self.get_json(self.endpoint("/admin/leave-statistics"))
            .await
    }
}
