use super::{
    client::ApiClient,
    types::{ApiError, ApplyLeaveRequest, ApprovalRequest, LeaveResponse},
};

impl ApiClient {
    pub async fn apply_leave(&self, request: &ApplyLeaveRequest) -> Result<LeaveResponse, ApiError> {
        self.post_json(self.endpoint("/leaves/apply"), request).await
    }

    pub async fn get_my_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.get_json(self.endpoint("/leaves/my-leaves")).await
    }

    pub async fn get_all_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.get_json(self.endpoint("/leaves/all")).await
    }

    pub async fn get_pending_leaves(&self) -> Result<Vec<LeaveResponse>, ApiError> {
        self.get_json(self.endpoint("/leaves/pending")).await
    }

    /// Approve and reject share one endpoint; `request.action` selects.
    pub async fn decide_leave(&self, request: &ApprovalRequest) -> Result<LeaveResponse, ApiError> {
        self.post_json(self.endpoint("/leaves/approve"), request)
            .await
    }
}
