use crate::api::{
    ApiClient, ApiError, ApplyLeaveRequest, ApprovalRequest, LeaveResponse, LeaveStatus,
};
use std::rc::Rc;

pub use crate::state::leaves::LeaveScope;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, scope: LeaveScope) -> Result<Vec<LeaveResponse>, ApiError> {
        match scope {
            LeaveScope::Mine => self.client.get_my_leaves().await,
            LeaveScope::All => self.client.get_all_leaves().await,
            LeaveScope::Pending => self.client.get_pending_leaves().await,
            LeaveScope::History => {
                let mut leaves = self.client.get_all_leaves().await?;
                leaves.retain(|leave| {
                    matches!(leave.status, LeaveStatus::Approved | LeaveStatus::Rejected)
                });
                Ok(leaves)
            }
        }
    }

    pub async fn apply(&self, request: &ApplyLeaveRequest) -> Result<LeaveResponse, ApiError> {
        self.client.apply_leave(request).await
    }

    pub async fn decide(&self, request: &ApprovalRequest) -> Result<LeaveResponse, ApiError> {
        self.client.decide_leave(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{api_client, leave_json};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn each_scope_reads_its_own_endpoint() {
        let server = MockServer::start_async().await;
        let mine = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leaves/my-leaves");
                then.status(200).json_body(json!([leave_json("l-1", "PENDING")]));
            })
            .await;
        let all = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leaves/all");
                then.status(200).json_body(json!([]));
            })
            .await;
        let pending = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leaves/pending");
                then.status(200).json_body(json!([]));
            })
            .await;

        let repo = LeavesRepository::new(api_client(&server));
        assert_eq!(repo.fetch(LeaveScope::Mine).await.unwrap().len(), 1);
        assert!(repo.fetch(LeaveScope::All).await.unwrap().is_empty());
        assert!(repo.fetch(LeaveScope::Pending).await.unwrap().is_empty());
        mine.assert_async().await;
        all.assert_async().await;
        pending.assert_async().await;
    }

    #[tokio::test]
    async fn history_keeps_only_processed_leaves() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leaves/all");
                then.status(200).json_body(json!([
                    leave_json("l-1", "PENDING"),
                    leave_json("l-2", "APPROVED"),
                    leave_json("l-3", "REJECTED"),
                ]));
            })
            .await;

        let repo = LeavesRepository::new(api_client(&server));
        let ids: Vec<String> = repo
            .fetch(LeaveScope::History)
            .await
            .unwrap()
            .into_iter()
            .map(|leave| leave.leave_id)
            .collect();
        assert_eq!(ids, vec!["l-2", "l-3"]);
    }
}
