use super::{
    repository::{LeaveScope, LeavesRepository},
    utils::{applicant_fields, approver_fields, history_fields, LeaveForm},
    workflow::{approval_request, Decision},
};
use crate::{
    api::{ApiClient, ApiError, LeaveResponse, LeaveStatus},
    components::{
        list::{FieldsFn, ListControls, Page},
        messages::MessageState,
        status::sort_by_status,
    },
    state::{leaves::LeavesAction, StoreHandle},
};
use std::rc::Rc;

fn order_by_status(rows: &mut [LeaveResponse]) {
    sort_by_status(rows, |leave| &leave.status);
}

/// Leave list for one scope plus the apply/approve/reject mutations.
///
/// The server decides whether a leave can still be approved or rejected; a
/// refusal comes back as an error message. Every successful mutation is
/// followed by a full refetch instead of a local patch.
pub struct LeavesViewModel {
    repository: LeavesRepository,
    store: StoreHandle,
    scope: LeaveScope,
    status_filter: Option<LeaveStatus>,
    controls: ListControls<LeaveResponse>,
    pub messages: MessageState,
}

impl LeavesViewModel {
    pub fn new(api: Rc<ApiClient>, store: StoreHandle, scope: LeaveScope, page_size: usize) -> Self {
        let fields: FieldsFn<LeaveResponse> = match scope {
            LeaveScope::Mine => applicant_fields,
            LeaveScope::All | LeaveScope::Pending => approver_fields,
            LeaveScope::History => history_fields,
        };
        Self {
            repository: LeavesRepository::new_with_client(api),
            store,
            scope,
            status_filter: None,
            controls: ListControls::new(fields, page_size).with_order(order_by_status),
            messages: MessageState::default(),
        }
    }

    pub fn scope(&self) -> LeaveScope {
        self.scope
    }

    pub fn query(&self) -> &str {
        self.controls.query()
    }

    pub fn status_filter(&self) -> Option<&LeaveStatus> {
        self.status_filter.as_ref()
    }

    /// Shows only leaves with `status`, or every leave for `None`. Returns to
    /// the first page like a query change does.
    pub fn set_status_filter(&mut self, status: Option<LeaveStatus>) {
        self.status_filter = status;
        self.controls.reset_page();
    }

    pub fn is_submitting(&self) -> bool {
        self.store.read(|state| state.leaves.submitting)
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.store.dispatch(LeavesAction::FetchStarted);
        match self.repository.fetch(self.scope).await {
            Ok(items) => {
                tracing::debug!(scope = ?self.scope, count = items.len(), "leaves loaded");
                self.store.dispatch(LeavesAction::FetchSucceeded {
                    scope: self.scope,
                    items,
                });
                Ok(())
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.store.dispatch(LeavesAction::FetchFailed(err.error.clone()));
                Err(err)
            }
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.controls.set_query(query);
    }

    pub fn set_page(&mut self, page: usize) {
        let items = self.visible_items();
        self.controls.set_page(page, &items);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.controls.set_items_per_page(page_size);
    }

    pub fn page(&mut self) -> Page<LeaveResponse> {
        let items = self.visible_items();
        self.controls.apply(&items)
    }

    fn visible_items(&self) -> Vec<LeaveResponse> {
        self.store.read(|state| {
            state
                .leaves
                .items(self.scope)
                .iter()
                .filter(|leave| self.status_filter.as_ref().map_or(true, |status| &leave.status == status))
                .cloned()
                .collect()
        })
    }

    pub async fn apply(&mut self, form: &LeaveForm) -> Result<LeaveResponse, ApiError> {
        self.messages.clear();
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        self.store.dispatch(LeavesAction::MutationStarted);
        let result = self.repository.apply(&request).await;
        self.store.dispatch(LeavesAction::MutationFinished);
        self.finish_mutation(result, "Leave applied successfully!")
            .await
    }

    pub async fn approve(&mut self, leave_id: &str) -> Result<LeaveResponse, ApiError> {
        self.decide(leave_id, Decision::Approve, "").await
    }

    pub async fn reject(&mut self, leave_id: &str, reason: &str) -> Result<LeaveResponse, ApiError> {
        self.decide(leave_id, Decision::Reject, reason).await
    }

    async fn decide(
        &mut self,
        leave_id: &str,
        decision: Decision,
        reason: &str,
    ) -> Result<LeaveResponse, ApiError> {
        self.messages.clear();
        let request = match approval_request(leave_id, decision, reason) {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        self.store.dispatch(LeavesAction::MutationStarted);
        let result = self.repository.decide(&request).await;
        self.store.dispatch(LeavesAction::MutationFinished);
        let success = match decision {
            Decision::Approve => "Leave approved successfully!",
            Decision::Reject => "Leave rejected successfully!",
        };
        self.finish_mutation(result, success).await
    }

    async fn finish_mutation(
        &mut self,
        result: Result<LeaveResponse, ApiError>,
        success: &str,
    ) -> Result<LeaveResponse, ApiError> {
        match result {
            Ok(leave) => {
                tracing::info!(leave_id = %leave.leave_id, status = %leave.status, "leave updated");
                self.messages.set_success(success);
                if let Err(err) = self.refresh().await {
                    tracing::warn!(error = %err, "refetch after leave update failed");
                }
                Ok(leave)
            }
            Err(err) => {
                tracing::warn!(code = %err.code, error = %err, "leave update refused");
                self.store.handle_api_error(&err);
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }
}
