use crate::api::{
    ApiClient, ApiError, Department, ForgotPasswordRequest, MessageResponse, PublicClass,
    ResetPasswordRequest,
};
use std::rc::Rc;

/// Calls made before a session exists: registration lookups and password
/// recovery.
#[derive(Clone)]
pub struct AccountRepository {
    client: Rc<ApiClient>,
}

impl AccountRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_public_departments().await
    }

    pub async fn classes(&self, department_id: &str) -> Result<Vec<PublicClass>, ApiError> {
        self.client.list_public_classes(Some(department_id)).await
    }

    pub async fn request_code(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.forgot_password(request).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(request).await
    }
}
