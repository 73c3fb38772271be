use crate::api::{ApiClient, ApiError, MessageResponse, UiSettings, UiSettingsPatch, UpdatePasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct SettingsRepository {
    client: Rc<ApiClient>,
}

impl SettingsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load(&self) -> Result<UiSettingsPatch, ApiError> {
        self.client.get_settings().await
    }

    pub async fn save(&self, settings: &UiSettings) -> Result<(), ApiError> {
        self.client.save_settings(settings).await
    }

    pub async fn change_password(
        &self,
        request: &UpdatePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.update_password(request).await
    }
}
