use super::{
    client::ApiClient,
    types::{ApiError, SettingsEnvelope, UiSettings, UiSettingsPatch},
};

impl ApiClient {
    /// Missing `uiSettings` yields an empty patch.
    pub async fn get_settings(&self) -> Result<UiSettingsPatch, ApiError> {
        let envelope: SettingsEnvelope<UiSettingsPatch> =
            self.get_json(self.endpoint("/settings")).await?;
        Ok(envelope.ui_settings.unwrap_or_default())
    }

    pub async fn save_settings(&self, settings: &UiSettings) -> Result<(), ApiError> {
        let body = SettingsEnvelope {
            ui_settings: Some(settings.clone()),
        };
        self.put_empty(self.endpoint("/settings"), &body).await
    }
}
