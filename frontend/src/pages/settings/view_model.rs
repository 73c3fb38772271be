use super::{repository::SettingsRepository, utils::PasswordForm};
use crate::{
    api::{ApiClient, ApiError, Theme, ToastPosition, UiSettings},
    components::messages::MessageState,
    state::{settings::SettingsAction, StoreHandle},
};
use std::rc::Rc;

/// UI preferences and password change. Local changes apply (and persist)
/// immediately; `save` pushes the current preferences to the server.
pub struct SettingsViewModel {
    repository: SettingsRepository,
    store: StoreHandle,
    pub password_form: PasswordForm,
    pub messages: MessageState,
    changing_password: bool,
}

impl SettingsViewModel {
    pub fn new(api: Rc<ApiClient>, store: StoreHandle) -> Self {
        Self {
            repository: SettingsRepository::new_with_client(api),
            store,
            password_form: PasswordForm::default(),
            messages: MessageState::default(),
            changing_password: false,
        }
    }

    pub fn settings(&self) -> UiSettings {
        self.store.read(|state| state.settings.ui.clone())
    }

    pub fn is_changing_password(&self) -> bool {
        self.changing_password
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.dispatch(SettingsAction::SetTheme(theme));
    }

    pub fn toggle_theme(&self) {
        self.store.dispatch(SettingsAction::ToggleTheme);
    }

    pub fn set_toast_position(&self, position: ToastPosition) {
        self.store
            .dispatch(SettingsAction::SetToastPosition(position));
    }

    pub fn set_toast_duration(&self, duration_ms: u32) {
        self.store
            .dispatch(SettingsAction::SetToastDuration(duration_ms));
    }

    pub async fn load(&mut self) -> Result<UiSettings, ApiError> {
        self.store.dispatch(SettingsAction::FetchStarted);
        match self.repository.load().await {
            Ok(patch) => {
                self.store.dispatch(SettingsAction::FetchSucceeded(patch));
                Ok(self.settings())
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.store
                    .dispatch(SettingsAction::FetchFailed(err.error.clone()));
                Err(err)
            }
        }
    }

    pub async fn save(&mut self) -> Result<(), ApiError> {
        self.messages.clear();
        let settings = self.settings();
        self.store.dispatch(SettingsAction::SaveStarted);
        match self.repository.save(&settings).await {
            Ok(()) => {
                self.store.dispatch(SettingsAction::SaveSucceeded);
                self.messages.set_success("Settings saved successfully!");
                Ok(())
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.store
                    .dispatch(SettingsAction::SaveFailed(err.error.clone()));
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }

    pub async fn change_password(&mut self) -> Result<(), ApiError> {
        self.messages.clear();
        let request = match self.password_form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        self.changing_password = true;
        let result = self.repository.change_password(&request).await;
        self.changing_password = false;
        match result {
            Ok(_) => {
                tracing::info!("password updated");
                self.password_form.reset();
                self.messages.set_success("Password updated successfully!");
                Ok(())
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }
}
