use super::{
    repository::AccountRepository,
    utils::{RecoveryForm, RegistrationForm},
};
use crate::{
    api::{ApiClient, ApiError, Department, PublicClass, Role},
    components::messages::MessageState,
    state::{auth, StoreHandle},
};
use std::rc::Rc;

/// Registration screen: department and class pickers fed by the public
/// lookups, then submission through the auth slice.
pub struct RegisterViewModel {
    api: Rc<ApiClient>,
    repository: AccountRepository,
    store: StoreHandle,
    departments: Vec<Department>,
    classes: Vec<PublicClass>,
    pub form: RegistrationForm,
    pub messages: MessageState,
}

impl RegisterViewModel {
    pub fn new(api: Rc<ApiClient>, store: StoreHandle) -> Self {
        Self {
            repository: AccountRepository::new_with_client(api.clone()),
            api,
            store,
            departments: Vec::new(),
            classes: Vec::new(),
            form: RegistrationForm::default(),
            messages: MessageState::default(),
        }
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn classes(&self) -> &[PublicClass] {
        &self.classes
    }

    pub async fn load_departments(&mut self) -> Result<(), ApiError> {
        match self.repository.departments().await {
            Ok(departments) => {
                self.departments = departments;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "department lookup failed");
                self.messages.set_error("Failed to load departments");
                Err(err)
            }
        }
    }

    /// Picks a department. The class choice is cleared; students get the
    /// classes of the new department.
    pub async fn select_department(&mut self, department_id: &str) -> Result<(), ApiError> {
        self.form.department_id = department_id.to_string();
        self.form.class_id.clear();
        self.classes.clear();
        if self.form.role != Role::Student || department_id.trim().is_empty() {
            return Ok(());
        }
        match self.repository.classes(department_id).await {
            Ok(classes) => {
                self.classes = classes;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(department_id, error = %err, "class lookup failed");
                self.messages.set_error("Failed to load classes");
                Err(err)
            }
        }
    }

    pub async fn submit(&mut self) -> Result<(), ApiError> {
        self.messages.clear();
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        match auth::register_request(&self.api, &self.store, request).await {
            Ok(()) => {
                tracing::info!(role = self.form.role.as_str(), "registered");
                self.messages
                    .set_success("Registration successful! Please log in.");
                Ok(())
            }
            Err(err) => {
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryStep {
    /// Waiting for the email to send a code to.
    #[default]
    Request,
    /// Code issued; waiting for code and new password.
    Reset,
    Done,
}

pub struct PasswordRecoveryViewModel {
    repository: AccountRepository,
    step: RecoveryStep,
    loading: bool,
    pub form: RecoveryForm,
    pub messages: MessageState,
}

impl PasswordRecoveryViewModel {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self {
            repository: AccountRepository::new_with_client(api),
            step: RecoveryStep::default(),
            loading: false,
            form: RecoveryForm::default(),
            messages: MessageState::default(),
        }
    }

    pub fn step(&self) -> RecoveryStep {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn request_code(&mut self) -> Result<(), ApiError> {
        self.messages.clear();
        let request = match self.form.code_request() {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        self.loading = true;
        let result = self.repository.request_code(&request).await;
        self.loading = false;
        match result {
            Ok(_) => {
                self.step = RecoveryStep::Reset;
                self.messages.set_success(
                    "Confirmation code generated! Please check console for the code.",
                );
                Ok(())
            }
            Err(err) => {
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }

    pub async fn reset_password(&mut self) -> Result<(), ApiError> {
        self.messages.clear();
        let request = match self.form.reset_request() {
            Ok(request) => request,
            Err(err) => {
                self.messages.set_api_error(&err);
                return Err(err);
            }
        };
        self.loading = true;
        let result = self.repository.reset_password(&request).await;
        self.loading = false;
        match result {
            Ok(_) => {
                tracing::info!("password reset with confirmation code");
                self.step = RecoveryStep::Done;
                self.form = RecoveryForm::default();
                self.messages.set_success("Password reset successfully!");
                Ok(())
            }
            Err(err) => {
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }
}
