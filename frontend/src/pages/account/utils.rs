use crate::api::{ApiError, ForgotPasswordRequest, RegistrationRequest, ResetPasswordRequest, Role};
use crate::pages::settings::utils::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub department_id: String,
    /// Students only.
    pub class_id: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Student,
            department_id: String::new(),
            class_id: String::new(),
        }
    }
}

impl RegistrationForm {
    /// Students send their class and department; teachers send their
    /// department as `teacherDepartmentId`.
    pub fn to_request(&self) -> Result<RegistrationRequest, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Name, email and password are required"));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        let department_id = non_empty(&self.department_id);
        let mut request = RegistrationRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role,
            class_id: None,
            department_id: None,
            teacher_department_id: None,
        };
        match self.role {
            Role::Student => {
                let class_id = non_empty(&self.class_id)
                    .ok_or_else(|| ApiError::validation("Please select a class"))?;
                request.class_id = Some(class_id);
                request.department_id = department_id;
            }
            Role::Teacher => {
                let department_id = department_id
                    .ok_or_else(|| ApiError::validation("Please select a department"))?;
                request.teacher_department_id = Some(department_id);
            }
            Role::Admin => {
                return Err(ApiError::validation("Only students and teachers can register"));
            }
        }
        Ok(request)
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Two-step recovery: the email asks for a code, then code plus new password
/// reset it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryForm {
    pub email: String,
    pub confirmation_code: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl RecoveryForm {
    pub fn code_request(&self) -> Result<ForgotPasswordRequest, ApiError> {
        let email =
            non_empty(&self.email).ok_or_else(|| ApiError::validation("Email is required"))?;
        Ok(ForgotPasswordRequest { email })
    }

    pub fn reset_request(&self) -> Result<ResetPasswordRequest, ApiError> {
        let ForgotPasswordRequest { email } = self.code_request()?;
        let confirmation_code = non_empty(&self.confirmation_code)
            .ok_or_else(|| ApiError::validation("Confirmation code is required"))?;
        if self.new_password != self.confirm_password {
            return Err(ApiError::validation("New passwords do not match"));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(format!(
                "New password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(ResetPasswordRequest {
            email,
            confirmation_code,
            new_password: self.new_password.clone(),
        })
    }
}
