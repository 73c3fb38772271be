use crate::api::{ApiError, UpdatePasswordRequest};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = PasswordForm::default();
    }

    pub fn to_request(&self) -> Result<UpdatePasswordRequest, ApiError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ApiError::validation("All password fields are required"));
        }
        if self.new_password != self.confirm_password {
            return Err(ApiError::validation("New passwords do not match"));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(format!(
                "New password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if self.new_password == self.current_password {
            return Err(ApiError::validation(
                "New password must differ from the current password",
            ));
        }
        Ok(UpdatePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_form_rules() {
        let cases = [
            (PasswordForm::new("", "secret1", "secret1"), "All password fields are required"),
            (PasswordForm::new("old", "secret1", "secret2"), "New passwords do not match"),
            (
                PasswordForm::new("old", "abc", "abc"),
                "New password must be at least 6 characters",
            ),
            (
                PasswordForm::new("secret1", "secret1", "secret1"),
                "New password must differ from the current password",
            ),
        ];
        for (form, message) in cases {
            assert_eq!(form.to_request().unwrap_err().error, message);
        }

        let request = PasswordForm::new("old-pass", "secret1", "secret1")
            .to_request()
            .unwrap();
        assert_eq!(request.new_password, "secret1");
    }
}
