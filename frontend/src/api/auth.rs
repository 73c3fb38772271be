use super::{
    client::ApiClient,
    types::{
        ApiError, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        RegistrationRequest, ResetPasswordRequest, UpdatePasswordRequest,
    },
};

impl ApiClient {
    /// Logs in and installs the returned access token on this client.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .post_json(self.endpoint("/auth/login"), request)
            .await?;
        self.set_token(Some(response.access_token.clone()));
        Ok(response)
    }

    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        let response = self
            .send(|| {
                Ok(self
                    .http_client()
                    .post(self.endpoint("/auth/register"))
                    .json(request))
            })
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn update_password(
        &self,
        request: &UpdatePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.put_json(self.endpoint("/auth/update-password"), request)
            .await
    }

    /// Asks the server to issue a confirmation code for `request.email`.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(self.endpoint("/auth/forgot-password"), request)
            .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(self.endpoint("/auth/reset-password"), request)
            .await
    }
}
