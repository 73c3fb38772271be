use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegistrationRequest, Role, User},
    components::messages::truncate_message,
    utils::storage::{Storage, StorageError},
};

use super::{write_key, StoreHandle, TOKEN_KEY, USER_KEY};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded { token: String, user: User },
    LoginFailed(String),
    RegisterStarted,
    RegisterSucceeded,
    RegisterFailed(String),
    Logout,
    SessionExpired,
    SetUser(User),
    ClearError,
}

pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::LoginStarted | AuthAction::RegisterStarted => {
            state.loading = true;
            state.error = None;
        }
        AuthAction::LoginSucceeded { token, user } => {
            state.token = Some(token);
            state.user = Some(user);
            state.loading = false;
            state.error = None;
        }
        AuthAction::LoginFailed(message) | AuthAction::RegisterFailed(message) => {
            state.loading = false;
            state.error = Some(truncate_message(&message));
        }
        AuthAction::RegisterSucceeded => {
            state.loading = false;
        }
        AuthAction::Logout => {
            *state = AuthState::default();
        }
        AuthAction::SessionExpired => {
            *state = AuthState {
                error: Some(SESSION_EXPIRED_MESSAGE.to_string()),
                ..AuthState::default()
            };
        }
        AuthAction::SetUser(user) => {
            state.user = Some(user);
        }
        AuthAction::ClearError => {
            state.error = None;
        }
    }
}

pub(crate) fn hydrate(storage: &dyn Storage) -> AuthState {
    let token = storage.get_item(TOKEN_KEY).filter(|t| !t.trim().is_empty());
    let user = storage
        .get_item(USER_KEY)
        .and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable stored user");
                None
            }
        });
    AuthState {
        token,
        user,
        ..AuthState::default()
    }
}

pub(crate) fn persist(state: &AuthState, storage: &mut dyn Storage) -> Result<(), StorageError> {
    write_key(storage, TOKEN_KEY, state.token.as_deref())?;
    let user = state
        .user
        .as_ref()
        .and_then(|user| serde_json::to_string(user).ok());
    write_key(storage, USER_KEY, user.as_deref())
}

/// Puts a stored token back on the client after start-up.
pub fn restore_session(api: &ApiClient, store: &StoreHandle) {
    api.set_token(store.read(|state| state.auth.token.clone()));
}

pub async fn login_request(
    api: &ApiClient,
    store: &StoreHandle,
    request: LoginRequest,
) -> Result<User, ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        let error = ApiError::validation("Email and password are required");
        store.dispatch(AuthAction::LoginFailed(error.error.clone()));
        return Err(error);
    }

    store.dispatch(AuthAction::LoginStarted);
    match api.login(&request).await {
        Ok(response) => {
            let user = response.user();
            tracing::info!(user_id = %user.user_id, role = user.role.as_str(), "logged in");
            store.dispatch(AuthAction::LoginSucceeded {
                token: response.access_token,
                user: user.clone(),
            });
            Ok(user)
        }
        Err(error) => {
            store.dispatch(AuthAction::LoginFailed(error.error.clone()));
            Err(error)
        }
    }
}

pub async fn register_request(
    api: &ApiClient,
    store: &StoreHandle,
    request: RegistrationRequest,
) -> Result<(), ApiError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        let error = ApiError::validation("Name, email and password are required");
        store.dispatch(AuthAction::RegisterFailed(error.error.clone()));
        return Err(error);
    }

    store.dispatch(AuthAction::RegisterStarted);
    match api.register(&request).await {
        Ok(()) => {
            store.dispatch(AuthAction::RegisterSucceeded);
            Ok(())
        }
        Err(error) => {
            store.dispatch(AuthAction::RegisterFailed(error.error.clone()));
            Err(error)
        }
    }
}

pub fn logout(api: &ApiClient, store: &StoreHandle) {
    api.set_token(None);
    store.dispatch(AuthAction::Logout);
    tracing::info!("logged out");
}
