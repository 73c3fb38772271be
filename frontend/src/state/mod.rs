//! Single application-state container. Each slice owns a state struct, an
//! action enum and a reducer; [`Store::dispatch`] runs the reducer and then
//! writes the slice's persisted keys through to [`Storage`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiError;
use crate::utils::storage::{Storage, StorageError};

pub mod auth;
pub mod dashboard;
pub mod leaves;
pub mod settings;

use auth::{AuthAction, AuthState};
use dashboard::{DashboardAction, DashboardState};
use leaves::{LeavesAction, LeavesState};
use settings::{SettingsAction, SettingsState};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const THEME_KEY: &str = "theme";
pub const TOAST_POSITION_KEY: &str = "toastPosition";
pub const TOAST_DURATION_KEY: &str = "toastDuration";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub leaves: LeavesState,
    pub settings: SettingsState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Dashboard(DashboardAction),
    Leaves(LeavesAction),
    Settings(SettingsAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<DashboardAction> for Action {
    fn from(action: DashboardAction) -> Self {
        Action::Dashboard(action)
    }
}

impl From<LeavesAction> for Action {
    fn from(action: LeavesAction) -> Self {
        Action::Leaves(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}

pub struct Store {
    state: AppState,
    storage: Box<dyn Storage>,
}

impl Store {
    /// Builds the initial state from the persisted keys.
    pub fn hydrate(storage: Box<dyn Storage>) -> Self {
        let state = AppState {
            auth: auth::hydrate(storage.as_ref()),
            settings: settings::hydrate(storage.as_ref()),
            ..AppState::default()
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::Auth(action) => {
                auth::reduce(&mut self.state.auth, action);
                let result = auth::persist(&self.state.auth, self.storage.as_mut());
                log_write_failure("auth", result);
            }
            Action::Dashboard(action) => dashboard::reduce(&mut self.state.dashboard, action),
            Action::Leaves(action) => leaves::reduce(&mut self.state.leaves, action),
            Action::Settings(action) => {
                settings::reduce(&mut self.state.settings, action);
                let result = settings::persist(&self.state.settings, self.storage.as_mut());
                log_write_failure("settings", result);
            }
        }
    }
}

fn log_write_failure(slice: &str, result: Result<(), StorageError>) {
    if let Err(err) = result {
        tracing::warn!(slice, error = %err, "failed to persist state");
    }
}

/// Writes `value` under `key` (or removes the key for `None`) only when it
/// differs from what is stored.
pub(crate) fn write_key(
    storage: &mut dyn Storage,
    key: &str,
    value: Option<&str>,
) -> Result<(), StorageError> {
    let current = storage.get_item(key);
    match value {
        Some(value) if current.as_deref() != Some(value) => storage.set_item(key, value),
        None if current.is_some() => storage.remove_item(key),
        _ => Ok(()),
    }
}

/// Cloneable handle shared by view models. Borrows never outlive a call, so
/// no borrow is held across an `.await`.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Rc<RefCell<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.inner.borrow_mut().dispatch(action);
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(self.inner.borrow().state())
    }

    pub fn snapshot(&self) -> AppState {
        self.read(|state| state.clone())
    }

    pub fn storage_item(&self, key: &str) -> Option<String> {
        self.inner.borrow().storage().get_item(key)
    }

    /// Expires the session when the server rejected our credentials.
    pub fn handle_api_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.dispatch(AuthAction::SessionExpired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Role, Theme};
    use crate::test_support::helpers::user;
    use crate::utils::storage::{FileStorage, MemoryStorage};

    #[test]
    fn hydrate_reads_persisted_keys() {
        let user_json = serde_json::to_string(&user(Role::Teacher)).unwrap();
        let storage = MemoryStorage::with_items([
            (TOKEN_KEY, "tok-1"),
            (USER_KEY, user_json.as_str()),
            (THEME_KEY, "dark"),
            (TOAST_DURATION_KEY, "5000"),
        ]);
        let store = Store::hydrate(Box::new(storage));
        let state = store.state();
        assert!(state.auth.is_authenticated());
        assert_eq!(state.auth.role(), Some(Role::Teacher));
        assert_eq!(state.settings.ui.theme, Theme::Dark);
        assert_eq!(state.settings.ui.toast_duration, 5000);
        assert!(state.leaves.lists.is_empty());
    }

    #[test]
    fn dispatch_writes_through_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let storage = FileStorage::open(&path).unwrap();
        let handle = StoreHandle::new(Store::hydrate(Box::new(storage)));

        handle.dispatch(AuthAction::LoginSucceeded {
            token: "tok-9".into(),
            user: user(Role::Student),
        });
        handle.dispatch(SettingsAction::ToggleTheme);

        let reopened = Store::hydrate(Box::new(FileStorage::open(&path).unwrap()));
        assert_eq!(reopened.state().auth.token.as_deref(), Some("tok-9"));
        assert_eq!(reopened.state().settings.ui.theme, Theme::Dark);

        handle.dispatch(AuthAction::Logout);
        let reopened = Store::hydrate(Box::new(FileStorage::open(&path).unwrap()));
        assert!(reopened.state().auth.token.is_none());
        assert!(reopened.state().auth.user.is_none());
        assert_eq!(reopened.state().settings.ui.theme, Theme::Dark);
    }

    #[test]
    fn unauthorized_error_expires_session() {
        let handle = StoreHandle::new(Store::hydrate(Box::new(MemoryStorage::new())));
        handle.dispatch(AuthAction::LoginSucceeded {
            token: "tok".into(),
            user: user(Role::Admin),
        });

        handle.handle_api_error(&ApiError::from_status(500, None));
        assert!(handle.read(|s| s.auth.is_authenticated()));

        handle.handle_api_error(&ApiError::from_status(401, None));
        let auth = handle.snapshot().auth;
        assert!(!auth.is_authenticated());
        assert!(auth.error.is_some());
        assert!(handle.storage_item(TOKEN_KEY).is_none());
    }
}
