use crate::{
    api::{Theme, ToastPosition, UiSettings, UiSettingsPatch},
    components::messages::truncate_message,
    utils::storage::{Storage, StorageError},
};

use super::{write_key, THEME_KEY, TOAST_DURATION_KEY, TOAST_POSITION_KEY};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub ui: UiSettings,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    SetTheme(Theme),
    ToggleTheme,
    SetToastPosition(ToastPosition),
    SetToastDuration(u32),
    FetchStarted,
    FetchSucceeded(UiSettingsPatch),
    FetchFailed(String),
    SaveStarted,
    SaveSucceeded,
    SaveFailed(String),
}

pub fn reduce(state: &mut SettingsState, action: SettingsAction) {
    match action {
        SettingsAction::SetTheme(theme) => state.ui.theme = theme,
        SettingsAction::ToggleTheme => state.ui.theme = state.ui.theme.toggled(),
        SettingsAction::SetToastPosition(position) => state.ui.toast_position = position,
        SettingsAction::SetToastDuration(ms) => state.ui.toast_duration = ms,
        SettingsAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        SettingsAction::FetchSucceeded(patch) => {
            state.ui = state.ui.merged(&patch);
            state.loading = false;
        }
        SettingsAction::FetchFailed(message) => {
            state.loading = false;
            state.error = Some(truncate_message(&message));
        }
        SettingsAction::SaveStarted => {
            state.saving = true;
            state.error = None;
        }
        SettingsAction::SaveSucceeded => state.saving = false,
        SettingsAction::SaveFailed(message) => {
            state.saving = false;
            state.error = Some(truncate_message(&message));
        }
    }
}

pub(crate) fn hydrate(storage: &dyn Storage) -> SettingsState {
    let defaults = UiSettings::default();
    let ui = UiSettings {
        theme: storage
            .get_item(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(defaults.theme),
        toast_position: storage
            .get_item(TOAST_POSITION_KEY)
            .and_then(|raw| ToastPosition::parse(&raw))
            .unwrap_or(defaults.toast_position),
        toast_duration: storage
            .get_item(TOAST_DURATION_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.toast_duration),
    };
    SettingsState {
        ui,
        ..SettingsState::default()
    }
}

pub(crate) fn persist(
    state: &SettingsState,
    storage: &mut dyn Storage,
) -> Result<(), StorageError> {
    write_key(storage, THEME_KEY, Some(state.ui.theme.as_str()))?;
    write_key(
        storage,
        TOAST_POSITION_KEY,
        Some(state.ui.toast_position.as_str()),
    )?;
    write_key(
        storage,
        TOAST_DURATION_KEY,
        Some(state.ui.toast_duration.to_string().as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_TOAST_DURATION_MS;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn unreadable_values_fall_back_to_defaults() {
        let storage = MemoryStorage::with_items([
            (THEME_KEY, "sepia"),
            (TOAST_POSITION_KEY, "bottom-left"),
            (TOAST_DURATION_KEY, "soon"),
        ]);
        let state = hydrate(&storage);
        assert_eq!(state.ui.theme, Theme::Light);
        assert_eq!(state.ui.toast_position, ToastPosition::BottomLeft);
        assert_eq!(state.ui.toast_duration, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn fetched_patch_merges_over_local_values() {
        let mut state = SettingsState::default();
        reduce(&mut state, SettingsAction::SetToastDuration(8000));
        reduce(&mut state, SettingsAction::FetchStarted);
        reduce(
            &mut state,
            SettingsAction::FetchSucceeded(UiSettingsPatch {
                theme: Some(Theme::Dark),
                ..UiSettingsPatch::default()
            }),
        );
        assert_eq!(state.ui.theme, Theme::Dark);
        assert_eq!(state.ui.toast_duration, 8000);
        assert!(!state.loading);
    }

    #[test]
    fn persist_writes_all_keys() {
        let mut storage = MemoryStorage::new();
        let mut state = SettingsState::default();
        reduce(&mut state, SettingsAction::SetToastPosition(ToastPosition::TopLeft));
        persist(&state, &mut storage).unwrap();
        assert_eq!(storage.get_item(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(storage.get_item(TOAST_POSITION_KEY).as_deref(), Some("top-left"));
        assert_eq!(storage.get_item(TOAST_DURATION_KEY).as_deref(), Some("3000"));
    }
}
