//! Settings store
//!
//! Singleton company profile and app settings, persisted as a JSON blob
//! at a caller-supplied path and rehydrated on open. A registered theme
//! listener lets the embedding presentation layer apply the active theme
//! to its global appearance state.

use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use sd_core::SettingsError;
use sd_models::{
    AppSettings, AppSettingsPatch, CompanyProfile, CompanyProfilePatch, Theme,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

type ThemeListener = Box<dyn Fn(Theme) + Send + Sync>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Persisted {
    profile: CompanyProfile,
    settings: AppSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    state: RwLock<Persisted>,
    listener: RwLock<Option<ThemeListener>>,
}

impl SettingsStore {
    /// Open the store, rehydrating from `path`. A missing blob falls back
    /// to defaults; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Persisted::default()
        };
        debug!(path = %path.display(), theme = ?state.settings.theme, "settings opened");
        Ok(Self {
            path,
            state: RwLock::new(state),
            listener: RwLock::new(None),
        })
    }

    pub fn profile(&self) -> CompanyProfile {
        self.state.read().profile.clone()
    }

    pub fn settings(&self) -> AppSettings {
        self.state.read().settings.clone()
    }

    pub fn update_profile(
        &self,
        patch: CompanyProfilePatch,
    ) -> Result<CompanyProfile, SettingsError> {
        let mut state = self.state.write();
        patch.apply_to(&mut state.profile);
        self.persist(&state)?;
        Ok(state.profile.clone())
    }

    pub fn update_settings(
        &self,
        patch: AppSettingsPatch,
    ) -> Result<AppSettings, SettingsError> {
        let mut state = self.state.write();
        let theme_before = state.settings.theme;
        patch.apply_to(&mut state.settings);
        self.persist(&state)?;
        let settings = state.settings.clone();
        drop(state);
        if settings.theme != theme_before {
            self.notify(settings.theme);
        }
        Ok(settings)
    }

    /// Flip between the two fixed theme values and propagate the choice.
    pub fn toggle_theme(&self) -> Result<Theme, SettingsError> {
        let mut state = self.state.write();
        let theme = state.settings.theme.toggled();
        state.settings.theme = theme;
        self.persist(&state)?;
        drop(state);
        debug!(?theme, "theme toggled");
        self.notify(theme);
        Ok(theme)
    }

    /// Register the appearance hook. Invoked immediately with the current
    /// theme so a freshly rehydrated choice is reapplied, then on every
    /// subsequent theme change.
    pub fn set_theme_listener(&self, listener: impl Fn(Theme) + Send + Sync + 'static) {
        let theme = self.state.read().settings.theme;
        *self.listener.write() = Some(Box::new(listener));
        self.notify(theme);
    }

    fn notify(&self, theme: Theme) {
        if let Some(listener) = self.listener.read().as_ref() {
            listener(theme);
        }
    }

    fn persist(&self, state: &Persisted) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_models::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn temp_path() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        (dir, path)
    }

    #[test]
    fn test_defaults_when_blob_missing() {
        let (_dir, path) = temp_path();
        let store = SettingsStore::open(&path).unwrap();

        assert_eq!(store.settings().theme, Theme::Light);
        assert_eq!(store.settings().language, Language::Id);
        assert!(store.settings().notifications);
    }

    #[test]
    fn test_updates_persist_across_reopen() {
        let (_dir, path) = temp_path();
        {
            let store = SettingsStore::open(&path).unwrap();
            store
                .update_profile(CompanyProfilePatch {
                    company_name: Some("PT Beton Perkasa".to_string()),
                    director: Some("Ir. Bambang".to_string()),
                    ..Default::default()
                })
                .unwrap();
            store.toggle_theme().unwrap();
        }

        let reopened = SettingsStore::open(&path).unwrap();
        assert_eq!(reopened.profile().company_name, "PT Beton Perkasa");
        assert_eq!(reopened.settings().theme, Theme::Dark);
    }

    #[test]
    fn test_theme_listener_fires_on_register_and_toggle() {
        let (_dir, path) = temp_path();
        let store = SettingsStore::open(&path).unwrap();

        let dark_count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&dark_count);
        store.set_theme_listener(move |theme| {
            if theme == Theme::Dark {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        // Registration replays the current (light) theme.
        assert_eq!(dark_count.load(Ordering::SeqCst), 0);

        store.toggle_theme().unwrap();
        assert_eq!(dark_count.load(Ordering::SeqCst), 1);
        store.toggle_theme().unwrap();
        assert_eq!(dark_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_partial_settings_update_leaves_rest() {
        let (_dir, path) = temp_path();
        let store = SettingsStore::open(&path).unwrap();

        store
            .update_settings(AppSettingsPatch {
                language: Some(Language::En),
                ..Default::default()
            })
            .unwrap();

        let settings = store.settings();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
    }
}
