//! Company profile and app settings
//!
//! Singleton state held by the settings store, persisted across sessions
//! independently of the record collections.

use serde::{Deserialize, Serialize};

/// Theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other of the two fixed theme values.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Id,
    En,
}

/// Company profile (singleton).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Tax identification number (NPWP)
    pub tax_id: String,
    pub director: String,
    pub logo_url: Option<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            company_name: "PT Karya Sitedesk Konstruksi".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            tax_id: String::new(),
            director: String::new(),
            logo_url: None,
        }
    }
}

/// Partial update for the company profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfilePatch {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
    pub director: Option<String>,
    pub logo_url: Option<Option<String>>,
}

impl CompanyProfilePatch {
    pub fn apply_to(self, profile: &mut CompanyProfile) {
        if let Some(name) = self.company_name {
            profile.company_name = name;
        }
        if let Some(address) = self.address {
            profile.address = address;
        }
        if let Some(phone) = self.phone {
            profile.phone = phone;
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(website) = self.website {
            profile.website = website;
        }
        if let Some(tax_id) = self.tax_id {
            profile.tax_id = tax_id;
        }
        if let Some(director) = self.director {
            profile.director = director;
        }
        if let Some(logo_url) = self.logo_url {
            profile.logo_url = logo_url;
        }
    }
}

/// App settings (singleton).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::Id,
            notifications: true,
        }
    }
}

/// Partial update for app settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettingsPatch {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub notifications: Option<bool>,
}

impl AppSettingsPatch {
    pub fn apply_to(self, settings: &mut AppSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_settings_patch_merges() {
        let mut settings = AppSettings::default();
        AppSettingsPatch {
            notifications: Some(false),
            ..Default::default()
        }
        .apply_to(&mut settings);

        assert!(!settings.notifications);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Id);
    }
}
