use crate::capability::{JsSettingsBridge, LogoutHook};
use crate::error::{Result, ShellError};
use crate::menu::SettingsEntry;

pub const DEFAULT_CONTAINER_ID: &str = "ac_game";
pub const DEFAULT_LOGOUT_GLOBAL: &str = "ac_game_settings";

pub const SETTINGS_ENTRY_ATTR: &str = "data-settings-entry";
pub const LOGOUT_GLOBAL_ATTR: &str = "data-logout-global";

#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    pub container_id: String,
    pub settings_entry: SettingsEntry,
    /// Name of the `window` property holding the settings object.
    pub logout_global: String,
}

impl ShellConfig {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            settings_entry: SettingsEntry::default(),
            logout_global: DEFAULT_LOGOUT_GLOBAL.to_string(),
        }
    }

    /// Applies overrides read from the container element's attributes.
    pub fn with_attributes<F>(mut self, attribute: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = attribute(SETTINGS_ENTRY_ATTR) {
            self.settings_entry = value.trim().parse().map_err(|_| {
                ShellError::configuration(format!(
                    "{} on #{} must be \"settings\" or \"exit\", got {:?}",
                    SETTINGS_ENTRY_ATTR, self.container_id, value
                ))
            })?;
        }
        if let Some(value) = attribute(LOGOUT_GLOBAL_ATTR) {
            let value = value.trim();
            if value.is_empty() {
                return Err(ShellError::configuration(format!(
                    "{} on #{} is empty",
                    LOGOUT_GLOBAL_ATTR, self.container_id
                )));
            }
            self.logout_global = value.to_string();
        }
        Ok(self)
    }

    /// Only the exit variant talks to the settings object.
    pub fn logout_hook(&self) -> Option<LogoutHook> {
        match self.settings_entry {
            SettingsEntry::Settings => None,
            SettingsEntry::Exit => Some(LogoutHook::new(JsSettingsBridge::new(
                self.logout_global.clone(),
            ))),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}
