use crate::app::domain::theme::ThemeId;
use crate::app::infrastructure::error::AppError;
use crate::app::services::settings::SettingsPort;

pub const THEME_KEY: &str = "theme";

/// Persists the active theme through a [`SettingsPort`].
pub struct ThemeStore {
    settings: Box<dyn SettingsPort>,
    current: ThemeId,
}

impl ThemeStore {
    /// Restore the saved theme, falling back to light when it is unset,
    /// unreadable or not a known theme.
    pub fn load(settings: Box<dyn SettingsPort>) -> Self {
        let current = match settings.get(THEME_KEY) {
            Ok(Some(value)) => value.parse::<ThemeId>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                ThemeId::Light
            }),
            Ok(None) => ThemeId::Light,
            Err(e) => {
                tracing::warn!("Could not read theme setting: {}", e);
                ThemeId::Light
            }
        };

        Self { settings, current }
    }

    pub fn current(&self) -> ThemeId {
        self.current
    }

    /// Flip between light and dark and persist the choice. The in-memory
    /// theme changes even when persisting fails.
    pub fn toggle(&mut self) -> Result<ThemeId, AppError> {
        self.current = self.current.toggled();
        self.settings.set(THEME_KEY, self.current.as_str())?;
        tracing::info!("Theme set to {}", self.current);
        Ok(self.current)
    }
}
