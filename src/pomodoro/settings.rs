use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::SettingsError, pomodoro::mode::Mode};

/// Result type used by settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Key under which the settings blob is stored.
pub const SETTINGS_KEY: &str = "pomodoroConfig";
/// Shortest accepted duration, in minutes.
pub const MIN_MINUTES: u32 = 1;
/// Longest accepted focus session or long break, in minutes.
pub const MAX_MINUTES: u32 = 60;
/// Longest accepted short break, in minutes.
pub const MAX_SHORT_BREAK_MINUTES: u32 = 30;

/// Durations of each timer mode, in minutes.
///
/// Serialized as a flat JSON object:
/// `{"focusTime":25,"shortBreakTime":5,"longBreakTime":15}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Length of a focus session.
    pub focus_time:       u32,
    /// Length of a short break.
    pub short_break_time: u32,
    /// Length of a long break.
    pub long_break_time:  u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { focus_time:       25,
               short_break_time: 5,
               long_break_time:  15, }
    }
}

impl Settings {
    /// Returns the duration of `mode` in seconds.
    ///
    /// Saturates at `u32::MAX` for durations that were never validated.
    ///
    /// # Example
    /// ```
    /// use reckon::pomodoro::{mode::Mode, settings::Settings};
    ///
    /// assert_eq!(Settings::default().duration_for(Mode::Focus), 25 * 60);
    /// ```
    #[must_use]
    pub const fn duration_for(&self, mode: Mode) -> u32 {
        let minutes = match mode {
            Mode::Focus => self.focus_time,
            Mode::ShortBreak => self.short_break_time,
            Mode::LongBreak => self.long_break_time,
        };
        minutes.saturating_mul(60)
    }

    /// Checks that every duration lies within [`MIN_MINUTES`] and its
    /// mode's maximum: [`MAX_SHORT_BREAK_MINUTES`] for short breaks,
    /// [`MAX_MINUTES`] otherwise.
    pub fn validate(&self) -> SettingsResult<()> {
        for (name, found, max) in [("focusTime", self.focus_time, MAX_MINUTES),
                                   ("shortBreakTime", self.short_break_time, MAX_SHORT_BREAK_MINUTES),
                                   ("longBreakTime", self.long_break_time, MAX_MINUTES)]
        {
            if !(MIN_MINUTES..=max).contains(&found) {
                return Err(SettingsError::OutOfRange { name,
                                                       found,
                                                       min: MIN_MINUTES,
                                                       max });
            }
        }
        Ok(())
    }

    /// Decodes and validates a JSON settings blob.
    ///
    /// # Parameters
    /// - `blob`: The JSON text.
    /// - `location`: Where the blob came from, for error messages.
    pub fn from_json(blob: &str, location: &str) -> SettingsResult<Self> {
        let settings: Self =
            serde_json::from_str(blob).map_err(|source| SettingsError::Malformed { location:
                                                                                       location.to_string(),
                                                                                   source })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Encodes the settings as a JSON blob.
    pub fn to_json(&self) -> SettingsResult<String> {
        serde_json::to_string(self).map_err(|source| SettingsError::Malformed { location:
                                                                                     SETTINGS_KEY.to_string(),
                                                                                 source })
    }
}

/// Somewhere the settings blob can be loaded from and saved to.
pub trait SettingsStore {
    /// Loads the stored settings, or `None` if nothing was saved yet.
    fn load(&self) -> SettingsResult<Option<Settings>>;
    /// Replaces the stored settings.
    fn save(&mut self, settings: &Settings) -> SettingsResult<()>;
}

/// Keeps the settings blob in a JSON file named after [`SETTINGS_KEY`].
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `pomodoroConfig.json` inside `directory`.
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self { path: directory.as_ref().join(format!("{SETTINGS_KEY}.json")) }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> SettingsResult<Option<Settings>> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io { location: self.location(),
                                               source });
            },
        };

        Settings::from_json(&blob, &self.location()).map(Some)
    }

    fn save(&mut self, settings: &Settings) -> SettingsResult<()> {
        let blob = settings.to_json()?;
        fs::write(&self.path, blob).map_err(|source| SettingsError::Io { location: self.location(),
                                                                         source })?;
        info!("saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the settings blob in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Creates a store that already holds `blob`.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    /// The currently stored blob, if any.
    #[must_use]
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> SettingsResult<Option<Settings>> {
        self.blob
            .as_deref()
            .map(|blob| Settings::from_json(blob, SETTINGS_KEY))
            .transpose()
    }

    fn save(&mut self, settings: &Settings) -> SettingsResult<()> {
        self.blob = Some(settings.to_json()?);
        Ok(())
    }
}
