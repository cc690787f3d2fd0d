use serde::{Deserialize, Serialize};

use crate::{error::SettingsError, render::Color};

pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_CORNER_SIZE: f32 = 16.0;
pub const DEFAULT_MIN_WIDTH: f32 = 50.0;
// ~60 invocations per second
pub const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,
    pub resize: ResizeSettings,
    pub appearance: AppearanceSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            resize: ResizeSettings::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

impl Settings {
    /// Parses a settings blob the host persisted earlier. Missing fields take
    /// their defaults.
    pub fn from_json(data: &str) -> Result<Self, SettingsError> {
        let settings = serde_json::from_str::<Settings>(data)?;
        Ok(settings.migrate())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(&self.clone().migrate())?)
    }

    pub fn migrate(mut self) -> Self {
        if self.schema_version > SETTINGS_SCHEMA_VERSION {
            return self;
        }

        self.resize = self.resize.sanitized();
        self.schema_version = SETTINGS_SCHEMA_VERSION;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResizeSettings {
    /// Edge length of the square at an image's bottom-right corner that
    /// starts a resize drag.
    pub corner_size: f32,
    /// Live width never drops below this while dragging. Values under
    /// `DEFAULT_MIN_WIDTH` are raised to it.
    pub min_width: f32,
    pub throttle_interval_ms: u64,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            corner_size: DEFAULT_CORNER_SIZE,
            min_width: DEFAULT_MIN_WIDTH,
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
        }
    }
}

impl ResizeSettings {
    /// Width floor actually applied while dragging.
    pub fn width_floor(&self) -> f32 {
        if self.min_width.is_finite() {
            self.min_width.max(DEFAULT_MIN_WIDTH)
        } else {
            DEFAULT_MIN_WIDTH
        }
    }

    fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            corner_size: if self.corner_size.is_finite() && self.corner_size > 0.0 {
                self.corner_size
            } else {
                defaults.corner_size
            },
            min_width: self.width_floor(),
            throttle_interval_ms: self.throttle_interval_ms.min(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    pub outline_color: Color,
    pub outline_width: f32,
    pub outline_offset: f32,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            outline_color: Color::rgb(0x42 as f32 / 255.0, 0x85 as f32 / 255.0, 0xf4 as f32 / 255.0),
            outline_width: 2.0,
            outline_offset: 2.0,
        }
    }
}
