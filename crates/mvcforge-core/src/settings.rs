use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: "#6366f1".to_string(),
            secondary: "#8b5cf6".to_string(),
        }
    }
}

/// Process-wide application settings. Created with defaults at startup,
/// mutated via partial merge, and the only state that survives restarts —
/// the graph itself is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub dark_mode: bool,
    /// Selected tech-stack template id, e.g. "react-ts". None means no
    /// template files are merged into synthesized output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            name: "ai-mvc-app".to_string(),
            title: "AI MVC Application".to_string(),
            description: "A modern MVC application built with AI".to_string(),
            icon: "/vite.svg".to_string(),
            theme: Theme::default(),
            dark_mode: false,
            tech_stack: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub theme: Option<ThemePatch>,
    pub dark_mode: Option<bool>,
    pub tech_stack: Option<String>,
}

impl AppSettings {
    /// Shallow merge, except `theme` which merges one field at a time so a
    /// primary-only patch keeps the existing secondary.
    pub fn update(&mut self, patch: &SettingsPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
        if let Some(theme) = &patch.theme {
            if let Some(primary) = &theme.primary {
                self.theme.primary = primary.clone();
            }
            if let Some(secondary) = &theme.secondary {
                self.theme.secondary = secondary.clone();
            }
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(tech_stack) = &patch.tech_stack {
            self.tech_stack = Some(tech_stack.clone());
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

/// Resolve the global config directory (~/.mvcforge/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mvcforge")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Read the durable settings snapshot, falling back to defaults when the
/// file is missing or unreadable.
pub fn read_settings() -> AppSettings {
    read_settings_from(&settings_path())
}

pub fn read_settings_from(path: &Path) -> AppSettings {
    if !path.exists() {
        return AppSettings::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Persist the settings snapshot. Uses atomic write (temp file + rename) so
/// a concurrent reader never sees a half-written file.
pub fn write_settings(settings: &AppSettings) -> Result<(), String> {
    write_settings_to(&settings_path(), settings)
}

pub fn write_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    let tmp = dir.join(".settings.json.tmp");
    fs::write(&tmp, json).map_err(|e| e.to_string())?;
    fs::rename(&tmp, path).map_err(|e| e.to_string())
}
