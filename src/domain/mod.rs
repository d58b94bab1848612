//! Typed application configuration
//!
//! `Config` is the effective, fully-defaulted view of every source document the loader
//! merged. Sections are plain serde structs; any field a document leaves out takes its
//! default here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_FONT_SIZE: u32 = 14;
pub const MIN_FONT_SIZE: u32 = 4;
pub const MAX_FONT_SIZE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: String,
    pub font_size: u32,
    pub background_color: String,
    pub text_color: String,
    pub show_hidden_files: bool,
    pub window: WindowConfig,
    pub selection: ColorPair,
    pub menu: ColorPair,
    pub keybindings: KeyBindings,
    pub file_systems: Vec<FileSystemConfig>,

    /// Keys this crate does not interpret. Kept so the GUI layer can read them.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: "TkDefaultFont".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            show_hidden_files: false,
            window: WindowConfig::default(),
            selection: ColorPair {
                background_color: "#ff8000".to_string(),
                text_color: "#ffffff".to_string(),
            },
            menu: ColorPair::default(),
            keybindings: KeyBindings::default(),
            file_systems: vec![FileSystemConfig::local()],
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Render the window title template for the folder currently shown.
    pub fn window_title(&self, current_path: &str) -> String {
        self.window.title.replace("{current_path}", current_path)
    }

    /// Bound a requested font size to the range the explorer can render.
    pub fn clamp_font_size(size: i64) -> u32 {
        size.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Title template; `{current_path}` is replaced with the folder being shown.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1200, height: 800, title: "{current_path} - Flitz".to_string() }
    }
}

/// Foreground/background colors for a UI region (selection highlight, menus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPair {
    pub background_color: String,
    pub text_color: String,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self { background_color: "#e1e1e1".to_string(), text_color: "#000000".to_string() }
    }
}

/// Key sequences bound to explorer actions, in Tk event syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub font_size_increase: String,
    pub font_size_decrease: String,
    pub rename_item: String,
    pub search: String,
    pub exit_search: String,
    pub go_up: String,
    pub open_context_menu: String,
    pub delete: String,
    pub create_folder: String,
    pub copy_selection: String,
    pub paste: String,
    pub toggle_hidden_file_visibility: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            font_size_increase: "<Control-plus>".to_string(),
            font_size_decrease: "<Control-minus>".to_string(),
            rename_item: "<F2>".to_string(),
            search: "<Control-f>".to_string(),
            exit_search: "<Escape>".to_string(),
            go_up: "<BackSpace>".to_string(),
            open_context_menu: "<Button-3>".to_string(),
            delete: "<Delete>".to_string(),
            create_folder: "<Control-N>".to_string(),
            copy_selection: "<Control-c>".to_string(),
            paste: "<Control-v>".to_string(),
            toggle_hidden_file_visibility: "<Control-h>".to_string(),
        }
    }
}

/// A mounted file system. `type` picks the implementation; remaining keys are
/// handed to it as constructor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSystemConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, serde_yaml::Value>,
}

impl FileSystemConfig {
    pub fn local() -> Self {
        Self { kind: "local".to_string(), name: "/".to_string(), params: BTreeMap::new() }
    }
}
