use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub background_color: BackgroundColor,

    // Panels
    pub show_sidebar: bool,
    pub show_toolbar: bool,
    pub show_statusbar: bool,
    pub show_description: bool,

    // Slideshow
    pub slideshow_interval: f32,
    pub slideshow_loop: bool,

    // Window state
    pub window_size: (f32, f32),

    // Session
    pub restore_session: bool,
    pub last_catalog: Option<PathBuf>,
    pub last_album: Option<String>,
    pub recent_catalogs: Vec<PathBuf>,
    pub max_recent_catalogs: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            background_color: BackgroundColor::Dark,

            show_sidebar: true,
            show_toolbar: true,
            show_statusbar: true,
            show_description: true,

            slideshow_interval: 4.0,
            slideshow_loop: true,

            window_size: (1280.0, 800.0),

            restore_session: true,
            last_catalog: None,
            last_album: None,
            recent_catalogs: Vec::new(),
            max_recent_catalogs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    Oled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundColor {
    Dark,
    Light,
    Gray,
    Black,
}

impl BackgroundColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            BackgroundColor::Dark => egui::Color32::from_rgb(30, 30, 30),
            BackgroundColor::Light => egui::Color32::from_rgb(240, 240, 240),
            BackgroundColor::Gray => egui::Color32::from_rgb(128, 128, 128),
            BackgroundColor::Black => egui::Color32::BLACK,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rgallery", "rGallery")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => match serde_json::from_str(&content) {
                        Ok(settings) => return settings,
                        Err(e) => log::warn!("Ignoring malformed settings file: {}", e),
                    },
                    Err(e) => log::warn!("Could not read settings: {}", e),
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(config_path) = Self::config_path() {
            if let Some(config_dir) = config_path.parent() {
                let _ = std::fs::create_dir_all(config_dir);
            }
            match serde_json::to_string_pretty(self) {
                Ok(content) => {
                    if let Err(e) = std::fs::write(&config_path, content) {
                        log::warn!("Could not save settings: {}", e);
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    pub fn add_recent_catalog(&mut self, path: PathBuf) {
        self.recent_catalogs.retain(|p| p != &path);
        self.recent_catalogs.insert(0, path.clone());
        self.recent_catalogs.truncate(self.max_recent_catalogs);
        self.last_catalog = Some(path);
    }
}
