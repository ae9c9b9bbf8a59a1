use std::{env, fs};

use serde::Deserialize;
use shared::domain::RenderOptions;

pub const SETTINGS_FILE: &str = "announce.toml";

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub categories_path: Option<String>,
    pub announcements_path: Option<String>,
    pub category_custom_classes: String,
    pub wrapper_custom_classes: String,
    pub fix_project_width: bool,
    pub custom_css: String,
    pub debug: bool,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    categories_path: Option<String>,
    announcements_path: Option<String>,
    category_custom_classes: Option<String>,
    wrapper_custom_classes: Option<String>,
    fix_project_width: Option<bool>,
    custom_css: Option<String>,
    debug: Option<bool>,
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings);

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.categories_path {
        settings.categories_path = Some(v);
    }
    if let Some(v) = file_cfg.announcements_path {
        settings.announcements_path = Some(v);
    }
    if let Some(v) = file_cfg.category_custom_classes {
        settings.category_custom_classes = v;
    }
    if let Some(v) = file_cfg.wrapper_custom_classes {
        settings.wrapper_custom_classes = v;
    }
    if let Some(v) = file_cfg.fix_project_width {
        settings.fix_project_width = v;
    }
    if let Some(v) = file_cfg.custom_css {
        settings.custom_css = v;
    }
    if let Some(v) = file_cfg.debug {
        settings.debug = v;
    }
}

fn apply_env(settings: &mut Settings) {
    if let Ok(v) = env::var("ANNOUNCE__CATEGORIES_PATH") {
        settings.categories_path = Some(v);
    }
    if let Ok(v) = env::var("ANNOUNCE__ANNOUNCEMENTS_PATH") {
        settings.announcements_path = Some(v);
    }
    if let Ok(v) = env::var("ANNOUNCE__CATEGORY_CUSTOM_CLASSES") {
        settings.category_custom_classes = v;
    }
    if let Ok(v) = env::var("ANNOUNCE__WRAPPER_CUSTOM_CLASSES") {
        settings.wrapper_custom_classes = v;
    }
    if let Ok(v) = env::var("ANNOUNCE__FIX_PROJECT_WIDTH") {
        settings.fix_project_width = parse_flag(&v);
    }
    if let Ok(v) = env::var("ANNOUNCE__CUSTOM_CSS") {
        settings.custom_css = v;
    }
    if let Ok(v) = env::var("ANNOUNCE__DEBUG") {
        settings.debug = parse_flag(&v);
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "yes" | "on")
}

impl Settings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            category_custom_classes: self.category_custom_classes.clone(),
            wrapper_custom_classes: self.wrapper_custom_classes.clone(),
            fix_project_width: self.fix_project_width,
        }
    }
}
