use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the backend collaborator.
    pub api_base: String,
    /// When true, a failed document upload is surfaced as a conversation
    /// message instead of being logged silently.
    pub report_upload_errors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            report_upload_errors: false,
        }
    }
}

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Languages the translate endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Kannada,
    English,
    Hindi,
    Tamil,
    Spanish,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::Kannada,
            Language::English,
            Language::Hindi,
            Language::Tamil,
            Language::Spanish,
        ]
    }

    /// Name sent on the wire (`from_lang` / `to_lang`).
    pub fn label(&self) -> &'static str {
        match self {
            Language::Kannada => "Kannada",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Spanish => "Spanish",
        }
    }
}

/// Summary styles the summarize endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKind {
    Short,
}

impl SummaryKind {
    /// Value of the `type` field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::Short => "short",
        }
    }
}

/// Visual theme, persisted as plain text under the theme key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown values fall back to dark, the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
