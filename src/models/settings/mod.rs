// Settings module
// Planner preferences loaded from the TOML settings file

use serde::{Deserialize, Serialize};

/// Output format for a rendered planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlannerFormat {
    /// Standalone printable HTML page
    #[default]
    Html,
    /// Plain text, one line per day
    Text,
    /// The generated calendar as JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerSettings {
    /// Locale for month and weekday names, e.g. "en_US". Unset means the
    /// locale is taken from the environment.
    pub locale: Option<String>,
    /// Year to render. Unset means the current local year.
    pub year: Option<i32>,
    pub format: PlannerFormat,
    /// Page title for HTML output
    pub title: Option<String>,
    /// Captions of the two free-text fields in every day cell
    pub annotation_labels: [String; 2],
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            locale: None,
            year: None,
            format: PlannerFormat::Html,
            title: None,
            annotation_labels: ["Challenge".to_string(), "Object".to_string()],
        }
    }
}

impl PlannerSettings {
    /// Validate values that deserialize fine but cannot be rendered
    pub fn validate(&self) -> Result<(), String> {
        if self.annotation_labels.iter().any(|l| l.trim().is_empty()) {
            return Err("Annotation labels cannot be empty".to_string());
        }

        if let Some(ref locale) = self.locale {
            if locale.trim().is_empty() {
                return Err("Locale cannot be an empty string".to_string());
            }
        }

        Ok(())
    }
}
