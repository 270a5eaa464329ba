//! Planner rendering: turns a generated calendar into a printable page.

mod html;
mod text;
mod utils;

use thiserror::Error;

use crate::models::calendar::Calendar;
use crate::models::settings::{PlannerFormat, PlannerSettings};
use crate::services::calendar::LookupError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Failed to serialize calendar: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page title; defaults to the calendar year
    pub title: Option<String>,
    /// Captions of the two free-text fields in every day cell
    pub annotation_labels: [String; 2],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&PlannerSettings::default())
    }
}

impl From<&PlannerSettings> for RenderOptions {
    fn from(settings: &PlannerSettings) -> Self {
        Self {
            title: settings.title.clone(),
            annotation_labels: settings.annotation_labels.clone(),
        }
    }
}

impl RenderOptions {
    fn title_for(&self, calendar: &Calendar) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| calendar.year.to_string())
    }
}

/// Renders calendars in one of the planner output formats
pub struct PlannerRenderer;

impl PlannerRenderer {
    pub fn render(
        calendar: &Calendar,
        format: PlannerFormat,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        log::debug!("Rendering {} planner as {:?}", calendar.year, format);
        match format {
            PlannerFormat::Html => html::render(calendar, options),
            PlannerFormat::Text => text::render(calendar, options),
            PlannerFormat::Json => Ok(serde_json::to_string_pretty(calendar)?),
        }
    }
}
