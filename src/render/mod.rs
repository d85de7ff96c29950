//! Output renderers for a loaded season.
//!
//! - `text`: aligned plain-text tables for the terminal
//! - `html`: HTML fragments keyed by the element ids the league page uses
//! - `report`: a serializable snapshot of every view for `--format json`

pub mod html;
pub mod report;
pub mod text;

use crate::{
    cli::types::{NameStyle, OutputFormat},
    view::SeasonView,
    Result,
};

pub use report::SeasonReport;

/// Points are always shown with two decimals.
pub fn format_points(points: f64) -> String {
    format!("{:.2}", points)
}

/// Render every season view in the requested format.
pub fn render_season(view: &SeasonView, format: OutputFormat, names: NameStyle) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_season(view, names)),
        OutputFormat::Html => Ok(html::render_season(view, names)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SeasonReport::from_view(view))?),
    }
}
