//! Render module - formats bucketed counts for the terminal
//!
//! Provides:
//! - Rank-based color assignment (color)
//! - The fixed-width statistics table (table)
//! - Horizontal and vertical ASCII bar charts (graph)
//! - `RenderConfig` with injected color capability and terminal geometry

pub mod color;
pub mod graph;
pub mod table;

use crate::core::counter::WordCounter;

/// Text chart selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    Horizontal,
    Vertical,
}

impl std::str::FromStr for GraphMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h" | "horizontal" => Ok(GraphMode::Horizontal),
            "v" | "vertical" => Ok(GraphMode::Vertical),
            _ => Err(format!("Unknown graph mode: {}", s)),
        }
    }
}

/// Output format for the analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rendered table plus optional chart.
    #[default]
    Text,
    /// Machine-readable bucket report for external chart renderers.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration.
///
/// `color_capable` is the externally resolved terminal capability; the
/// renderers never probe the environment themselves.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub use_color: bool,
    pub color_capable: bool,
    pub show_other: bool,
    pub graph: Option<GraphMode>,
    pub term_size: (u16, u16),
}

impl RenderConfig {
    pub fn colors_enabled(&self) -> bool {
        self.use_color && self.color_capable
    }
}

/// Query the terminal geometry, falling back to 80x24 when unavailable.
pub fn detect_terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((80, 24))
}

/// Compose the full text output: the table, followed by the selected chart
/// if any.
pub fn render_report(counter: &WordCounter, cfg: &RenderConfig) -> String {
    let mut sections = vec![table::render_table(counter, cfg)];

    match cfg.graph {
        Some(GraphMode::Horizontal) => sections.push(graph::render_horizontal(counter, cfg)),
        Some(GraphMode::Vertical) => sections.push(graph::render_vertical(counter, cfg)),
        None => {}
    }

    sections.join("\n")
}
