//! Renderer module
//!
//! Renders a PackReport for the terminal: plain text or JSON

use crate::core::model::PackReport;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: ReportFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: ReportFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for pack reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &PackReport) -> String {
        match self.config.format {
            ReportFormat::Text => self.render_text(report),
            ReportFormat::Json => self.render_json(report),
        }
    }

    fn render_text(&self, report: &PackReport) -> String {
        let mut output = String::new();
        for path in &report.outputs {
            output.push_str(&format!(
                "File {} has been saved successfully.\n",
                path.display()
            ));
        }
        output.push_str(&format!(
            "Estimated number of tokens: {}",
            report.total_tokens
        ));
        output
    }

    fn render_json(&self, report: &PackReport) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
