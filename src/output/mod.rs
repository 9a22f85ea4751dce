// Sun Oct 18 2026 - Alex

pub mod formatter;
pub mod json;

pub use formatter::{format_value, OutputFormatter};
pub use json::{JsonError, JsonSerializer};

use crate::config::Config;
use crate::search::{MedianResult, PivotTrace, SweepReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders command results in the configured format.
pub struct OutputManager {
    format: OutputFormat,
    formatter: OutputFormatter,
    serializer: JsonSerializer,
}

impl OutputManager {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            formatter: OutputFormatter::new(),
            serializer: JsonSerializer::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.output_format,
            formatter: OutputFormatter::new(),
            serializer: JsonSerializer::new().with_pretty_print(config.pretty_print),
        }
    }

    pub fn with_details(mut self, show: bool) -> Self {
        self.formatter = self.formatter.with_details(show);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn median(&self, input: &[i64], result: &MedianResult) -> Result<String, JsonError> {
        match self.format {
            OutputFormat::Text => Ok(self.formatter.format_median(input, result)),
            OutputFormat::Json => self.serializer.median(input, result),
        }
    }

    pub fn pivot(&self, input: &[i64], trace: &PivotTrace, with_steps: bool) -> Result<String, JsonError> {
        match self.format {
            OutputFormat::Text => Ok(self.formatter.format_pivot(input, trace, with_steps)),
            OutputFormat::Json => self.serializer.pivot(input, trace, with_steps),
        }
    }

    pub fn sweep(&self, report: &SweepReport) -> Result<String, JsonError> {
        match self.format {
            OutputFormat::Text => Ok(self.formatter.format_sweep(report)),
            OutputFormat::Json => self.serializer.sweep(report),
        }
    }

    pub fn demo(&self, rows: &[(Vec<i64>, MedianResult)]) -> Result<String, JsonError> {
        match self.format {
            OutputFormat::Text => Ok(self.formatter.format_demo(rows)),
            OutputFormat::Json => self.serializer.demo(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PivotMedianFinder;

    #[test]
    fn test_manager_switches_format() {
        let result = PivotMedianFinder::new().find(&[2, 3, 4, 5, 6, 1]).unwrap();

        let json = OutputManager::new(OutputFormat::Json).median(&[2, 3, 4, 5, 6, 1], &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["median"], serde_json::json!(3.5));

        let text = OutputManager::new(OutputFormat::Text).median(&[2, 3, 4, 5, 6, 1], &result).unwrap();
        assert!(text.contains("3.5"));
    }

    #[test]
    fn test_output_format_serde_name() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
    }
}
