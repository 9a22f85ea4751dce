// Sun Oct 18 2026 - Alex

use crate::search::{MedianResult, PivotTrace, SweepReport};
use serde::Serialize;
use serde_json::{json, to_string, to_string_pretty, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn median(&self, input: &[i64], result: &MedianResult) -> Result<String, JsonError> {
        self.write(&json!({
            "input": input,
            "result": result,
        }))
    }

    pub fn pivot(&self, input: &[i64], trace: &PivotTrace, with_steps: bool) -> Result<String, JsonError> {
        let mut root = serde_json::Map::new();
        root.insert("input".to_string(), json!(input));
        root.insert("pivot".to_string(), json!(trace.pivot));
        if with_steps {
            root.insert("steps".to_string(), json!(trace.steps));
        }
        self.write(&Value::Object(root))
    }

    pub fn sweep(&self, report: &SweepReport) -> Result<String, JsonError> {
        self.write(report)
    }

    pub fn demo(&self, rows: &[(Vec<i64>, MedianResult)]) -> Result<String, JsonError> {
        let rows: Vec<Value> = rows
            .iter()
            .map(|(input, result)| json!({ "input": input, "result": result }))
            .collect();
        self.write(&rows)
    }

    fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, JsonError> {
        if self.pretty_print {
            to_string_pretty(value).map_err(|e| JsonError::Serialization(e.to_string()))
        } else {
            to_string(value).map_err(|e| JsonError::Serialization(e.to_string()))
        }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{trace_pivot, PivotMedianFinder};

    #[test]
    fn test_median_json_fields() {
        let result = PivotMedianFinder::new().find(&[2, 3, 4, 1]).unwrap();
        let out = JsonSerializer::new().with_pretty_print(false).median(&[2, 3, 4, 1], &result).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["input"], json!([2, 3, 4, 1]));
        assert_eq!(value["result"]["median"], json!(2.5));
        assert_eq!(value["result"]["pivot"], json!(3));
        assert_eq!(value["result"]["reference"], Value::Null);
    }

    #[test]
    fn test_pivot_json_steps_optional() {
        let trace = trace_pivot(&[3, 4, 1, 2]).unwrap();
        let serializer = JsonSerializer::new();

        let value: Value = serde_json::from_str(&serializer.pivot(&[3, 4, 1, 2], &trace, false).unwrap()).unwrap();
        assert_eq!(value["pivot"], json!(2));
        assert!(value.get("steps").is_none());

        let value: Value = serde_json::from_str(&serializer.pivot(&[3, 4, 1, 2], &trace, true).unwrap()).unwrap();
        assert_eq!(value["steps"][0]["action"], json!("MoveLeft"));
    }
}
