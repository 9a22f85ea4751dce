// Sun Oct 18 2026 - Alex

use crate::search::{MedianResult, PivotTrace, StepAction, SweepReport};
use colored::*;
use itertools::Itertools;

pub struct OutputFormatter {
    show_details: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self { show_details: true }
    }

    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    pub fn format_median(&self, input: &[i64], result: &MedianResult) -> String {
        let mut out = format!("{} {}", "median:".cyan().bold(), format_value(result.median));

        if self.show_details {
            out.push_str(&format!(
                "\n  {} [{}]\n  {} {}\n  {} {}",
                "input: ".dimmed(),
                input.iter().join(", "),
                "pivot: ".dimmed(),
                result.pivot,
                "read:  ".dimmed(),
                result.indices.iter().map(|i| format!("nums[{}]", i)).join(" + "),
            ));
        }

        match (result.reference, result.is_verified()) {
            (Some(reference), Some(true)) => {
                out.push_str(&format!("\n  {} matches sorted median {}", "[+]".green(), format_value(reference)));
            }
            (Some(reference), _) => {
                out.push_str(&format!("\n  {} sorted median is {}", "[!]".red(), format_value(reference)));
            }
            _ => {}
        }

        out
    }

    pub fn format_pivot(&self, input: &[i64], trace: &PivotTrace, with_steps: bool) -> String {
        let mut out = format!(
            "{} {} (value {})",
            "pivot:".cyan().bold(),
            trace.pivot,
            input[trace.pivot]
        );

        if with_steps {
            for (i, step) in trace.steps.iter().enumerate() {
                out.push_str(&format!(
                    "\n  {:>3}. left={:<4} right={:<4} mid={:<4} {}",
                    i + 1,
                    step.left,
                    step.right,
                    step.mid,
                    describe_action(step.action)
                ));
            }
        }

        out
    }

    pub fn format_sweep(&self, report: &SweepReport) -> String {
        let mut out = format!(
            "{} {} rotations of [{}], expected median {}",
            "sweep:".cyan().bold(),
            report.checked,
            report.values.iter().join(", "),
            format_value(report.expected)
        );

        if report.is_clean() {
            out.push_str(&format!("\n  {} all rotations agree", "[+]".green()));
        } else {
            for mismatch in &report.mismatches {
                out.push_str(&format!(
                    "\n  {} offset {}: [{}] -> {}",
                    "[!]".red(),
                    mismatch.offset,
                    mismatch.rotated.iter().join(", "),
                    format_value(mismatch.median)
                ));
            }
        }

        out
    }

    pub fn format_demo(&self, rows: &[(Vec<i64>, MedianResult)]) -> String {
        rows.iter()
            .map(|(input, result)| format!("[{}] -> {}", input.iter().join(", "), format_value(result.median)))
            .join("\n")
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole medians keep one decimal so they still read as floats.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn describe_action(action: StepAction) -> &'static str {
    match action {
        StepAction::MoveLeft => "mid > right, left = mid + 1",
        StepAction::MoveRight => "mid < right, right = mid",
        StepAction::ShrinkRight => "mid == right, right -= 1",
        StepAction::BoundaryFound => "mid == right, right starts the run",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{sweep, trace_pivot, PivotMedianFinder};

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3.0");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-4.0), "-4.0");
    }

    #[test]
    fn test_format_demo_lines() {
        let finder = PivotMedianFinder::new();
        let rows = vec![
            (vec![2, 3, 4, 5, 1], finder.find(&[2, 3, 4, 5, 1]).unwrap()),
            (vec![2, 3, 4, 1], finder.find(&[2, 3, 4, 1]).unwrap()),
        ];
        let out = OutputFormatter::new().format_demo(&rows);
        assert_eq!(out, "[2, 3, 4, 5, 1] -> 3.0\n[2, 3, 4, 1] -> 2.5");
    }

    #[test]
    fn test_format_median_mentions_pivot() {
        let result = PivotMedianFinder::new().with_verify(true).find(&[6, 7, 1, 2, 3]).unwrap();
        let out = OutputFormatter::new().format_median(&[6, 7, 1, 2, 3], &result);
        assert!(out.contains("3.0"));
        assert!(out.contains("nums[4]"));
        assert!(out.contains("matches sorted median"));

        let short = OutputFormatter::new().with_details(false).format_median(&[6, 7, 1, 2, 3], &result);
        assert!(!short.contains("pivot"));
    }

    #[test]
    fn test_format_pivot_steps() {
        let trace = trace_pivot(&[1, 1, 2, 1]).unwrap();
        let out = OutputFormatter::new().format_pivot(&[1, 1, 2, 1], &trace, true);
        assert!(out.contains("right starts the run"));
        assert_eq!(out.lines().count(), 1 + trace.step_count());
    }

    #[test]
    fn test_format_sweep_clean() {
        let report = sweep(&[3, 1, 2], &PivotMedianFinder::new()).unwrap();
        let out = OutputFormatter::new().format_sweep(&report);
        assert!(out.contains("all rotations agree"));
    }
}
