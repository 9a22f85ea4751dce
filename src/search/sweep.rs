// Sun Oct 18 2026 - Alex

use super::error::MedianError;
use super::median::PivotMedianFinder;
use super::reference::{rotate, sorted_median};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMismatch {
    pub offset: usize,
    pub rotated: Vec<i64>,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub values: Vec<i64>,
    pub expected: f64,
    pub checked: usize,
    pub mismatches: Vec<SweepMismatch>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs `finder` on every rotation of `values` (sorted first) and compares
/// each answer with the sorted median.
pub fn sweep(values: &[i64], finder: &PivotMedianFinder) -> Result<SweepReport, MedianError> {
    let expected = sorted_median(values)?;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut mismatches = Vec::new();
    for offset in 0..sorted.len() {
        let rotated = rotate(&sorted, offset);
        let median = finder.find_median(&rotated)?;
        if median != expected {
            log::warn!("offset {}: got {} expected {}", offset, median, expected);
            mismatches.push(SweepMismatch {
                offset,
                rotated,
                median,
            });
        }
    }

    log::debug!(
        "sweep over {} rotations finished with {} mismatches",
        sorted.len(),
        mismatches.len()
    );

    Ok(SweepReport {
        checked: sorted.len(),
        values: sorted,
        expected,
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_clean() {
        let finder = PivotMedianFinder::new();
        let report = sweep(&[5, 1, 4, 2, 3], &finder).unwrap();
        assert_eq!(report.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.expected, 3.0);
        assert_eq!(report.checked, 5);
        assert!(report.is_clean());
    }

    #[test]
    fn test_sweep_with_duplicates() {
        let finder = PivotMedianFinder::new().with_strict(true);
        let report = sweep(&[2, 1, 1, 1, 3, 3], &finder).unwrap();
        assert_eq!(report.expected, 1.5);
        assert!(report.is_clean());
    }

    #[test]
    fn test_sweep_empty() {
        let finder = PivotMedianFinder::new();
        assert!(matches!(sweep(&[], &finder), Err(MedianError::InvalidInput(_))));
    }
}
