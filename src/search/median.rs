// Sun Oct 18 2026 - Alex

use super::error::MedianError;
use super::pivot::find_pivot;
use super::reference::{check_rotated, mean_of_two, sorted_median};
use crate::config::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianResult {
    pub len: usize,
    pub pivot: usize,
    pub median: f64,
    /// Physical positions the median was read from.
    pub indices: Vec<usize>,
    pub reference: Option<f64>,
}

impl MedianResult {
    pub fn is_verified(&self) -> Option<bool> {
        self.reference.map(|r| r == self.median)
    }
}

pub struct PivotMedianFinder {
    strict: bool,
    verify: bool,
}

impl PivotMedianFinder {
    pub fn new() -> Self {
        Self {
            strict: false,
            verify: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            strict: config.strict,
            verify: config.verify,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn find(&self, nums: &[i64]) -> Result<MedianResult, MedianError> {
        if nums.is_empty() {
            return Err(MedianError::empty());
        }

        if self.strict {
            check_rotated(nums)?;
        }

        let pivot = find_pivot(nums)?;
        let n = nums.len();
        let half = n / 2;
        let physical = |k: usize| (pivot + k) % n;

        let (median, indices) = if n % 2 == 1 {
            let idx = physical(half);
            (nums[idx] as f64, vec![idx])
        } else {
            let lo = physical(half - 1);
            let hi = physical(half);
            (mean_of_two(nums[lo], nums[hi]), vec![lo, hi])
        };

        log::debug!("len={} pivot={} median={} indices={:?}", n, pivot, median, indices);

        let reference = if self.verify {
            let expected = sorted_median(nums)?;
            if expected != median {
                log::warn!(
                    "Pivot median {} disagrees with sorted median {} (input may not be rotated ascending)",
                    median,
                    expected
                );
            }
            Some(expected)
        } else {
            None
        };

        Ok(MedianResult {
            len: n,
            pivot,
            median,
            indices,
            reference,
        })
    }

    pub fn find_median(&self, nums: &[i64]) -> Result<f64, MedianError> {
        self.find(nums).map(|result| result.median)
    }
}

impl Default for PivotMedianFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Median of a rotated ascending sequence, located through its pivot.
///
/// Input that is not a rotation of an ascending sequence is not detected
/// here and yields an unspecified value. Use a strict [`PivotMedianFinder`]
/// to reject it.
pub fn find_median(nums: &[i64]) -> Result<f64, MedianError> {
    PivotMedianFinder::new().find_median(nums)
}
