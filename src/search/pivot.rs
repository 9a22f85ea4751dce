// Sun Oct 18 2026 - Alex

use super::error::MedianError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAction {
    /// `nums[mid] > nums[right]`, the minimum is right of `mid`.
    MoveLeft,
    /// `nums[mid] < nums[right]`, the minimum is at or left of `mid`.
    MoveRight,
    /// `nums[mid] == nums[right]`, drop `right` from the window.
    ShrinkRight,
    /// `nums[mid] == nums[right]` and `right` starts the ascending run.
    BoundaryFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub action: StepAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotTrace {
    pub pivot: usize,
    pub steps: Vec<SearchStep>,
}

impl PivotTrace {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Returns the index where the ascending run of a rotated sequence starts.
///
/// For distinct values this is the rotation offset. With duplicates the
/// equal case only narrows the window by one, so the worst case is linear.
pub fn find_pivot(nums: &[i64]) -> Result<usize, MedianError> {
    if nums.is_empty() {
        return Err(MedianError::empty());
    }

    Ok(search(nums, |step| {
        log::trace!(
            "pivot search: left={} right={} mid={} -> {:?}",
            step.left,
            step.right,
            step.mid,
            step.action
        );
    }))
}

pub fn trace_pivot(nums: &[i64]) -> Result<PivotTrace, MedianError> {
    if nums.is_empty() {
        return Err(MedianError::empty());
    }

    let mut steps = Vec::new();
    let pivot = search(nums, |step| steps.push(step));
    Ok(PivotTrace { pivot, steps })
}

fn search<F>(nums: &[i64], mut on_step: F) -> usize
where
    F: FnMut(SearchStep),
{
    let mut left = 0;
    let mut right = nums.len() - 1;

    while left < right {
        let mid = left + (right - left) / 2;

        let action = if nums[mid] > nums[right] {
            StepAction::MoveLeft
        } else if nums[mid] < nums[right] {
            StepAction::MoveRight
        } else if nums[right - 1] > nums[right] {
            StepAction::BoundaryFound
        } else {
            StepAction::ShrinkRight
        };

        on_step(SearchStep { left, right, mid, action });

        match action {
            StepAction::MoveLeft => left = mid + 1,
            StepAction::MoveRight => right = mid,
            StepAction::ShrinkRight => right -= 1,
            StepAction::BoundaryFound => left = right,
        }
    }

    left
}
