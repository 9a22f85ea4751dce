// Sun Oct 18 2026 - Alex

use super::error::MedianError;

/// Median by sorting a copy. Slow path used to cross-check the pivot search.
pub fn sorted_median(nums: &[i64]) -> Result<f64, MedianError> {
    if nums.is_empty() {
        return Err(MedianError::empty());
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let half = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[half] as f64)
    } else {
        Ok(mean_of_two(sorted[half - 1], sorted[half]))
    }
}

pub(crate) fn mean_of_two(a: i64, b: i64) -> f64 {
    (a as i128 + b as i128) as f64 / 2.0
}

/// A rotated ascending sequence has at most one cyclic descent.
pub fn check_rotated(nums: &[i64]) -> Result<(), MedianError> {
    let n = nums.len();
    let mut seen_descent = false;

    for i in 0..n {
        let next = (i + 1) % n;
        if nums[i] > nums[next] {
            if seen_descent {
                return Err(MedianError::NotRotated { index: next });
            }
            seen_descent = true;
        }
    }

    Ok(())
}

pub fn is_rotated(nums: &[i64]) -> bool {
    check_rotated(nums).is_ok()
}

/// Rotates `sorted` so that its first element ends up at `offset`.
pub fn rotate(sorted: &[i64], offset: usize) -> Vec<i64> {
    let mut rotated = sorted.to_vec();
    if !rotated.is_empty() {
        let len = rotated.len();
        rotated.rotate_right(offset % len);
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_median() {
        assert_eq!(sorted_median(&[2, 3, 4, 5, 1]).unwrap(), 3.0);
        assert_eq!(sorted_median(&[2, 3, 4, 1]).unwrap(), 2.5);
        assert_eq!(sorted_median(&[-5]).unwrap(), -5.0);
        assert!(sorted_median(&[]).is_err());
    }

    #[test]
    fn test_mean_of_two_no_overflow() {
        assert_eq!(mean_of_two(i64::MAX, i64::MAX), i64::MAX as f64);
        assert_eq!(mean_of_two(i64::MIN, i64::MAX), -0.5);
    }

    #[test]
    fn test_check_rotated() {
        assert!(is_rotated(&[1, 2, 3, 4]));
        assert!(is_rotated(&[3, 4, 1, 2]));
        assert!(is_rotated(&[1, 1, 2, 1]));
        assert!(is_rotated(&[5, 5, 5]));
        assert!(is_rotated(&[8]));
        assert!(is_rotated(&[]));
        assert_eq!(check_rotated(&[3, 1, 2, 0]), Err(MedianError::NotRotated { index: 3 }));
        assert!(!is_rotated(&[2, 1, 2, 1]));
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
        assert_eq!(rotate(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(rotate(&[1, 2, 3], 4), vec![3, 1, 2]);
        assert!(rotate(&[], 3).is_empty());
    }
}
