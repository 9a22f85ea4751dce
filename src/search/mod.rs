// Sun Oct 18 2026 - Alex

pub mod error;
pub mod median;
pub mod pivot;
pub mod reference;
pub mod sweep;

pub use error::MedianError;
pub use median::{find_median, MedianResult, PivotMedianFinder};
pub use pivot::{find_pivot, trace_pivot, PivotTrace, SearchStep, StepAction};
pub use reference::{check_rotated, is_rotated, rotate, sorted_median};
pub use sweep::{sweep, SweepMismatch, SweepReport};
