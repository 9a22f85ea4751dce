// Sun Oct 18 2026 - Alex

pub mod config;
pub mod output;
pub mod search;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use output::OutputManager;
pub use search::{find_median, find_pivot, MedianError, MedianResult, PivotMedianFinder};
