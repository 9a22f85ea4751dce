// Sun Oct 18 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rotated-median")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Median of a rotated ascending sequence via pivot search", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Median of a rotated ascending sequence
    Median(MedianArgs),
    /// Index where the ascending run starts
    Pivot(PivotArgs),
    /// Check every rotation of the values against the sorted median
    Sweep(SweepArgs),
    /// Print the built-in sample sequences and their medians
    Demo,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Integers, comma and/or space separated
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read the sequence from a file instead
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct MedianArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Reject input that is not a rotated ascending sequence
    #[arg(long)]
    pub strict: bool,

    /// Cross-check against the sorted median
    #[arg(long)]
    pub verify: bool,
}

#[derive(Parser, Debug)]
pub struct PivotArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Show every narrowing step of the search
    #[arg(long)]
    pub trace: bool,
}

#[derive(Parser, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub source: InputArgs,
}

impl InputArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.values.is_empty() && self.input.is_none() {
            return Err("Either VALUES or --input must be specified".to_string());
        }
        if !self.values.is_empty() && self.input.is_some() {
            return Err("Cannot specify both VALUES and --input".to_string());
        }
        if let Some(path) = &self.input {
            if !path.exists() {
                return Err(format!("Input file does not exist: {:?}", path));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_median_command() {
        let args = Args::try_parse_from(["rotated-median", "--json", "median", "2,3,4,5,1", "--verify"]).unwrap();
        assert!(args.json);
        match args.command {
            Command::Median(m) => {
                assert_eq!(m.source.values, vec!["2,3,4,5,1".to_string()]);
                assert!(m.verify);
                assert!(!m.strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_values() {
        let args = Args::try_parse_from(["rotated-median", "pivot", "-3", "-2", "-5", "--trace"]).unwrap();
        match args.command {
            Command::Pivot(p) => {
                assert_eq!(p.source.values, vec!["-3", "-2", "-5"]);
                assert!(p.trace);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_input_validation() {
        let empty = InputArgs { values: vec![], input: None };
        assert!(empty.validate().is_err());

        let both = InputArgs {
            values: vec!["1".to_string()],
            input: Some(PathBuf::from("seq.txt")),
        };
        assert!(both.validate().is_err());

        let missing = InputArgs { values: vec![], input: Some(PathBuf::from("/nonexistent/seq.txt")) };
        assert!(missing.validate().is_err());

        let values = InputArgs { values: vec!["1,2".to_string()], input: None };
        assert!(values.validate().is_ok());
    }
}
