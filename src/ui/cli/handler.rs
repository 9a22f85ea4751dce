// Sun Oct 18 2026 - Alex

use super::args::{Args, Command, InputArgs, MedianArgs, PivotArgs, SweepArgs};
use crate::config::Config;
use crate::output::{OutputFormat, OutputManager};
use crate::search::{sweep, trace_pivot, MedianError, MedianResult, PivotMedianFinder};
use crate::utils::logging::{self, scoped_timer};
use crate::utils::{format_duration, measure_time, parse_sequence, parse_values};
use anyhow::Context;
use std::fs;

/// Sample sequences printed by `demo`.
pub const DEMO_INPUTS: [&[i64]; 4] = [
    &[2, 3, 4, 5, 1],
    &[6, 7, 1, 2, 3, 4, 5],
    &[2, 3, 4, 1],
    &[2, 3, 4, 5, 6, 1],
];

pub struct CommandHandler {
    config: Config,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        let config = self.resolve_config(&args)?;
        self.setup_logging(&config);

        if !config.use_color {
            colored::control::set_override(false);
        }

        let output = OutputManager::from_config(&config).with_details(!args.quiet);

        match args.command {
            Command::Median(median_args) => self.handle_median(&config, &output, median_args),
            Command::Pivot(pivot_args) => self.handle_pivot(&output, pivot_args),
            Command::Sweep(sweep_args) => self.handle_sweep(&config, &output, sweep_args),
            Command::Demo => self.handle_demo(&config, &output),
        }
    }

    /// Config file first, then command-line flags on top.
    pub fn resolve_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?,
            None => self.config.clone(),
        };

        if args.json {
            config.output_format = OutputFormat::Json;
        }
        if args.no_color {
            config.use_color = false;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn setup_logging(&self, config: &Config) {
        logging::init_logger(logging::level_from_str(&config.log_level));
    }

    fn handle_median(&self, config: &Config, output: &OutputManager, args: MedianArgs) -> anyhow::Result<()> {
        let _timer = scoped_timer("median");
        let nums = load_input(&args.source)?;

        let finder = PivotMedianFinder::from_config(config)
            .with_strict(config.strict || args.strict)
            .with_verify(config.verify || args.verify);
        let result = finder.find(&nums)?;

        println!("{}", output.median(&nums, &result)?);
        Ok(())
    }

    fn handle_pivot(&self, output: &OutputManager, args: PivotArgs) -> anyhow::Result<()> {
        let _timer = scoped_timer("pivot");
        let nums = load_input(&args.source)?;
        let trace = trace_pivot(&nums)?;

        log::info!("pivot {} found in {} steps", trace.pivot, trace.step_count());
        println!("{}", output.pivot(&nums, &trace, args.trace)?);
        Ok(())
    }

    fn handle_sweep(&self, config: &Config, output: &OutputManager, args: SweepArgs) -> anyhow::Result<()> {
        let nums = load_input(&args.source)?;
        let finder = PivotMedianFinder::from_config(config);

        let (report, elapsed) = measure_time(|| sweep(&nums, &finder));
        let report = report?;
        log::info!("sweep of {} rotations took {}", report.checked, format_duration(elapsed));

        println!("{}", output.sweep(&report)?);

        if !report.is_clean() {
            anyhow::bail!(
                "{} of {} rotations disagreed with the sorted median",
                report.mismatches.len(),
                report.checked
            );
        }
        Ok(())
    }

    fn handle_demo(&self, config: &Config, output: &OutputManager) -> anyhow::Result<()> {
        let rows = run_demo(&PivotMedianFinder::from_config(config))?;
        println!("{}", output.demo(&rows)?);
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_demo(finder: &PivotMedianFinder) -> Result<Vec<(Vec<i64>, MedianResult)>, MedianError> {
    DEMO_INPUTS
        .iter()
        .map(|input| finder.find(input).map(|result| (input.to_vec(), result)))
        .collect()
}

fn load_input(source: &InputArgs) -> anyhow::Result<Vec<i64>> {
    source.validate().map_err(|e| anyhow::anyhow!(e))?;

    let nums = match &source.input {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {:?}", path))?;
            parse_sequence(&contents)?
        }
        None => parse_values(&source.values)?,
    };

    log::debug!("loaded {} values", nums.len());
    Ok(nums)
}
