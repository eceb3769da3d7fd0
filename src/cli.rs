use crate::solver::{ExpressionSolver, integer_equals};
use crate::utils::validate_constants;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Exprsearch - Find arithmetic expressions over a set of constants
#[derive(Parser, Debug)]
#[command(name = "exprsearch")]
#[command(
    about = "Find an arithmetic expression using each constant exactly once that equals the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value the expression must reach
    pub target: i64,

    /// Constants available to the expression, each used exactly once
    #[arg(required = true, num_args = 1..)]
    pub constants: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub constants: Vec<i64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    let cast: Vec<f64> = args.constants.iter().map(|&c| c as f64).collect();
    validate_constants(&cast).context("Invalid constants")?;

    Ok(CliConfig {
        target: args.target,
        constants: args.constants,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new();

    info!(
        "Searching for an expression over {:?} that equals {}",
        config.constants, config.target
    );

    println!("Target: {}", config.target);
    println!(
        "Constants: {}",
        config
            .constants
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let constants: Vec<f64> = config.constants.iter().map(|&c| c as f64).collect();
    match solver.find_solution(&constants, config.target as f64, integer_equals) {
        Some(expr) => {
            println!("Solution found: {}", config.target);
            println!("{}", expr);
            Ok(())
        }
        None => {
            warn!("No matching expression found");
            println!("No solution found.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_constants() {
        let result = validate_constants(&[1.0, 2.0, 3.0]);
        assert!(result.is_ok());

        let result = validate_constants(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_target_number() {
        let target: Result<i64, _> = "42".parse();
        assert!(target.is_ok());
        if let Ok(value) = target {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            target: 10,
            constants: vec![1, 2, 3, 4],
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.target, 10);
        assert_eq!(args.constants, vec![1, 2, 3, 4]);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
