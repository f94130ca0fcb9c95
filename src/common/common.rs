use chrono::{DateTime, Months, Utc};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{}'", level)))
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level);

    // stdout carries the JSON report when requested
    let dispatch = match config.audit.json_output {
        true => dispatch.chain(std::io::stderr()),
        false => dispatch.chain(std::io::stdout()),
    };
    dispatch
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {}", e)))?;
    info!("logging initialized.");
    Ok(())
}

/// Adds calendar months, clamping the day to the end of shorter months.
pub fn add_months(at: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>, CustomError>
{
    at.checked_add_months(Months::new(months))
        .ok_or_else(|| CustomError::new(&format!("Timestamp {} + {} months is out of range", at, months)))
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String
{
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
