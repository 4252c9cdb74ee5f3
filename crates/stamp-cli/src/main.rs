//! `json-stamp` command-line entry point
//!
//! Rewrites a JSON array file with a constant field set on every object and
//! prints a confirmation. Exits non-zero with the error chain on failure.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use stamp_core::{Annotator, StampConfig, StampReport, WriteMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SUCCESS_MESSAGE: &str = "Updated JSON file successfully!";

fn cli() -> Command {
    Command::new("json-stamp")
        .version(stamp_core::VERSION)
        .about("Set a constant field on every object of a JSON array file")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("JSON array file to rewrite [default: tickers.json]"),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .value_name("NAME")
                .help("Key set on every record [default: assetType]"),
        )
        .arg(
            Arg::new("value")
                .long("value")
                .value_name("VALUE")
                .help("String value assigned to the key [default: stocks]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML config with filePath, fieldName, fieldValue, writeMode, ensureAscii"),
        )
        .arg(
            Arg::new("atomic")
                .long("atomic")
                .action(ArgAction::SetTrue)
                .help("Write to a temp file and rename it over the target"),
        )
        .arg(
            Arg::new("ensure-ascii")
                .long("ensure-ascii")
                .action(ArgAction::SetTrue)
                .help("Escape non-ASCII characters as \\uXXXX in the output"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
}

/// Defaults, then config file, then explicit flags.
fn resolve_config(matches: &ArgMatches) -> anyhow::Result<StampConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StampConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StampConfig::default(),
    };

    if let Some(file) = matches.get_one::<PathBuf>("file") {
        config = config.with_file_path(file);
    }
    if let Some(field) = matches.get_one::<String>("field") {
        config = config.with_field_name(field);
    }
    if let Some(value) = matches.get_one::<String>("value") {
        config = config.with_field_value(value);
    }
    if matches.get_flag("atomic") {
        config = config.with_write_mode(WriteMode::Atomic);
    }
    if matches.get_flag("ensure-ascii") {
        config = config.with_ensure_ascii(true);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(matches: &ArgMatches) -> anyhow::Result<StampReport> {
    let config = resolve_config(matches)?;
    let path = config.file_path.clone();
    Annotator::new(config)
        .run()
        .with_context(|| format!("failed to stamp {}", path.display()))
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches) {
        Ok(report) => {
            tracing::debug!(
                path = %report.path.display(),
                records = report.outcome.records,
                changed = report.changed(),
                "run complete"
            );
            println!("{SUCCESS_MESSAGE}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let chain = format!("{err:#}");
            tracing::debug!(error = %chain, "run failed");
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use stamp_test_utils::JsonFixture;

    fn matches(args: &[&str]) -> ArgMatches {
        cli()
            .try_get_matches_from(std::iter::once("json-stamp").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn no_arguments_uses_reference_defaults() {
        let config = resolve_config(&matches(&[])).unwrap();
        assert_eq!(config, StampConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(&matches(&[
            "funds.json",
            "--field",
            "kind",
            "--value",
            "fund",
            "--atomic",
            "--ensure-ascii",
        ]))
        .unwrap();

        assert_eq!(config.file_path, PathBuf::from("funds.json"));
        assert_eq!(config.field_name, "kind");
        assert_eq!(config.field_value, "fund");
        assert_eq!(config.write_mode, WriteMode::Atomic);
        assert!(config.ensure_ascii);
    }

    #[test]
    fn flags_override_config_file() {
        let fixture = JsonFixture::with_text("[]");
        let config_path = fixture.write_sibling(
            "json-stamp.toml",
            "filePath = \"bonds.json\"\nfieldName = \"class\"\nfieldValue = \"bonds\"\n",
        );
        let config_arg = config_path.to_str().unwrap();

        let from_file = resolve_config(&matches(&["--config", config_arg])).unwrap();
        assert_eq!(from_file.file_path, PathBuf::from("bonds.json"));
        assert_eq!(from_file.field_name, "class");
        assert_eq!(from_file.field_value, "bonds");

        let overridden =
            resolve_config(&matches(&["--config", config_arg, "--value", "munis"])).unwrap();
        assert_eq!(overridden.field_name, "class");
        assert_eq!(overridden.field_value, "munis");
    }

    #[test]
    fn empty_field_is_rejected() {
        let err = resolve_config(&matches(&["--field", ""])).unwrap_err();
        assert!(format!("{err:#}").contains("field name must not be empty"));
    }

    #[test]
    fn bad_config_file_is_reported() {
        let fixture = JsonFixture::with_text("[]");
        let config_path = fixture.write_sibling("json-stamp.toml", "unknownKey = 1\n");

        let err = resolve_config(&matches(&["--config", config_path.to_str().unwrap()]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn run_rewrites_file() {
        let fixture =
            JsonFixture::with_text(r#"[{"symbol":"AAPL"},{"symbol":"BND","assetType":"bonds"}]"#);

        let report = run(&matches(&[fixture.path().to_str().unwrap()])).unwrap();

        assert_eq!(report.outcome.records, 2);
        assert_eq!(
            fixture.read_value(),
            json!([
                {"symbol": "AAPL", "assetType": "stocks"},
                {"symbol": "BND", "assetType": "stocks"}
            ])
        );
    }

    #[test]
    fn run_failure_names_the_file() {
        let fixture = JsonFixture::with_text("{}");

        let err = run(&matches(&[fixture.path().to_str().unwrap()])).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("failed to stamp"));
        assert!(message.contains("expected a JSON array of objects"));
        assert_eq!(fixture.read_text(), "{}");
    }
}
