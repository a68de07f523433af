// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11yscore CLI - audit one HTML document and print its accessibility score

use a11yscore::config::{self, Config, LogConfig};
use a11yscore::report::{generate_report, OutputFormat};
use a11yscore::scanner;
use a11yscore::ScorePrecision;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Scored WCAG spot-check for a single web page
#[derive(Parser)]
#[command(name = "a11yscore")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit an HTML file
    Audit {
        /// HTML file to audit
        file: PathBuf,

        /// Output format: text, json or sarif
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Base URL for resolving relative image sources
        #[arg(long)]
        base_url: Option<String>,

        /// Score rounding: exact, integer or one-decimal (overrides the config file)
        #[arg(long)]
        precision: Option<ScorePrecision>,

        /// Config file (TOML or YAML)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the criteria that would run
    Criteria {
        /// Config file (TOML or YAML)
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Write a default config file
    InitConfig {
        /// Destination (defaults to .a11yscore.toml)
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool, log: &LogConfig) {
    let filter = if verbose {
        EnvFilter::new("a11yscore=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("a11yscore={}", log.level)))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match log.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}

fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);
    config::load_config(&path).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            file,
            format,
            base_url,
            precision,
            config,
            output,
            verbose,
        } => {
            let mut cfg = load(config.as_deref())?;
            init_logging(verbose, &cfg.log);

            if base_url.is_some() {
                cfg.base_url = base_url;
            }
            if let Some(precision) = precision {
                cfg.score_precision = precision;
            }

            let result = scanner::audit_file(&file, &cfg)?;
            let report = generate_report(&result, format, cfg.score_precision);
            write_output(&report, output.as_deref())?;

            if !result.is_perfect() {
                std::process::exit(1);
            }
        }

        Commands::Criteria { config } => {
            let cfg = load(config.as_deref())?;
            let registry = cfg.registry()?;
            for criterion in registry.list_all() {
                println!(
                    "{:<6} {:<22} Level {:<3} {}",
                    criterion.id(),
                    criterion.name(),
                    criterion.level(),
                    criterion.description()
                );
            }
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_default_config(&path)?;
            eprintln!("Config written to {}", path.display());
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_audit(args: &[&str]) -> Result<(OutputFormat, Option<ScorePrecision>), clap::Error> {
        let argv = ["a11yscore", "audit", "page.html"].iter().chain(args);
        match Cli::try_parse_from(argv)?.command {
            Commands::Audit { format, precision, .. } => Ok((format, precision)),
            _ => unreachable!("audit subcommand"),
        }
    }

    #[test]
    fn test_audit_defaults() {
        let (format, precision) = parse_audit(&[]).unwrap();
        assert_eq!(format, OutputFormat::Text);
        assert_eq!(precision, None);
    }

    #[test]
    fn test_audit_format_and_precision() {
        let (format, precision) =
            parse_audit(&["--format", "sarif", "--precision", "one-decimal"]).unwrap();
        assert_eq!(format, OutputFormat::Sarif);
        assert_eq!(precision, Some(ScorePrecision::OneDecimal));

        let (format, precision) = parse_audit(&["--format", "JSON", "--precision", "integer"]).unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(precision, Some(ScorePrecision::Integer));
    }

    #[test]
    fn test_audit_rejects_unknown_values() {
        assert!(parse_audit(&["--format", "xml"]).is_err());
        assert!(parse_audit(&["--precision", "two_decimals"]).is_err());
    }
}
