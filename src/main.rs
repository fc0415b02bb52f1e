mod cli;
mod config;
mod error;
mod note;
mod shutdown;
mod store;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::shutdown::Shutdown;

#[derive(Parser)]
#[command(name = "daynote")]
#[command(version, about = "Copy a template into today's note and wait for Ctrl+C", long_about = None)]
struct Cli {
    /// Template file path
    #[arg(
        long,
        value_name = "PATH",
        default_value = "",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    temp_file: PathBuf,

    /// The path to store the generated file
    #[arg(long, value_name = "DIR", default_value = "./")]
    store_path: PathBuf,

    /// Use the current date like yyyyMMdd.md as the generated file name
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    file_name_use_date: bool,

    /// The generated file extension
    #[arg(long, value_name = "EXT", default_value = "md")]
    file_extension: String,

    /// Name the file after this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Exit as soon as the file is generated instead of waiting for Ctrl+C
    #[arg(long)]
    no_wait: bool,
}

impl Cli {
    /// Resolve the flags into the configuration shared by every step
    fn into_config(self) -> Result<Config> {
        let naming = config::naming(self.file_name_use_date, self.date.as_deref())?;

        Ok(Config {
            template: self.temp_file,
            store_path: self.store_path,
            naming,
            extension: self.file_extension,
            wait: !self.no_wait,
        })
    }
}

/// Rewrite single-dash long flags (`-temp-file=t.md`) to their `--` form.
///
/// Arguments after `--` and anything that is not a known long flag are
/// passed through untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .collect();
    longs.extend(["help", "version"]);

    let mut normalized = Vec::new();
    let mut options_done = false;

    for arg in args {
        if !options_done {
            if arg == "--" {
                options_done = true;
            } else if let Some(text) = arg.to_str() {
                let name = text
                    .strip_prefix('-')
                    .filter(|rest| !rest.starts_with('-'))
                    .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name));

                if name.is_some_and(|name| longs.contains(&name)) {
                    normalized.push(OsString::from(format!("-{}", text)));
                    continue;
                }
            }
        }
        normalized.push(arg);
    }

    normalized
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Err(e) = config::check_template(&cli.temp_file) {
        println!("{}", e);
        let _ = Cli::command().print_help();
        std::process::exit(e.exit_code());
    }

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = cli.into_config()?;

    cli::gen::run(&config)?;

    let shutdown = Shutdown::install()?;

    let wait = config.wait;
    if wait {
        info!("Press 'Ctrl + c' to exit.");
    }

    let reason = shutdown
        .wait(async move {
            if wait {
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(reason.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameScheme;
    use chrono::NaiveDate;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["daynote"]);
        assert_eq!(cli.temp_file, PathBuf::new());
        assert_eq!(cli.store_path, PathBuf::from("./"));
        assert!(cli.file_name_use_date);
        assert_eq!(cli.file_extension, "md");
        assert!(cli.date.is_none());
        assert!(!cli.no_wait);
    }

    #[test]
    fn test_cli_use_date_explicit_false() {
        let cli = Cli::parse_from(["daynote", "--file-name-use-date=false"]);
        assert!(!cli.file_name_use_date);

        let cli = Cli::parse_from(["daynote", "--file-name-use-date", "false"]);
        assert!(!cli.file_name_use_date);
    }

    #[test]
    fn test_cli_use_date_bare_flag_is_true() {
        let cli = Cli::parse_from(["daynote", "--file-name-use-date"]);
        assert!(cli.file_name_use_date);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "daynote",
            "--temp-file",
            "/tmp/t.md",
            "--store-path",
            "/tmp/out",
            "--file-extension",
            "txt",
            "--no-wait",
        ]);
        assert_eq!(cli.temp_file, PathBuf::from("/tmp/t.md"));
        assert_eq!(cli.store_path, PathBuf::from("/tmp/out"));
        assert_eq!(cli.file_extension, "txt");
        assert!(cli.no_wait);
    }

    #[test]
    fn test_into_config_with_date() {
        let cli = Cli::parse_from(["daynote", "--temp-file", "t.md", "--date", "2024-05-01"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.template, PathBuf::from("t.md"));
        assert_eq!(
            config.naming,
            NameScheme::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert!(config.wait);
    }

    #[test]
    fn test_into_config_fixed_name() {
        let cli = Cli::parse_from(["daynote", "--file-name-use-date=false", "--no-wait"]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.naming, NameScheme::Fixed);
        assert!(!config.wait);
    }

    #[test]
    fn test_into_config_invalid_date() {
        let cli = Cli::parse_from(["daynote", "--date", "May 1st"]);
        assert!(cli.into_config().is_err());
    }

    fn parse_normalized(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_single_dash_flags_with_separate_values() {
        let cli = parse_normalized(&[
            "daynote",
            "-temp-file",
            "/tmp/t.md",
            "-store-path",
            "/tmp/out",
            "-file-extension",
            "txt",
        ]);
        assert_eq!(cli.temp_file, PathBuf::from("/tmp/t.md"));
        assert_eq!(cli.store_path, PathBuf::from("/tmp/out"));
        assert_eq!(cli.file_extension, "txt");
    }

    #[test]
    fn test_single_dash_flags_with_equals() {
        let cli = parse_normalized(&[
            "daynote",
            "-temp-file=/tmp/t.md",
            "-store-path=/tmp/out",
            "-file-name-use-date=false",
            "-file-extension=org",
        ]);
        assert_eq!(cli.temp_file, PathBuf::from("/tmp/t.md"));
        assert_eq!(cli.store_path, PathBuf::from("/tmp/out"));
        assert!(!cli.file_name_use_date);
        assert_eq!(cli.file_extension, "org");
    }

    #[test]
    fn test_single_dash_bare_bool_flag() {
        let cli = parse_normalized(&["daynote", "-file-name-use-date", "-no-wait"]);
        assert!(cli.file_name_use_date);
        assert!(cli.no_wait);
    }

    #[test]
    fn test_mixed_dash_spellings() {
        let cli = parse_normalized(&[
            "daynote",
            "-temp-file",
            "t.md",
            "--store-path=out",
            "--file-name-use-date=false",
        ]);
        assert_eq!(cli.temp_file, PathBuf::from("t.md"));
        assert_eq!(cli.store_path, PathBuf::from("out"));
        assert!(!cli.file_name_use_date);
    }

    #[test]
    fn test_normalize_leaves_other_arguments_alone() {
        let args = ["daynote", "-h", "-unknown", "-", "--", "-temp-file"];
        let normalized = normalize_args(args.iter().map(OsString::from));
        assert_eq!(
            normalized,
            args.iter().map(OsString::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_normalize_value_looking_like_flag_name() {
        // Only arguments with a single leading dash are rewritten
        let normalized = normalize_args(
            ["daynote", "--temp-file", "store-path"]
                .iter()
                .map(OsString::from),
        );
        assert_eq!(normalized[2], OsString::from("store-path"));
    }

    #[test]
    fn test_cli_empty_template_value() {
        let cli = Cli::parse_from(["daynote", "--temp-file", ""]);
        assert_eq!(cli.temp_file, PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_cli_non_utf8_template_path() {
        use std::os::unix::ffi::OsStrExt;

        let raw = std::ffi::OsStr::from_bytes(b"/tmp/note-\xff.md");
        let cli = Cli::parse_from([
            OsString::from("daynote"),
            OsString::from("--temp-file"),
            raw.to_os_string(),
        ]);
        assert_eq!(cli.temp_file.as_os_str(), raw);
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
