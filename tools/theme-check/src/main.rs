//! Validate a viewer theme pack
//!
//! ```text
//! theme-check [--theme-dir assets/themes/industrial_v2] [--profile v1|v2]
//!             [--min-texture-size N] [--profile-file custom.toml]
//! ```
//!
//! Prints the report to stdout and exits with 1 when any issue was found.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use theme_check::{validate_theme_pack, ValidationProfile};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    V1,
    V2,
}

impl ProfileArg {
    fn profile(self) -> ValidationProfile {
        match self {
            ProfileArg::V1 => ValidationProfile::v1(),
            ProfileArg::V2 => ValidationProfile::v2(),
        }
    }
}

#[derive(Parser)]
#[command(name = "theme-check")]
#[command(about = "Validate viewer theme pack assets and presets")]
struct Cli {
    /// Theme directory to validate
    #[arg(long, default_value = "assets/themes/industrial_v2", value_parser = NonEmptyStringValueParser::new())]
    theme_dir: String,

    /// Built-in profile (file name suffix and thresholds)
    #[arg(long, value_enum, default_value_t = ProfileArg::V2)]
    profile: ProfileArg,

    /// Minimum texture edge; 0 uses the profile default
    ///
    /// Unsigned, so negative values are a usage error rather than an alias
    /// for the profile default.
    #[arg(long, default_value_t = 0)]
    min_texture_size: u32,

    /// Load a custom TOML profile instead of the built-in one
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    profile_file: Option<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = match &cli.profile_file {
        Some(path) => {
            let path = Path::new(path);
            let profile = ValidationProfile::load(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?;
            info!("using profile {} from {}", profile.name, path.display());
            profile
        }
        None => cli.profile.profile(),
    };
    let min_texture_size = profile.effective_min_texture_size(cli.min_texture_size);

    let report = validate_theme_pack(&PathBuf::from(&cli.theme_dir), &profile, min_texture_size);
    println!("{report}");

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
