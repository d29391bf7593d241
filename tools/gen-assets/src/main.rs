//! Generate the industrial_v1 viewer theme pack
//!
//! ```text
//! gen-theme-assets [--out-dir assets/themes/industrial_v1] [--texture-size 256] [--skip-presets]
//! ```

use anyhow::Result;
use clap::Parser;
use gen_theme_assets::{generate_theme, GenerateOptions, DEFAULT_TEXTURE_SIZE};
use std::path::PathBuf;
use theme_shared::ThemeLayout;

#[derive(Parser)]
#[command(name = "gen-theme-assets")]
#[command(about = "Generate industrial theme meshes, textures and material presets")]
struct Cli {
    /// Theme directory to write into
    #[arg(long, default_value = "assets/themes/industrial_v1", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    out_dir: String,

    /// Edge length of every generated texture, in pixels
    #[arg(long, default_value_t = DEFAULT_TEXTURE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    texture_size: u32,

    /// Do not write the `.env` material presets
    #[arg(long)]
    skip_presets: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let out_dir = PathBuf::from(&cli.out_dir);
    let layout = ThemeLayout::new(&out_dir);
    let options = GenerateOptions {
        texture_size: cli.texture_size,
        write_presets: !cli.skip_presets,
    };

    generate_theme(&layout, &options)?;

    println!("generated industrial_v1 assets under: {}", out_dir.display());
    Ok(())
}
