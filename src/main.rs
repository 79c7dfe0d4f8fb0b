//! `assetgen` CLI - generate PWA icons, screenshots, and cloth artwork.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetgen::generate::{icons, screenshots, swatch, texture_sample};
use assetgen::transform::Insets;
use assetgen::Outcome;

/// Generate the static image assets of the billiards scorekeeper PWA.
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resize the app artwork into PWA icons.
    Icons {
        /// Source artwork.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,

        /// Directory receiving icon-<size>.png.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Icon edge length; repeat for several sizes.
        #[arg(long = "size", value_name = "INT")]
        sizes: Vec<u32>,
    },

    /// Cut mobile and desktop store screenshots from a device capture.
    Screenshots {
        /// Device capture.
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,

        /// Directory receiving screenshot-mobile.png and screenshot-desktop.png.
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        trim: Trim,
    },

    /// Render the cloth texture comparison sample.
    TextureSample {
        /// Output PNG.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Random seed for reproducible noise.
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,

        /// Font file to try first; repeatable.
        #[arg(long = "font", value_name = "PATH")]
        fonts: Vec<PathBuf>,
    },

    /// Render the cloth colour swatch.
    Swatch {
        /// Output PNG.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Font file to try first; repeatable.
        #[arg(long = "font", value_name = "PATH")]
        fonts: Vec<PathBuf>,

        /// Monospace font file for hex codes; repeatable.
        #[arg(long = "mono-font", value_name = "PATH")]
        mono_fonts: Vec<PathBuf>,
    },

    /// Run every generator with default settings.
    All {
        /// Directory holding the source images.
        #[arg(long, value_name = "DIR", default_value = "attached_assets")]
        assets_dir: PathBuf,

        /// Directory receiving all outputs.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Random seed for the texture sample.
        #[arg(long, value_name = "INT")]
        seed: Option<u64>,
    },
}

/// Fixed edge trims. Any non-zero trim switches from aspect-ratio cropping
/// to cropping by insets.
#[derive(ClapArgs, Debug, Default)]
struct Trim {
    #[arg(long, value_name = "PX", default_value_t = 0)]
    trim_left: u32,

    #[arg(long, value_name = "PX", default_value_t = 0)]
    trim_top: u32,

    #[arg(long, value_name = "PX", default_value_t = 0)]
    trim_right: u32,

    #[arg(long, value_name = "PX", default_value_t = 0)]
    trim_bottom: u32,
}

impl Trim {
    fn crop_mode(&self) -> screenshots::CropMode {
        let insets = Insets {
            left: self.trim_left,
            top: self.trim_top,
            right: self.trim_right,
            bottom: self.trim_bottom,
        };

        if insets == Insets::default() {
            screenshots::CropMode::AspectFit
        } else {
            screenshots::CropMode::Insets(insets)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("assetgen={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(args.command) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Icons {
            source,
            out_dir,
            sizes,
        } => {
            let defaults = icons::Config::default();
            let config = icons::Config {
                source: source.unwrap_or(defaults.source),
                out_dir: out_dir.unwrap_or(defaults.out_dir),
                sizes: if sizes.is_empty() { defaults.sizes } else { sizes },
            };
            let outcome = icons::generate(&config).context("Failed to generate icons")?;
            report(&outcome);
        }

        Command::Screenshots {
            source,
            out_dir,
            trim,
        } => {
            let defaults = screenshots::Config::default();
            let config = screenshots::Config {
                source: source.unwrap_or(defaults.source),
                out_dir: out_dir.unwrap_or(defaults.out_dir),
                crop: trim.crop_mode(),
                ..screenshots::Config::default()
            };
            let outcome =
                screenshots::generate(&config).context("Failed to generate screenshots")?;
            report(&outcome);
        }

        Command::TextureSample { out, seed, fonts } => {
            let defaults = texture_sample::Config::default();
            let config = texture_sample::Config {
                out: out.unwrap_or(defaults.out),
                seed,
                fonts,
                ..texture_sample::Config::default()
            };
            let outcome =
                texture_sample::generate(&config).context("Failed to render texture sample")?;
            report(&outcome);
        }

        Command::Swatch {
            out,
            fonts,
            mono_fonts,
        } => {
            let defaults = swatch::Config::default();
            let config = swatch::Config {
                out: out.unwrap_or(defaults.out),
                fonts,
                mono_fonts,
                ..swatch::Config::default()
            };
            let outcome = swatch::generate(&config).context("Failed to render colour swatch")?;
            report(&outcome);
        }

        Command::All {
            assets_dir,
            out_dir,
            seed,
        } => run_all(&assets_dir, &out_dir, seed)?,
    }

    Ok(())
}

/// Run the four generators in order, sharing one output directory.
fn run_all(assets_dir: &Path, out_dir: &Path, seed: Option<u64>) -> Result<()> {
    let icon_defaults = icons::Config::default();
    let icon_config = icons::Config {
        source: rebase(&icon_defaults.source, assets_dir),
        out_dir: out_dir.to_path_buf(),
        ..icon_defaults
    };

    let screenshot_defaults = screenshots::Config::default();
    let screenshot_config = screenshots::Config {
        source: rebase(&screenshot_defaults.source, assets_dir),
        out_dir: out_dir.to_path_buf(),
        ..screenshot_defaults
    };

    let texture_config = texture_sample::Config {
        out: out_dir.join("cloth_texture_sample.png"),
        seed,
        ..texture_sample::Config::default()
    };

    let swatch_config = swatch::Config {
        out: out_dir.join("billiards_color_swatch.png"),
        ..swatch::Config::default()
    };

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Generating [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("#>-"),
    );

    let mut outcomes = Vec::with_capacity(4);

    pb.set_message("icons");
    outcomes.push(icons::generate(&icon_config).context("Failed to generate icons")?);
    pb.inc(1);

    pb.set_message("screenshots");
    outcomes.push(
        screenshots::generate(&screenshot_config).context("Failed to generate screenshots")?,
    );
    pb.inc(1);

    pb.set_message("texture sample");
    outcomes.push(
        texture_sample::generate(&texture_config).context("Failed to render texture sample")?,
    );
    pb.inc(1);

    pb.set_message("swatch");
    outcomes.push(swatch::generate(&swatch_config).context("Failed to render colour swatch")?);
    pb.inc(1);

    pb.finish_with_message("done");

    for outcome in &outcomes {
        report(outcome);
    }

    Ok(())
}

/// Keep the file name of a default source but look for it in `dir`.
fn rebase(default: &Path, dir: &Path) -> PathBuf {
    default
        .file_name()
        .map_or_else(|| default.to_path_buf(), |name| dir.join(name))
}

fn report(outcome: &Outcome) {
    for line in summary(outcome) {
        println!("{line}");
    }
}

/// One line per written file. A missing source has already been logged by
/// the generator, so it adds nothing here.
fn summary(outcome: &Outcome) -> Vec<String> {
    outcome
        .written()
        .iter()
        .map(|path| format!("Created {}", path.display()))
        .collect()
}
