use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use hf_core::EdgePolicy;
use hf_fill::{Connectivity, FillConfig, FillOutcome, FillStats, fill};
use hf_io::{filled_path, load_gray, merge_mask, save_gray};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "holefill")]
#[command(about = "Fill the masked hole of a grayscale image by inverse-distance weighting")]
struct Cli {
    /// Grayscale image to repair.
    image: PathBuf,
    /// Mask raster; zero samples mark the hole.
    mask: PathBuf,
    /// Distance exponent of the weight kernel.
    #[arg(allow_negative_numbers = true)]
    z: f64,
    /// Stability offset of the weight kernel (must be > 0).
    #[arg(allow_negative_numbers = true)]
    epsilon: f64,
    /// Boundary connectivity: 4 or 8.
    connectivity: u8,

    /// How neighbors outside the image are treated.
    #[arg(long, value_enum, default_value_t = EdgeArg::Skip)]
    edge_policy: EdgeArg,
    /// Constant used by `--edge-policy pad`.
    #[arg(long, default_value_t = 0.0)]
    pad_value: f32,
    /// Output path (default: <image stem>_filled.<ext> next to the image).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Write a JSON report with the configuration and stage timings.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EdgeArg {
    Skip,
    Clamp,
    #[value(name = "reflect101")]
    Reflect101,
    Pad,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    image: &'a Path,
    mask: &'a Path,
    output: Option<&'a Path>,
    width: usize,
    height: usize,
    config: &'a FillConfig,
    stats: Option<&'a FillStats>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = build_config(&cli)?;
    run(&cli, &cfg)
}

fn build_config(cli: &Cli) -> Result<FillConfig> {
    let connectivity = Connectivity::try_from(cli.connectivity)?;
    let edge_policy = match cli.edge_policy {
        EdgeArg::Skip => EdgePolicy::Skip,
        EdgeArg::Clamp => EdgePolicy::Clamp,
        EdgeArg::Reflect101 => EdgePolicy::Reflect101,
        EdgeArg::Pad => {
            if !(0.0..=1.0).contains(&cli.pad_value) {
                bail!("pad value must lie in [0, 1], got {}", cli.pad_value);
            }
            EdgePolicy::Pad(cli.pad_value)
        }
    };

    let cfg = FillConfig::new(cli.z, cli.epsilon, connectivity).with_edge_policy(edge_policy);
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: &Cli, cfg: &FillConfig) -> Result<()> {
    let image = load_gray(&cli.image)
        .with_context(|| format!("loading image {}", cli.image.display()))?;
    let mask =
        load_gray(&cli.mask).with_context(|| format!("loading mask {}", cli.mask.display()))?;

    let with_hole = merge_mask(&image.as_view(), &mask.as_view());
    let outcome = fill(&with_hole.as_view(), cfg).context("filling hole")?;

    let output_path = cli.output.clone().unwrap_or_else(|| filled_path(&cli.image));
    let stats = match &outcome {
        FillOutcome::Filled(result) => {
            save_gray(&output_path, &result.image.as_view())
                .with_context(|| format!("writing {}", output_path.display()))?;
            log::info!(
                "filled {} pixels from {} boundary samples in {:.2} ms -> {}",
                result.stats.hole_pixels,
                result.stats.boundary_pixels,
                result.stats.total_ms(),
                output_path.display()
            );
            Some(&result.stats)
        }
        FillOutcome::NoHole => {
            log::info!("mask {} marks no pixel; nothing written", cli.mask.display());
            None
        }
    };

    if let Some(report_path) = &cli.report {
        let report = Report {
            image: &cli.image,
            mask: &cli.mask,
            output: stats.is_some().then_some(output_path.as_path()),
            width: image.width(),
            height: image.height(),
            config: cfg,
            stats,
        };
        write_json(report_path, &report)?;
    }

    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}
