//! Example: fill a square hole punched into a synthetic gradient.
//!
//! A smooth ramp is the easy case for inverse-distance weighting, so the
//! reconstruction error printed per exponent shows how `z` trades smoothness
//! for locality. Pass `--out` to also write the filled images.
//!
//! Run from the workspace root:
//!   cargo run -p holefill --example synthetic -- --help

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use holefill::{Connectivity, FillConfig, Image, Pixel, fill, save_gray};

#[derive(Parser, Debug)]
#[command(about = "Fill a square hole in a synthetic gradient image")]
struct Args {
    #[arg(long, default_value_t = 96)]
    size: usize,

    /// Side length of the square hole
    #[arg(long, default_value_t = 24)]
    hole: usize,

    #[arg(long, default_value_t = 0.01)]
    epsilon: f64,

    /// Directory for `fill_z<z>.png` outputs
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let truth = gradient(args.size);
    let start = (args.size - args.hole.min(args.size)) / 2;
    let in_hole = |x: usize, y: usize| {
        (start..start + args.hole).contains(&x) && (start..start + args.hole).contains(&y)
    };

    let mut with_hole = truth.as_view().map(|&v| Pixel::Known(v));
    for y in 0..args.size {
        for x in 0..args.size {
            if in_hole(x, y)
                && let Some(px) = with_hole.get_mut(x, y)
            {
                *px = Pixel::Missing;
            }
        }
    }

    for z in [1.0, 2.0, 3.0, 5.0] {
        let cfg = FillConfig::new(z, args.epsilon, Connectivity::Eight);
        let Some(filled) = fill(&with_hole.as_view(), &cfg)?.into_image() else {
            log::warn!("no hole to fill");
            return Ok(());
        };

        let mut max_err = 0.0f32;
        for (i, (&a, &b)) in filled.data().iter().zip(truth.data()).enumerate() {
            if in_hole(i % args.size, i / args.size) {
                max_err = max_err.max((a - b).abs());
            }
        }
        println!("z={z:<4} max abs error inside hole: {max_err:.4}");

        if let Some(dir) = &args.out {
            let path = dir.join(format!("fill_z{z}.png"));
            save_gray(&path, &filled.as_view())
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}

fn gradient(size: usize) -> Image<f32> {
    let denom = (2 * size.max(2) - 2) as f32;
    let data = (0..size * size)
        .map(|i| ((i % size) + (i / size)) as f32 / denom)
        .collect();
    Image::from_vec(size, size, data).expect("size * size samples")
}
