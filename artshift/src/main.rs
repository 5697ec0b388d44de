mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use image::{ImageReader, RgbaImage};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use stripe_shift::{RandomSource, Session, save_png};

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    let config = config::Config::load(&args)?;
    let image = decode(&args.input)?;

    let path = match config.seed {
        Some(seed) => run(&config, image, StdRng::seed_from_u64(seed))?,
        None => run(&config, image, rand::rng())?,
    };

    println!("{}", path.display());
    Ok(())
}

fn decode(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    Ok(img.to_rgba8())
}

fn run<R: RandomSource>(config: &config::Config, image: RgbaImage, rng: R) -> Result<PathBuf> {
    let mut session = Session::with_rng(config.effect, rng);
    session.bind_surface();
    session.load_image(image)?;

    if config.randomize {
        session.randomize_params()?;
        log::info!("random parameters: {:?}", session.params());
    }

    let surface = session.surface().context("no drawing surface")?;
    Ok(save_png(surface, &config.output_dir)?)
}
