//! Batch driver: renders the whole catalog to WAV files.
//!
//! Iterates click 1..=15 and shutter 1..=15, writing one file per recipe.
//! A failure on one id is logged and the run continues; the exit status
//! reports whether any id failed.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use shutterfx::{Category, lookup, render, write_wav};

#[derive(Parser)]
#[command(name = "gensounds", about = "Generate the click/shutter sound catalog")]
struct Cli {
    /// Directory to write the WAV files into
    #[arg(short, long, default_value = "assets/sounds")]
    out_dir: PathBuf,

    /// Seed for the noise source; omit for a fresh seed per run
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            tracing::error!("{failed} recipe(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<u32> {
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {:?}", cli.out_dir))?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::info!("rendering 30 sounds into {:?} (seed {seed})", cli.out_dir);

    let mut failed = 0;
    for category in [Category::Click, Category::Shutter] {
        for id in 1..=15 {
            if let Err(err) = generate_one(cli, category, id, &mut rng) {
                // Isolate the failure; the other recipes are independent.
                tracing::error!("{category}_{id}: {err}");
                failed += 1;
            }
        }
    }
    Ok(failed)
}

fn generate_one(
    cli: &Cli,
    category: Category,
    id: u8,
    rng: &mut StdRng,
) -> Result<(), shutterfx::Error> {
    let sound = lookup(category, id)?;
    let buf = render(sound, rng)?;
    let path = cli.out_dir.join(format!("{category}_{id}.wav"));
    write_wav(&path, &buf)?;
    tracing::info!("wrote {path:?} ({} samples)", buf.len());
    Ok(())
}
