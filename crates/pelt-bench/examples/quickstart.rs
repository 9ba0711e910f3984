//! Pelt Quickstart: grow a coat pattern from random noise.
//!
//! Demonstrates:
//!   1. Building a `Cells` automaton from a `CellsConfig`
//!   2. Seeding it reproducibly
//!   3. Developing several generations and reading the step reports
//!   4. Dumping discriminators and the final raster as text
//!   5. Taking the raster out as flat RGBA bytes for an image writer
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use pelt_bench::ascii;
use pelt_core::{COLOR_D, COLOR_U};
use pelt_engine::{render_discs, Cells, CellsConfig, DevelopParams, ExecutionMode};
use pelt_space::VonNeumann;
use tracing_subscriber::EnvFilter;

// ─── Grid parameters ────────────────────────────────────────────

const SIDE: u32 = 48;
const DENSITY: f64 = 0.25;
const SEED: u64 = 2024;
const GENERATIONS: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut cells = Cells::new(CellsConfig {
        width: SIDE,
        height: SIDE,
        fill: COLOR_U,
        strategy: Box::new(VonNeumann),
        mode: ExecutionMode::auto(),
    })?;
    cells.seed_random(DENSITY, SEED)?;
    println!("seeded {} of {} cells", cells.count(COLOR_D), SIDE * SIDE);

    // Small activator disc, wide inhibitor ring: spots.
    let params = DevelopParams::new(2, 5, 0.3);
    for generation in 1..=GENERATIONS {
        let report = cells.develop_params(&params)?;
        println!(
            "generation {generation}: {} changed ({} -> D, {} -> U, {} held)",
            report.changed, report.to_d, report.to_u, report.held
        );
        if report.changed == 0 {
            println!("stable");
            break;
        }
    }

    println!("\nlast discriminators (top rows):");
    for line in render_discs(cells.discs()).lines().take(6) {
        println!("{line}");
    }

    println!("\npattern:");
    print!("{}", ascii(&cells)?);

    let raster = cells.into_raster();
    println!(
        "\n{}x{} RGBA8 buffer: {} bytes",
        raster.width(),
        raster.height(),
        raster.to_rgba_bytes().len()
    );
    Ok(())
}
