mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use torus_lattice::{Dimension, Neighborhood, Point, neighborhood};
use tracing_subscriber::EnvFilter;

use crate::config::WorldConfig;

#[derive(Parser)]
#[command(name = "lattice-cli", about = "CLI tool for torus lattice operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON world file with width, height and origin
    #[arg(long, global = true)]
    world: Option<PathBuf>,

    /// Plane width, overrides the world file
    #[arg(long, global = true)]
    width: Option<i64>,

    /// Plane height, overrides the world file
    #[arg(long, global = true)]
    height: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and plane info
    Info,
    /// Print the wrapped Moore neighborhood of a cell
    Neighbors {
        #[arg(short, long, allow_negative_numbers = true)]
        x: i64,
        #[arg(short, long, allow_negative_numbers = true)]
        y: i64,
    },
    /// Repeatedly move from the origin by a displacement, wrapping at the edges
    Walk {
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        dx: i64,
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        dy: i64,
        /// Number of moves
        #[arg(short, long, default_value = "10")]
        steps: usize,
    },
    /// Verify wrap and neighborhood behavior on the configured plane
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.world {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    }
    .with_overrides(cli.width, cli.height);
    let plane = config.dimension().context("invalid world size")?;
    tracing::debug!(%plane, origin = %config.origin, "world configured");

    match cli.command {
        Commands::Info => {
            println!("lattice-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("lattice: {}", torus_lattice::crate_info());
            println!(
                "plane: {plane} ({} cells), origin {}",
                plane.area(),
                config.origin.normalize(plane)
            );
        }
        Commands::Neighbors { x, y } => {
            let center = Point::new(x, y);
            let n = neighborhood(center, plane);
            println!("Neighborhood of {center} on {plane}:");
            for line in render_grid(&n) {
                println!("  {line}");
            }
            for (i, cell) in n.iter().enumerate() {
                println!("  [{i}] {cell}");
            }
        }
        Commands::Walk { dx, dy, steps } => {
            let displacement = Point::new(dx, dy);
            let start = config.origin.normalize(plane);
            println!("Walk on {plane} from {start} by {displacement}, {steps} steps");
            for (step, position) in walk(start, displacement, plane).take(steps).enumerate() {
                tracing::debug!(step = step + 1, %position, "moved");
                println!("  {:>4}: {position}", step + 1);
            }
        }
        Commands::Check => {
            let results = self_check(plane);
            let mut failed = 0;
            for (name, ok) in &results {
                println!("  {name}: {}", if *ok { "OK" } else { "FAIL" });
                if !ok {
                    failed += 1;
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {} checks failed on {plane}", results.len());
            }
            tracing::info!(checks = results.len(), %plane, "all checks passed");
        }
    }

    Ok(())
}

/// Lays the neighborhood out as it appears on screen: one line per `dy`,
/// `dx` increasing left to right.
fn render_grid(n: &Neighborhood) -> Vec<String> {
    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| n[col * 3 + row].to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Positions visited by repeatedly moving `displacement` from `start`.
///
/// The displacement is wrapped onto the plane first and each axis advances
/// without forming a sum larger than the side, so any `i64` input is safe.
fn walk(start: Point, displacement: Point, plane: Dimension) -> impl Iterator<Item = Point> {
    let step = displacement.normalize(plane);
    let mut position = start.normalize(plane);
    std::iter::from_fn(move || {
        position = Point::new(
            advance(position.x, step.x, plane.width()),
            advance(position.y, step.y, plane.height()),
        );
        Some(position)
    })
}

/// `(pos + step) mod side` for `pos` and `step` in `[0, side)`.
fn advance(pos: i64, step: i64, side: i64) -> i64 {
    let room = side - pos;
    if step >= room { step - room } else { pos + step }
}

/// Wrap and neighborhood properties evaluated against `plane`.
fn self_check(plane: Dimension) -> Vec<(&'static str, bool)> {
    let corner = Point::new(plane.width() - 1, 0);
    let mut moved = corner;
    moved.move_by(Point::new(1, 0));

    vec![
        (
            "origin wraps to far corner",
            neighborhood(Point::ORIGIN, plane)[0]
                == Point::new(plane.width() - 1, plane.height() - 1),
        ),
        (
            "right edge wraps to column 0",
            moved.normalize(plane) == Point::ORIGIN,
        ),
        (
            "every neighborhood has nine cells on the plane",
            plane.points().all(|c| {
                let n = neighborhood(c, plane);
                n.iter().count() == Neighborhood::LEN && n.iter().all(|p| plane.contains(p))
            }),
        ),
        (
            "center sits at the center index",
            plane
                .points()
                .all(|c| neighborhood(c, plane).center() == c),
        ),
        (
            "dimension survives point round trip",
            plane.to_point().to_dimension() == Ok(plane),
        ),
    ]
}
