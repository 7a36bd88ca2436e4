use clap::Parser;
use discadelta::util::io::{read_segment_configs, write_segments_json};
use discadelta::{solve, total_distance};
use log::info;
use std::path::PathBuf;

/// Solves a Discadelta segment layout and prints the result.
///
/// This CLI is a demo surface, not a normative interface: the solver itself is
/// the library's `solve` function (see `discadelta::solve`); the table layout
/// below is illustrative.
#[derive(Parser)]
#[command(about = "Discadelta segment layout solver")]
struct Cli {
    /// Path to a JSON file containing an ordered array of segment configs.
    #[arg(short = 'i', long, help = "Path to the input JSON file")]
    input: PathBuf,

    /// Container distance to partition the segments across.
    #[arg(short = 'r', long = "root-distance", help = "Container distance")]
    root_distance: f32,

    /// Optional path to write the solved segments to, as JSON.
    #[arg(short = 'o', long, help = "Path to write the solved segments to")]
    output: Option<PathBuf>,
}

fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .expect("logger already initialized");
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let configs = read_segment_configs(&cli.input)?;
    info!(
        "[MAIN] loaded {} segment configs from {}",
        configs.len(),
        cli.input.display()
    );

    let segments = solve(&configs, cli.root_distance);

    println!(
        "{:<16}{:>12}{:>12}{:>12}",
        "name", "base", "delta", "distance"
    );
    for s in &segments {
        println!(
            "{:<16}{:>12.3}{:>12.3}{:>12.3}",
            s.name, s.base, s.expand_delta, s.distance
        );
    }
    let total = total_distance(&segments);
    println!("{:-<52}", "");
    println!("total: {:.3} (requested {:.3})", total, cli.root_distance);

    if let Some(output) = &cli.output {
        write_segments_json(output, &segments)?;
    }

    Ok(())
}
