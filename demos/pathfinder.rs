//! Terminal path-search demo.
//!
//! Run: cargo run --bin pathfinder -- --strategy bidir --random 0.3 --seed 7

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use gridsearch_core::{CancelToken, Scene};
use gridsearch_demos::{DEFAULT_LAYOUT, DemoResult, Tracer, load, render, scatter};
use gridsearch_paths::{SearchConfig, SearchRequest, Strategy, search};
use rand::SeedableRng;

#[derive(Parser)]
#[command(about = "Run an uninformed grid search and print the board")]
struct Options {
    /// bfs, dfs, ucs, dls, dls:N, iddfs or bidirectional.
    #[arg(short, long, default_value = "bfs")]
    strategy: Strategy,
    /// Run every strategy and print a summary line for each.
    #[arg(long, conflicts_with = "strategy")]
    all: bool,
    /// Text layout to search (`.` free, `#` wall, `S` start, `T` target).
    #[arg(short, long)]
    map: Option<PathBuf>,
    /// Scatter walls at random with this density instead of using a map.
    #[arg(short, long, conflicts_with = "map")]
    random: Option<f64>,
    #[arg(long, default_value_t = 10)]
    rows: i32,
    #[arg(long, default_value_t = 10)]
    cols: i32,
    /// Seed for `--random`; defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,
    /// Print every step as it happens.
    #[arg(short, long)]
    trace: bool,
    /// Also report frontier insertions.
    #[arg(short, long)]
    frontier: bool,
    /// Pause after every step.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// Cancel the search after this many visits.
    #[arg(long)]
    max_steps: Option<usize>,
    /// Deepest pass iterative deepening may try.
    #[arg(long)]
    max_depth: Option<usize>,
}

impl Options {
    fn scene(&self) -> DemoResult<Scene> {
        if let Some(path) = &self.map {
            return load(path);
        }
        if let Some(density) = self.random {
            let seed = self.seed.unwrap_or_else(clock_seed);
            println!("seed {seed}");
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            return scatter(self.rows, self.cols, density, &mut rng);
        }
        Ok(Scene::parse(DEFAULT_LAYOUT)?)
    }

    fn config(&self) -> SearchConfig {
        let config = SearchConfig::default().with_frontier(self.frontier);
        match self.max_depth {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

fn run(opt: &Options) -> DemoResult<()> {
    let scene = opt.scene()?;
    let config = opt.config();

    if opt.all {
        for strategy in Strategy::ALL {
            let cancel = CancelToken::new();
            let mut tracer = Tracer::new(cancel.clone()).with_max_visits(opt.max_steps);
            let request = SearchRequest::from_scene(&scene, strategy).with_config(config);
            let out = search(&request, &mut tracer, &cancel)?;
            println!(
                "{:<14} {:<24} edges {:>3}  visited {:>4}",
                strategy.to_string(),
                out.to_string(),
                out.edges(),
                out.visited
            );
        }
        return Ok(());
    }

    let cancel = CancelToken::new();
    let mut tracer = Tracer::new(cancel.clone())
        .with_echo(opt.trace)
        .with_delay(Duration::from_millis(opt.delay_ms))
        .with_max_visits(opt.max_steps);
    let request = SearchRequest::from_scene(&scene, opt.strategy).with_config(config);
    let out = search(&request, &mut tracer, &cancel)?;

    println!("{}", render(&scene, &tracer.log, &out));
    println!();
    if cancel.is_cancelled() && !out.found {
        println!("{}: stopped after {} visits", opt.strategy, out.visited);
    } else {
        println!("{}: {}", opt.strategy, out);
        if let Some(meeting) = out.meeting {
            println!("frontiers met at {meeting}");
        }
        if out.found {
            println!("{} moves, {} visits", out.edges(), out.visited);
        }
    }
    Ok(())
}

fn main() {
    let opt = Options::parse();
    if let Err(e) = run(&opt) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
