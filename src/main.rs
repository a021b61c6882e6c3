// algotrace: print or replay step traces of classic algorithms

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algotrace::catalog::{Catalog, Category};
use algotrace::config::Config;
use algotrace::driver::Driver;
use algotrace::error::TraceError;
use algotrace::input::{parse_graph, parse_values, Input};
use algotrace::samples::SampleGenerator;
use algotrace::trace::graph::Graph;
use algotrace::trace::{Algorithm, Step, Value};

#[derive(Parser)]
#[command(name = "algotrace")]
#[command(about = "Step traces for sorting, searching and graph traversal")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog of algorithm descriptors (defaults to the built-in set)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known algorithms
    List,

    /// Show one algorithm's descriptor
    Show { slug: String },

    /// Trace an algorithm and print every step
    Run {
        /// Algorithm slug, e.g. bubble-sort or bfs
        slug: String,

        /// Comma-separated input values (random sample if omitted)
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,

        /// Value to search for
        #[arg(long, allow_hyphen_values = true)]
        target: Option<Value>,

        /// Adjacency lists separated by ';', e.g. "1,2;0;0"
        #[arg(long)]
        graph: Option<String>,

        /// Traversal start node
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Seed for generated sample input
        #[arg(long)]
        seed: Option<u64>,

        /// Replay in real time at the configured default speed
        #[arg(long)]
        play: bool,

        /// Replay in real time at this speed (1-100); implies --play
        #[arg(long)]
        speed: Option<u32>,

        /// Print events as JSON lines
        #[arg(long)]
        json: bool,

        /// Stop after this many events
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_json(&read(path)?)
            .with_context(|| format!("invalid config file {}", path.display()))?,
        None => Config::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json(&read(path)?)
            .with_context(|| format!("invalid catalog file {}", path.display()))?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Commands::List => {
            for d in catalog.iter() {
                println!(
                    "{:<16} {:<10} {:<22} time {}, space {}",
                    d.slug, d.category, d.name, d.complexity.time, d.complexity.space
                );
            }
            Ok(())
        }
        Commands::Show { slug } => {
            let descriptor = catalog
                .get(&slug)
                .ok_or(TraceError::UnsupportedAlgorithm { slug })?;
            println!("{}", serde_json::to_string_pretty(descriptor)?);
            Ok(())
        }
        Commands::Run {
            slug,
            values,
            target,
            graph,
            start,
            seed,
            play,
            speed,
            json,
            limit,
        } => {
            let (_, algorithm) = catalog.resolve(&slug)?;
            let drawn_seed = seed.is_none();
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, "sample seed");
            let mut samples = SampleGenerator::new(seed, config.samples.clone());
            let input = build_input(
                algorithm,
                &mut samples,
                values.as_deref(),
                target,
                graph.as_deref(),
                start,
            )?;

            let mut driver = Driver::new(algorithm, input, config.playback.clone())?;
            let printer = Printer { json };
            let limit = limit.unwrap_or(usize::MAX);

            match (play, speed) {
                (_, Some(speed)) => {
                    driver.play(speed, Instant::now())?;
                    replay(&mut driver, limit, &printer)?;
                }
                (true, None) => {
                    driver.resume(Instant::now())?;
                    replay(&mut driver, limit, &printer)?;
                }
                (false, None) => {
                    while driver.position() < limit {
                        match driver.step()? {
                            Some(step) => printer.print(driver.position(), &step)?,
                            None => break,
                        }
                    }
                }
            }

            eprintln!(
                "{} events. {}",
                driver.position(),
                driver.presentation().description
            );
            if drawn_seed {
                eprintln!("seed {} (pass --seed {} to reproduce)", seed, seed);
            }
            Ok(())
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn build_input(
    algorithm: Algorithm,
    samples: &mut SampleGenerator,
    values: Option<&str>,
    target: Option<Value>,
    graph: Option<&str>,
    start: usize,
) -> Result<Input, TraceError> {
    let input = match algorithm.category() {
        Category::Sorting => match values {
            Some(text) => Input::Sequence {
                values: parse_values(text)?,
            },
            None => samples.input_for(algorithm),
        },
        Category::Searching => match (values, target) {
            (Some(text), Some(target)) => Input::Search {
                values: parse_values(text)?,
                target,
            },
            (Some(_), None) => {
                return Err(TraceError::MissingTarget {
                    slug: algorithm.slug().to_string(),
                })
            }
            (None, chosen) => {
                let mut input = samples.input_for(algorithm);
                if let (Some(chosen), Input::Search { target, .. }) = (chosen, &mut input) {
                    *target = chosen;
                }
                input
            }
        },
        Category::Graph => Input::Graph {
            graph: match graph {
                Some(text) => parse_graph(text)?,
                None => Graph::demo(),
            },
            start,
        },
        Category::Other => {
            return Err(TraceError::UnsupportedAlgorithm {
                slug: algorithm.slug().to_string(),
            })
        }
    };
    Ok(input)
}

/// Drive playback off the cadence, sleeping until each step is due
fn replay(driver: &mut Driver, limit: usize, printer: &Printer) -> Result<()> {
    while let Some(deadline) = driver.next_deadline() {
        if driver.position() >= limit {
            driver.pause();
            break;
        }
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
        if let Some(step) = driver.tick(Instant::now())? {
            printer.print(driver.position(), &step)?;
        }
    }
    Ok(())
}

struct Printer {
    json: bool,
}

impl Printer {
    fn print(&self, position: usize, step: &Step) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(step)?);
            return Ok(());
        }

        let detail = match step {
            Step::Sort(s) => format!("{:?} {}", s.indices.as_slice(), join(&s.snapshot)),
            Step::Search(s) => format!("{:?}", s.indices.as_slice()),
            Step::Graph(s) => match &s.neighbors {
                Some(neighbors) => format!("node {} -> {}", s.node, join(neighbors)),
                None => format!("node {}", s.node),
            },
        };
        println!(
            "{:>5}  {:<10} {:<28} {}",
            position,
            step.kind_name(),
            detail,
            step.description()
        );
        Ok(())
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
