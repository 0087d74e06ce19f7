//! Command-line explorer for near-Earth object close approaches
//!
//! Run with: cargo run -p neotrace-cli --bin neotrace -- query --limit 5

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use neotrace_core::{
    export, limit, load_approaches, load_neos, ApproachFilter, DataConfig, LinkedApproach,
    NeoDatabase,
};

#[derive(Debug, Parser)]
#[command(
    name = "neotrace",
    version,
    about = "Explore close approaches of near-Earth objects"
)]
struct Cli {
    /// CSV file with near-Earth object data
    #[arg(long, global = true)]
    neofile: Option<PathBuf>,

    /// JSON file with close-approach data
    #[arg(long, global = true)]
    cadfile: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a single object by designation or by name
    Inspect(InspectArgs),
    /// Filter close approaches and print or export them
    Query(QueryArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("key").required(true).multiple(false)))]
struct InspectArgs {
    /// Primary designation of the object
    #[arg(long, group = "key")]
    pdes: Option<String>,

    /// IAU name of the object (exact, case-sensitive)
    #[arg(long, group = "key")]
    name: Option<String>,

    /// Also list every known close approach of the object
    #[arg(long)]
    full: bool,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    date: Option<NaiveDate>,

    /// Only approaches on or after this date
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Only approaches on or before this date
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long)]
    min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long)]
    max_distance: Option<f64>,

    /// Minimum approach velocity in km/s
    #[arg(long)]
    min_velocity: Option<f64>,

    /// Maximum approach velocity in km/s
    #[arg(long)]
    max_velocity: Option<f64>,

    /// Minimum object diameter in km
    #[arg(long)]
    min_diameter: Option<f64>,

    /// Maximum object diameter in km
    #[arg(long)]
    max_diameter: Option<f64>,

    /// Only approaches of potentially hazardous objects
    #[arg(long, conflicts_with = "not_hazardous")]
    hazardous: bool,

    /// Only approaches of objects not classified as hazardous
    #[arg(long)]
    not_hazardous: bool,

    /// Maximum number of results; 0 means unlimited
    #[arg(long, short = 'l')]
    limit: Option<usize>,

    /// Write results to this file (.csv or .json) instead of printing
    #[arg(long, short = 'o')]
    outfile: Option<PathBuf>,
}

/// How many results to print when no explicit limit is given
const DEFAULT_PRINT_LIMIT: usize = 10;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DataConfig::default();
    let neofile = cli.neofile.unwrap_or(config.neo_csv_path);
    let cadfile = cli.cadfile.unwrap_or(config.cad_json_path);

    let neos = load_neos(&neofile)
        .with_context(|| format!("loading near-Earth objects from {}", neofile.display()))?;
    let approaches = load_approaches(&cadfile)
        .with_context(|| format!("loading close approaches from {}", cadfile.display()))?;
    let db = NeoDatabase::new(neos, approaches);
    tracing::debug!(
        neos = db.neos().len(),
        approaches = db.approaches().len(),
        "database ready"
    );

    match cli.command {
        Command::Inspect(args) => inspect(&db, args),
        Command::Query(args) => query(&db, args),
    }
}

fn inspect(db: &NeoDatabase, args: InspectArgs) -> anyhow::Result<()> {
    let neo = if let Some(pdes) = &args.pdes {
        db.get_neo_by_designation(pdes)
    } else if let Some(name) = &args.name {
        db.get_neo_by_name(name)
    } else {
        unreachable!("clap requires exactly one lookup key");
    };

    let Some(neo) = neo else {
        bail!("no matching NEO found");
    };

    println!("{neo}");
    if args.full {
        for approach in db.approaches_of(neo) {
            println!("- {approach}");
        }
    }
    Ok(())
}

fn query(db: &NeoDatabase, args: QueryArgs) -> anyhow::Result<()> {
    let filter = build_filter(&args);
    let results = db.query(filter);

    match args.outfile {
        Some(path) => {
            export::write_to_path(limit(results, args.limit), &path)
                .with_context(|| format!("writing results to {}", path.display()))?;
            println!("Results written to {}", path.display());
        }
        None => {
            // Printing defaults to a small page; an explicit 0 lifts the cap.
            let capped = limit(results, args.limit.or(Some(DEFAULT_PRINT_LIMIT)));
            let mut shown = 0usize;
            for item in capped {
                println!("{}", describe(&item));
                shown += 1;
            }
            if shown == 0 {
                println!("No matching close approaches.");
            }
        }
    }
    Ok(())
}

fn build_filter(args: &QueryArgs) -> ApproachFilter {
    let mut filter = ApproachFilter::new();
    if let Some(d) = args.date {
        filter = filter.on_date(d);
    }
    if let Some(d) = args.start_date {
        filter = filter.start_date(d);
    }
    if let Some(d) = args.end_date {
        filter = filter.end_date(d);
    }
    if let Some(v) = args.min_distance {
        filter = filter.min_distance(v);
    }
    if let Some(v) = args.max_distance {
        filter = filter.max_distance(v);
    }
    if let Some(v) = args.min_velocity {
        filter = filter.min_velocity(v);
    }
    if let Some(v) = args.max_velocity {
        filter = filter.max_velocity(v);
    }
    if let Some(v) = args.min_diameter {
        filter = filter.min_diameter(v);
    }
    if let Some(v) = args.max_diameter {
        filter = filter.max_diameter(v);
    }
    if args.hazardous {
        filter = filter.hazardous(true);
    } else if args.not_hazardous {
        filter = filter.hazardous(false);
    }
    filter
}

/// One human-readable line per result, with the object's full name
fn describe(item: &LinkedApproach<'_>) -> String {
    format!(
        "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
        item.approach.time_str(),
        item.neo.full_name(),
        item.approach.distance,
        item.approach.velocity
    )
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}
