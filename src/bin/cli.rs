//! Portal Core CLI
//!
//! Runs the view-model derivations over JSON files captured from the content
//! API. Stands in for the frontend's fetch layer during development and when
//! inspecting API snapshots.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use portal_core::{
    config::Config,
    error::{AppError, Result},
    locale::Locale,
    models::{DepartmentNode, DepartmentRecord, EventRecord, LinkRecord},
    view,
};

/// Portal Core - view-model derivation for the member portal
#[derive(Parser, Debug)]
#[command(name = "portal", version, about = "Derives portal view models from API record files")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "portal.toml")]
    config: PathBuf,

    /// Active locale tag (en or zh)
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the department org chart from a department dump
    Departments {
        /// JSON file with an array of department records
        input: PathBuf,
    },

    /// Partition events into upcoming/ongoing/past
    Events {
        /// JSON file with an array of event records
        input: PathBuf,

        /// Classify against this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<String>,
    },

    /// Merge the default link catalog with a fetched override catalog
    Links {
        /// JSON file with an array of override link records
        #[arg(long)]
        overrides: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print one node of the org chart, indented by depth.
fn print_node(node: &DepartmentNode, locale: Locale, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{} (#{})", indent, node.record.display_name(locale), node.record.id);
    for child in &node.children {
        print_node(child, locale, depth + 1);
    }
}

fn print_event_bucket(label: &str, bucket: &[EventRecord], locale: Locale) {
    println!("{} ({}):", label, bucket.len());
    for event in bucket {
        let date = event.eventdate.as_deref().unwrap_or("TBA");
        println!("  {}  {}", date, event.display_name(locale));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let locale = Locale::parse_or_default(&cli.locale);

    match cli.command {
        Command::Departments { input } => {
            let records = DepartmentRecord::load_all(&input)?;
            log::info!("Loaded {} department record(s)", records.len());

            let forest = view::build_department_forest(&records);
            for root in &forest {
                print_node(root, locale, 0);
            }
        }

        Command::Events { input, now } => {
            let records = EventRecord::load_all(&input)?;
            log::info!("Loaded {} event record(s)", records.len());

            let now = match now {
                Some(raw) => raw
                    .parse::<DateTime<Utc>>()
                    .map_err(|e| AppError::config(format!("Invalid --now instant: {e}")))?,
                None => Utc::now(),
            };

            let buckets = view::classify_events(&records, now);
            print_event_bucket("Upcoming", &buckets.upcoming, locale);
            print_event_bucket("Ongoing", &buckets.ongoing, locale);
            print_event_bucket("Past", &buckets.past, locale);

            let skipped = records.len() - buckets.len();
            if skipped > 0 {
                log::debug!("{skipped} event(s) without a parseable start were skipped");
            }
        }

        Command::Links { overrides } => {
            let fetched = match overrides {
                Some(path) => {
                    let links = LinkRecord::load_all(&path)?;
                    log::info!("Loaded {} override link(s)", links.len());
                    Some(links)
                }
                None => None,
            };

            let merged = view::merge_link_catalogs(&config.links, fetched.as_deref());
            for link in &merged {
                println!("{:>3}  {:<12} {}", link.order, link.slug, link.url);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} default links, fallback locale '{}')",
                config.links.len(),
                config.locale.fallback
            );
        }
    }

    Ok(())
}
