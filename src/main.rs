use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use a11y_triage::guidelines::{self, Guideline};
use a11y_triage::heap::IndexedMinHeap;
use a11y_triage::utils::human_duration;

mod cli;

/// Ranks accessibility guidelines by urgency.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Guidelines file with one "<id> <description>" per line.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Only print the first N guidelines of the ranking.
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,

    /// Guideline ids (e.g. "1.4.3") to move to the front of the ranking.
    #[arg(short, long, value_name = "ID")]
    promote: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    cli::init_logging();
    let args = Args::parse();

    let start = Instant::now();
    let guidelines = guidelines::load_guidelines(&args.path)?;
    info!("Loaded {} guidelines from {:?}", guidelines.len(), args.path);

    // Queue every guideline keyed and prioritized by its compact id, so the
    // ranking follows the guideline numbering unless ids get promoted.
    let mut heap = IndexedMinHeap::with_capacity(guidelines.len());
    let mut by_key: HashMap<u32, &Guideline> = HashMap::with_capacity(guidelines.len());
    for guideline in &guidelines {
        heap.add(guideline.key, guideline.key)
            .map_err(|_| format!("Duplicate guideline id {:?} in {:?}", guideline.id, args.path))?;
        by_key.insert(guideline.key, guideline);
    }

    if !args.promote.is_empty() {
        info!("Promoting: {}", args.promote.iter().join(", "));
    }
    for id in &args.promote {
        let Some(key) = guidelines::compact_key(id) else {
            warn!("Ignoring invalid guideline id {:?}", id);
            continue;
        };
        if heap.contains(&key) {
            heap.change_priority(&key, 0)?;
        } else {
            warn!("Cannot promote unknown guideline {:?}", id);
        }
    }

    if let Ok(next) = heap.peek() {
        if let Some(&g) = by_key.get(next) {
            info!("Most urgent guideline: {} {}", g.id, g.description);
        }
    }

    let limit = args.top.unwrap_or(heap.len());
    let mut ranked: Vec<&Guideline> = Vec::with_capacity(limit.min(heap.len()));
    while ranked.len() < limit {
        let Ok(key) = heap.poll() else {
            break;
        };
        if let Some(&g) = by_key.get(&key) {
            ranked.push(g);
        }
    }

    println!("{}", cli::render_ranking(&ranked));
    info!(
        "Ranked {} of {} guidelines in {}",
        ranked.len(),
        guidelines.len(),
        human_duration(start.elapsed())
    );

    Ok(())
}
