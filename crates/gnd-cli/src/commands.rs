//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use gnd_core::{LoadReport, load};
use gnd_index::{IndexConfig, JsonLinesIndex, MemoryIndex};
use gnd_map::default_registry;

use crate::cli::LoadArgs;
use crate::summary::apply_table_style;

/// What one `load` invocation produced, for the summary printer.
pub struct LoadOutcome {
    pub file: PathBuf,
    /// Document target; `None` for dry runs.
    pub target: Option<PathBuf>,
    pub report: LoadReport,
}

pub fn run_load(args: &LoadArgs) -> Result<LoadOutcome> {
    if args.dry_run {
        debug!(file = %args.file.display(), "dry run, documents are discarded");
        let index = MemoryIndex::new();
        let report = load(&args.file, &index)?;
        return Ok(LoadOutcome {
            file: args.file.clone(),
            target: None,
            report,
        });
    }

    let target = args
        .out
        .clone()
        .unwrap_or_else(|| args.file.with_extension("jsonl"));
    let config = IndexConfig {
        queue_size: args.queue_size,
        ..IndexConfig::default()
    };
    let index = JsonLinesIndex::with_config(&target, &config)
        .with_context(|| format!("open document target {}", target.display()))?;
    let report = load(&args.file, &index)?;
    Ok(LoadOutcome {
        file: args.file.clone(),
        target: Some(target),
        report,
    })
}

pub fn run_tags() -> Result<()> {
    let registry = default_registry();
    let mut tags: Vec<&str> = registry.tags().collect();
    tags.sort_unstable();

    let mut table = Table::new();
    table.set_header(vec!["Tag", "Rule"]);
    apply_table_style(&mut table);
    for tag in tags {
        if let Some(handler) = registry.get(tag) {
            table.add_row(vec![tag, handler.description()]);
        }
    }
    println!("{table}");
    Ok(())
}
