// src/cli/handlers.rs
//! Command handlers: load a snapshot, run one analysis, render it.

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::args::GlobalArgs;
use crate::analysis::{AnalysisOptions, Analyzer, ReferencePolicy};
use crate::config::Config;
use crate::exit::StoreExit;
use crate::reporting;
use crate::snapshot::{Snapshot, SnapshotFormat};
use crate::types::{ClientId, OrderId, ProductId};
use crate::validation::Validator;

/// Settings resolved from the config file and command-line flags.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub options: AnalysisOptions,
    pub data_dir: PathBuf,
    pub format: SnapshotFormat,
    pub json: bool,
    pub validate: bool,
}

impl Context {
    /// Flags override config values.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded.
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let mut options = config.analysis.to_options();
        if args.strict {
            options.dangling = ReferencePolicy::Fail;
        }

        Ok(Self {
            data_dir: args
                .data
                .clone()
                .unwrap_or_else(|| config.snapshot.dir.clone()),
            format: args.data_format.unwrap_or(config.snapshot.format),
            validate: config.snapshot.validate && !args.no_validate,
            json: args.json,
            options,
            config,
        })
    }

    #[must_use]
    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.analysis.top_n)
    }

    /// Reads the snapshot directory as-is.
    ///
    /// # Errors
    /// Returns error if the directory or one of its files is unreadable.
    pub fn read_snapshot(&self) -> Result<Snapshot> {
        let store = self.format.open(&self.data_dir)?;
        Snapshot::load(store.as_ref()).with_context(|| {
            format!("loading {} snapshot from {}", self.format, self.data_dir.display())
        })
    }

    /// Reads the snapshot directory, validating fields when enabled.
    ///
    /// # Errors
    /// Returns error if the directory is unreadable or validation fails.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let snapshot = self.read_snapshot()?;

        if self.validate {
            let report = Validator::new()?.validate(&snapshot);
            for dangling in &report.dangling {
                tracing::debug!("{dangling}");
            }
            report.into_result()?;
        }
        Ok(snapshot)
    }
}

pub fn handle_top_clients(ctx: &Context, limit: Option<usize>) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let ranked = Analyzer::new(&snapshot, ctx.options)?.top_clients(ctx.limit(limit))?;

    if ctx.json {
        reporting::print_json(&ranked)?;
    } else {
        print!("{}", reporting::render_ranking("TOP CLIENTS", "orders", &ranked));
    }
    Ok(StoreExit::Success)
}

pub fn handle_top_products(ctx: &Context, limit: Option<usize>) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let ranked = Analyzer::new(&snapshot, ctx.options)?.top_products(ctx.limit(limit))?;

    if ctx.json {
        reporting::print_json(&ranked)?;
    } else {
        print!("{}", reporting::render_ranking("TOP PRODUCTS", "sold", &ranked));
    }
    Ok(StoreExit::Success)
}

pub fn handle_sales(ctx: &Context) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let series = Analyzer::new(&snapshot, ctx.options)?.sales_dynamics();

    if ctx.json {
        reporting::print_json(&series)?;
    } else {
        print!("{}", reporting::render_sales(&series));
    }
    Ok(StoreExit::Success)
}

pub fn handle_graph(ctx: &Context, hubs: Option<usize>) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let graph = Analyzer::new(&snapshot, ctx.options)?.client_graph()?;

    if ctx.json {
        reporting::print_json(&graph)?;
    } else {
        print!("{}", reporting::render_graph(&graph, &snapshot.clients, hubs));
    }
    Ok(StoreExit::Success)
}

pub fn handle_report(ctx: &Context, limit: Option<usize>) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let report = Analyzer::new(&snapshot, ctx.options)?.report(ctx.limit(limit))?;

    if ctx.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report, &snapshot.clients);
    }
    Ok(StoreExit::Success)
}

/// Reports every field issue and dangling reference instead of stopping at the first.
pub fn handle_validate(ctx: &Context) -> Result<StoreExit> {
    let snapshot = ctx.read_snapshot()?;
    let report = Validator::new()?.validate(&snapshot);

    if ctx.json {
        reporting::print_json(&report)?;
    } else {
        print!("{}", reporting::render_validation(&report));
    }

    Ok(if !report.is_clean() {
        StoreExit::ValidationFailed
    } else if !report.dangling.is_empty() && ctx.options.dangling == ReferencePolicy::Fail {
        StoreExit::DanglingReference
    } else {
        StoreExit::Success
    })
}

pub fn handle_export(
    ctx: &Context,
    out: &Path,
    format: Option<SnapshotFormat>,
) -> Result<StoreExit> {
    let snapshot = ctx.load_snapshot()?;
    let format = format.unwrap_or(ctx.format);
    format.export(out, &snapshot)?;

    if ctx.json {
        reporting::print_json(&serde_json::json!({
            "dir": out,
            "format": format,
            "clients": snapshot.clients.len(),
            "products": snapshot.products.len(),
            "orders": snapshot.orders.len(),
        }))?;
    } else {
        println!(
            "{} {} clients, {} products, {} orders -> {} ({format})",
            "Exported".green().bold(),
            snapshot.clients.len(),
            snapshot.products.len(),
            snapshot.orders.len(),
            out.display()
        );
    }
    Ok(StoreExit::Success)
}

/// Prices a new order from the catalog and writes the snapshot back in place.
pub fn handle_add_order(
    ctx: &Context,
    id: Option<OrderId>,
    client_id: ClientId,
    product_ids: Vec<ProductId>,
    date: &str,
) -> Result<StoreExit> {
    let mut snapshot = ctx.load_snapshot()?;
    let order = snapshot.place_order(id, client_id, product_ids, date)?.clone();
    ctx.format.export(&ctx.data_dir, &snapshot)?;

    if ctx.json {
        reporting::print_json(&order)?;
    } else {
        println!(
            "{} order {} for client {} on {}: {:.2}",
            "Added".green().bold(),
            order.id,
            order.client_id,
            order.date,
            order.total
        );
    }
    Ok(StoreExit::Success)
}
