//! Console output for analytics results.
//!
//! Every `render_*` function returns the text so it can be tested; the
//! `print_*` wrappers write it to stdout.

use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;
use std::fmt::Write;

use crate::graph::ClientGraph;
use crate::types::{AnalyticsReport, Client, ClientId, RankEntry, SalesPoint};
use crate::validation::ValidationReport;

const RULE_WIDTH: usize = 60;

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH).dimmed());
    let _ = writeln!(out, " {}", title.bold());
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH).dimmed());
}

#[must_use]
pub fn render_ranking(title: &str, unit: &str, entries: &[RankEntry]) -> String {
    let mut out = String::new();
    header(&mut out, title);

    if entries.is_empty() {
        let _ = writeln!(out, "  {}", "no data".dimmed());
        return out;
    }

    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<width$}  {} {unit}",
            i + 1,
            entry.name,
            entry.count.to_string().cyan().bold(),
        );
    }
    out
}

#[must_use]
pub fn render_sales(series: &[SalesPoint]) -> String {
    let mut out = String::new();
    header(&mut out, "SALES BY DATE");

    if series.is_empty() {
        let _ = writeln!(out, "  {}", "no orders".dimmed());
        return out;
    }

    for point in series {
        let _ = writeln!(out, "  {}  {}", point.date, format!("{:>12.2}", point.total).green());
    }
    let total: f64 = series.iter().map(|p| p.total).sum();
    let _ = writeln!(out, "  {}", "─".repeat(RULE_WIDTH - 4).dimmed());
    let _ = writeln!(out, "  {} {}", "Total:".white(), format!("{total:.2}").green().bold());
    out
}

#[must_use]
pub fn render_graph(graph: &ClientGraph, clients: &[Client], min_hub_degree: Option<usize>) -> String {
    let names: HashMap<ClientId, &str> = clients.iter().map(|c| (c.id, c.name.as_str())).collect();
    let label = |id: ClientId| match names.get(&id) {
        Some(name) => format!("{name} (#{id})"),
        None => format!("#{id}"),
    };

    let mut out = String::new();
    header(&mut out, "CLIENT CO-PURCHASE GRAPH");

    let components = graph.components();
    let isolated = components.iter().filter(|c| c.len() == 1).count();
    let _ = writeln!(out, "  {} {}", "Clients:".white(), graph.node_count());
    let _ = writeln!(out, "  {} {}", "Links:".white(), graph.edge_count());
    let _ = writeln!(
        out,
        "  {} {} ({} isolated)",
        "Groups:".white(),
        components.len(),
        isolated
    );

    if graph.edge_count() > 0 {
        let _ = writeln!(out);
        for (a, b) in graph.edges() {
            let _ = writeln!(out, "  {} {} {}", label(a), "—".blue(), label(b));
        }
    }

    if let Some(min) = min_hub_degree {
        let hubs = graph.hubs(min);
        let _ = writeln!(out);
        let _ = writeln!(out, "  {} (degree ≥ {min})", "Hubs".yellow().bold());
        if hubs.is_empty() {
            let _ = writeln!(out, "    {}", "none".dimmed());
        }
        for (id, degree) in hubs {
            let _ = writeln!(out, "    {}  {}", label(id), degree.to_string().cyan());
        }
    }
    out
}

#[must_use]
pub fn render_validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    header(&mut out, "SNAPSHOT VALIDATION");

    for issue in &report.issues {
        let _ = writeln!(out, "  {} {issue}", "error:".red().bold());
    }
    for dangling in &report.dangling {
        let _ = writeln!(out, "  {} {dangling}", "warn:".yellow());
    }

    let status = if report.is_clean() && report.dangling.is_empty() {
        "all records valid".green().to_string()
    } else {
        format!(
            "{} invalid field(s), {} dangling reference(s)",
            report.issues.len().to_string().red(),
            report.dangling.len().to_string().yellow()
        )
    };
    let _ = writeln!(out, "  {} {status}", "Status:".white());
    out
}

pub fn print_report(report: &AnalyticsReport, clients: &[Client]) {
    print!("{}", render_ranking("TOP CLIENTS", "orders", &report.top_clients));
    println!();
    print!("{}", render_ranking("TOP PRODUCTS", "sold", &report.top_products));
    println!();
    print!("{}", render_sales(&report.sales));
    println!();
    print!("{}", render_graph(&report.graph, clients, None));
}

/// Prints data as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
