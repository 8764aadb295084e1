use regionpath_core::{InstrumentedRun, NodeId};

use crate::app::Report;
use crate::colors::ColorScheme;
use crate::utils::{format_bytes, format_cost, format_number, format_path};

pub fn display_search_info(report: &Report, colors: &ColorScheme) {
    println!(
        "\nCalculating path from Node {} (Sq: {}) to Node {} (Sq: {})...\n",
        colors.node(&report.start.to_string()),
        report.start_region,
        colors.node(&report.goal.to_string()),
        report.goal_region
    );
}

pub fn display_report(report: &Report, colors: &ColorScheme, quiet: bool) {
    if !quiet {
        display_search_info(report, colors);
    }

    for line in format_table(&report.runs, colors) {
        println!("{line}");
    }

    if quiet {
        return;
    }

    println!();
    for line in format_paths(&report.runs, colors) {
        println!("{line}");
    }

    match report.costs_agree {
        Some(true) => println!("{}", colors.success("✅ Dijkstra and A* agree on the cost")),
        Some(false) => println!("{}", colors.error("❌ Dijkstra and A* disagree on the cost")),
        None => {}
    }
}

pub fn format_table(runs: &[InstrumentedRun], colors: &ColorScheme) -> Vec<String> {
    let header = format!(
        "{:<15} | {:<10} | {:<15} | {:<10} | {:<10} | {}",
        "Algorithm", "Cost", "Nodes Expanded", "Path Found", "Time (ms)", "Peak Memory"
    );

    let mut lines = vec![colors.header(&header).to_string()];
    for run in runs {
        let found = if run.result.found() {
            colors.success(&format!("{:<10}", "Yes"))
        } else {
            colors.unavailable(&format!("{:<10}", "No"))
        };
        let cost = format!("{:<10}", format_cost(run.result.cost()));
        let cost = match run.result.cost() {
            Some(_) => colors.number(&cost),
            None => colors.unavailable(&cost),
        };
        let memory = format_bytes(run.metrics.peak_memory_bytes);
        let memory = match run.metrics.peak_memory_bytes {
            Some(_) => colors.stats(&memory),
            None => colors.unavailable(&memory),
        };

        lines.push(format!(
            "{} | {} | {} | {} | {} | {}",
            colors.algorithm(&format!("{:<15}", run.algorithm.label())),
            cost,
            colors.number(&format!("{:<15}", format_number(run.result.nodes_expanded))),
            found,
            colors.number(&format!("{:<10.3}", run.metrics.elapsed_ms())),
            memory
        ));
    }
    lines
}

/// Every found path, skipping repeats of one already listed
pub fn format_paths(runs: &[InstrumentedRun], colors: &ColorScheme) -> Vec<String> {
    let mut shown: Vec<&[NodeId]> = Vec::new();
    let mut lines = Vec::new();

    for run in runs {
        let Some(nodes) = run.result.nodes() else {
            continue;
        };
        if shown.contains(&nodes) {
            continue;
        }
        shown.push(nodes);

        lines.push(format!(
            "{} {}",
            colors.stats(&format!("Path ({}):", run.algorithm.label())),
            format_path(nodes)
        ));
    }

    if lines.is_empty() {
        lines.push(colors.error("❌ No path found").to_string());
    }
    lines
}
