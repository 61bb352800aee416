//! `graphlab sample` - list or print the built-in graphs

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::finish;
use graphlab_core::error::Result;
use graphlab_core::graph::{samples, Graph};
use graphlab_core::records::{
    escape_quotes, format_data_line, format_edge_record, format_header, format_id,
};

fn list(format: OutputFormat) -> Result<String> {
    let entries: Vec<(&str, &str)> = samples::names()
        .iter()
        .map(|name| (*name, samples::describe(name).unwrap_or_default()))
        .collect();

    let text = match format {
        OutputFormat::Json => {
            let value: Vec<_> = entries
                .iter()
                .map(|(name, description)| json!({ "name": name, "description": description }))
                .collect();
            format!("{}\n", serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Human => {
            let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            finish(
                entries
                    .iter()
                    .map(|(name, description)| format!("{:width$}  {}", name, description))
                    .collect(),
            )
        }
        OutputFormat::Records => {
            let mut lines = vec![format_header(
                "sample",
                &[("samples", entries.len().to_string())],
            )];
            for (name, description) in &entries {
                lines.push(format_data_line(
                    "sample",
                    &format!("{} \"{}\"", name, escape_quotes(description)),
                ));
            }
            finish(lines)
        }
    };
    Ok(text)
}

fn graph_records(name: &str, graph: &Graph) -> String {
    let mut lines = vec![format_header(
        "sample",
        &[
            ("name", name.to_string()),
            ("nodes", graph.node_count().to_string()),
            ("edges", graph.edge_count().to_string()),
            ("oriented", graph.is_oriented().to_string()),
        ],
    )];
    lines.extend(
        graph
            .nodes()
            .iter()
            .map(|node| format_data_line("node", &format_id(node))),
    );
    lines.extend(graph.edges().iter().map(format_edge_record));
    finish(lines)
}

fn show(format: OutputFormat, name: &str) -> Result<String> {
    let graph = samples::get(name)?;
    match format {
        // Printed as JSON in human mode too, so it can be piped back into
        // any subcommand
        OutputFormat::Human | OutputFormat::Json => {
            Ok(format!("{}\n", serde_json::to_string_pretty(&graph)?))
        }
        OutputFormat::Records => Ok(graph_records(name, &graph)),
    }
}

pub fn handle(ctx: &CommandContext, name: Option<&str>) -> Result<()> {
    let text = match name {
        Some(name) => show(ctx.format(), name)?,
        None => list(ctx.format())?,
    };
    ctx.emit(&text);
    Ok(())
}
