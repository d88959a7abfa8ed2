//! Tree command implementation
//!
//! Builds a small binomial lattice and prints its terminal layer.

use pricer_core::traits::PricingModel;
use pricer_models::lattice::LatticeNode;
use pricer_models::BinomialTreePricer;
use serde::Serialize;
use tracing::info;

use super::OutputFormat;
use crate::config::PricingConfig;
use crate::{CliError, Result};

/// Largest tree the command will print
pub const MAX_PRINTED_POINTS: usize = 50;

/// Terminal node of the lattice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalNode {
    pub up_moves: usize,
    #[serde(flatten)]
    pub node: LatticeNode,
}

/// Printed lattice summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    pub n_time_points: usize,
    pub price: f64,
    pub terminal: Vec<TerminalNode>,
}

/// Build the lattice and collect its terminal layer
pub fn build_report(config: &PricingConfig, points: usize) -> Result<TreeReport> {
    if points > MAX_PRINTED_POINTS {
        return Err(CliError::InvalidArgument(format!(
            "--points {} is too large to print (max {})",
            points, MAX_PRINTED_POINTS
        )));
    }

    let tree = BinomialTreePricer::new(config.market(), config.contract(), points)?;
    let last = points - 1;
    let terminal = tree
        .lattice()
        .layer(last)
        .enumerate()
        .map(|(i, node)| TerminalNode {
            up_moves: i,
            node: *node,
        })
        .collect();

    Ok(TreeReport {
        n_time_points: points,
        price: tree.price(),
        terminal,
    })
}

/// Run the tree command
pub fn run(config: &PricingConfig, points: usize, format: OutputFormat) -> Result<()> {
    info!("Building {}-point lattice", points);
    let report = build_report(config, points)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("┌──────┬──────────────┬──────────────┐");
            println!("│ Ups  │ Underlying   │ Payoff       │");
            println!("├──────┼──────────────┼──────────────┤");
            for terminal in report.terminal.iter().rev() {
                println!(
                    "│ {:>4} │ {:>12.6} │ {:>12.6} │",
                    terminal.up_moves, terminal.node.underlying, terminal.node.payoff
                );
            }
            println!("└──────┴──────────────┴──────────────┘");
            println!("Root price: {:.10}", report.price);
        }
    }

    Ok(())
}
