//! Price command implementation
//!
//! Prices the configured option with one or all models and reports price,
//! delta and compute time side by side.

use clap::ValueEnum;
use pricer_core::traits::PricingModel;
use pricer_models::{BinomialTreePricer, BlackScholesPricer};
use pricer_pricing::MonteCarloPricer;
use serde::Serialize;
use tracing::info;

use super::OutputFormat;
use crate::config::PricingConfig;
use crate::Result;

/// Pricing model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// Black-Scholes-Merton closed form
    ClosedForm,
    /// Binomial lattice
    Lattice,
    /// Monte Carlo simulation
    MonteCarlo,
    /// Every model
    All,
}

/// One line of the price report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub model: &'static str,
    pub price: f64,
    pub delta: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    pub compute_time_ms: f64,
}

fn row<M: PricingModel>(model_name: &'static str, model: &M, shift: f64) -> Result<PriceRow> {
    Ok(PriceRow {
        model: model_name,
        price: model.price(),
        delta: model.delta(shift)?,
        std_error: None,
        compute_time_ms: model.compute_time_ms(),
    })
}

/// Price with the selected models
pub fn collect_rows(config: &PricingConfig, model: ModelChoice) -> Result<Vec<PriceRow>> {
    let market = config.market();
    let contract = config.contract();
    let shift = config.delta_shift;
    let mut rows = Vec::new();

    if matches!(model, ModelChoice::ClosedForm | ModelChoice::All) {
        let bs = BlackScholesPricer::new(market, contract, config.monte_carlo.quantity)?;
        rows.push(row("closed-form", &bs, shift)?);
    }
    if matches!(model, ModelChoice::Lattice | ModelChoice::All) {
        let tree = BinomialTreePricer::new(market, contract, config.lattice.n_time_points)?;
        rows.push(row("lattice", &tree, shift)?);
    }
    if matches!(model, ModelChoice::MonteCarlo | ModelChoice::All) {
        let mc = MonteCarloPricer::new(market, contract, config.monte_carlo_config()?)?;
        let mut mc_row = row("monte-carlo", &mc, shift)?;
        mc_row.std_error = Some(mc.std_error());
        rows.push(mc_row);
    }

    Ok(rows)
}

/// Render rows as a table
pub fn render_table(rows: &[PriceRow]) -> String {
    let mut out = String::new();
    out.push_str("┌─────────────┬────────────┬────────────┬────────────┬────────────┐\n");
    out.push_str("│ Model       │ Price      │ Delta      │ Std Error  │ Time (ms)  │\n");
    out.push_str("├─────────────┼────────────┼────────────┼────────────┼────────────┤\n");
    for r in rows {
        let std_error = r
            .std_error
            .map(|se| format!("{:>10.6}", se))
            .unwrap_or_else(|| format!("{:>10}", "-"));
        out.push_str(&format!(
            "│ {:<11} │ {:>10.6} │ {:>10.6} │ {} │ {:>10.3} │\n",
            r.model, r.price, r.delta, std_error, r.compute_time_ms
        ));
    }
    out.push_str("└─────────────┴────────────┴────────────┴────────────┴────────────┘");
    out
}

/// Run the price command
pub fn run(config: &PricingConfig, model: ModelChoice, format: OutputFormat) -> Result<()> {
    info!("Starting pricing...");
    info!("  Model: {:?}", model);
    info!("  Contract: {:?}", config.contract());
    info!("  Market: {:?}", config.market());

    let rows = collect_rows(config, model)?;

    match format {
        OutputFormat::Table => println!("{}", render_table(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_config() -> PricingConfig {
        let mut config = PricingConfig::default();
        config.lattice.n_time_points = 200;
        config.monte_carlo.n_scenarios = 2_000;
        config.monte_carlo.n_steps = 4;
        config
    }

    #[test]
    fn test_all_models() {
        let rows = collect_rows(&small_config(), ModelChoice::All).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.model).collect();
        assert_eq!(names, vec!["closed-form", "lattice", "monte-carlo"]);
        assert_relative_eq!(rows[0].price, 10.450583572185565, epsilon = 1e-9);
        assert!(rows[0].std_error.is_none());
        assert!(rows[2].std_error.is_some());
        assert_relative_eq!(rows[1].price, rows[0].price, max_relative = 0.01);
    }

    #[test]
    fn test_single_model() {
        let rows = collect_rows(&small_config(), ModelChoice::Lattice).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].model, "lattice");
    }

    #[test]
    fn test_zero_delta_shift_is_reported() {
        let mut config = small_config();
        config.delta_shift = 0.0;
        assert!(collect_rows(&config, ModelChoice::ClosedForm).is_ok());
        assert!(collect_rows(&config, ModelChoice::Lattice).is_err());
    }

    #[test]
    fn test_render_table() {
        let rows = vec![PriceRow {
            model: "closed-form",
            price: 10.45,
            delta: 0.637,
            std_error: None,
            compute_time_ms: 0.01,
        }];
        let table = render_table(&rows);
        assert!(table.contains("closed-form"));
        assert!(table.contains("10.450000"));
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn test_json_skips_missing_std_error() {
        let rows = collect_rows(&small_config(), ModelChoice::ClosedForm).unwrap();
        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains("\"model\":\"closed-form\""));
        assert!(!json.contains("std_error"));
    }
}
