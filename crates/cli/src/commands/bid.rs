use std::path::PathBuf;

use bidmatch_core::config::{AppConfig, LoadOptions};
use bidmatch_core::engine::{parse_bid_request, parse_catalog, parse_test_costs};
use bidmatch_core::errors::InterfaceError;
use bidmatch_core::{BidSummary, SpecMatchPricer};
use chrono::Utc;
use clap::Args;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::evaluate::{io_failure, read_document};
use super::CommandResult;

#[derive(Debug, Args)]
pub struct BidArgs {
    #[arg(long, help = "Path to the multi-material bid request JSON document")]
    pub request: PathBuf,
    #[arg(long, help = "Path to the product catalog JSON document")]
    pub catalog: PathBuf,
    #[arg(long = "test-costs", help = "Path to the test cost table JSON document")]
    pub test_costs: PathBuf,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &BidArgs) -> CommandResult {
    let correlation_id = Uuid::new_v4().to_string();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            let interface =
                InterfaceError::from(error).with_correlation_id(correlation_id.clone());
            return CommandResult::failure(
                "bid",
                &correlation_id,
                "config_validation",
                interface.to_string(),
                2,
            );
        }
    };

    let request_doc = match read_document(&args.request) {
        Ok(doc) => doc,
        Err(error) => return io_failure("bid", &correlation_id, &error),
    };
    let catalog_doc = match read_document(&args.catalog) {
        Ok(doc) => doc,
        Err(error) => return io_failure("bid", &correlation_id, &error),
    };
    let test_costs_doc = match read_document(&args.test_costs) {
        Ok(doc) => doc,
        Err(error) => return io_failure("bid", &correlation_id, &error),
    };

    let pricer = SpecMatchPricer::with_weights(config.weights);
    let evaluation = parse_bid_request(&request_doc).and_then(|request| {
        let catalog = parse_catalog(&catalog_doc)?;
        let test_costs = parse_test_costs(&test_costs_doc)?;
        pricer.evaluate_bid(&request, &catalog, &test_costs)
    });

    match evaluation {
        Ok(summary) => {
            info!(
                line_count = summary.lines.len(),
                total_bid_price = %summary.total_bid_price,
                correlation_id = %correlation_id,
                "bid request priced"
            );
            render(&summary, args.json, &correlation_id)
        }
        Err(error) => {
            let error_class = error.kind();
            let interface = error.into_interface(correlation_id.clone());
            CommandResult::failure("bid", &correlation_id, error_class, interface.to_string(), 1)
        }
    }
}

fn render(summary: &BidSummary, as_json: bool, correlation_id: &str) -> CommandResult {
    if as_json {
        let payload = json!({
            "command": "bid",
            "status": "ok",
            "correlation_id": correlation_id,
            "generated_at": Utc::now().to_rfc3339(),
            "result": summary,
        });
        return CommandResult::rendered(payload.to_string());
    }

    let mut lines: Vec<String> = summary
        .lines
        .iter()
        .map(|line| {
            format!(
                "line {}: {} (match {:.2}%, final price {})",
                line.label, line.result.best_sku, line.result.match_percentage,
                line.result.final_price
            )
        })
        .collect();
    lines.push(format!("total bid price: {}", summary.total_bid_price));

    CommandResult::rendered(lines.join("\n"))
}
