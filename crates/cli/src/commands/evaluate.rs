use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bidmatch_core::config::{AppConfig, LoadOptions};
use bidmatch_core::engine::{parse_catalog, parse_requirement, parse_test_costs};
use bidmatch_core::errors::InterfaceError;
use bidmatch_core::{MatchResult, SpecMatchPricer};
use chrono::Utc;
use clap::Args;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    #[arg(long, help = "Path to the RFP requirement JSON document")]
    pub requirement: PathBuf,
    #[arg(long, help = "Path to the product catalog JSON document")]
    pub catalog: PathBuf,
    #[arg(long = "test-costs", help = "Path to the test cost table JSON document")]
    pub test_costs: PathBuf,
    #[arg(
        long = "required-test",
        value_name = "NAME",
        help = "Required test name; repeat for multiple tests"
    )]
    pub required_tests: Vec<String>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &EvaluateArgs) -> CommandResult {
    let correlation_id = Uuid::new_v4().to_string();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            let interface =
                InterfaceError::from(error).with_correlation_id(correlation_id.clone());
            return CommandResult::failure(
                "evaluate",
                &correlation_id,
                "config_validation",
                interface.to_string(),
                2,
            );
        }
    };

    let requirement_doc = match read_document(&args.requirement) {
        Ok(doc) => doc,
        Err(error) => return io_failure("evaluate", &correlation_id, &error),
    };
    let catalog_doc = match read_document(&args.catalog) {
        Ok(doc) => doc,
        Err(error) => return io_failure("evaluate", &correlation_id, &error),
    };
    let test_costs_doc = match read_document(&args.test_costs) {
        Ok(doc) => doc,
        Err(error) => return io_failure("evaluate", &correlation_id, &error),
    };

    let pricer = SpecMatchPricer::with_weights(config.weights);
    let evaluation = parse_requirement(&requirement_doc).and_then(|requirement| {
        let catalog = parse_catalog(&catalog_doc)?;
        let test_costs = parse_test_costs(&test_costs_doc)?;
        debug!(
            catalog_entries = catalog.len(),
            test_cost_rows = test_costs.len(),
            correlation_id = %correlation_id,
            "bid inputs parsed"
        );
        pricer.evaluate(&requirement, &catalog, &test_costs, &args.required_tests)
    });

    match evaluation {
        Ok(result) => {
            info!(
                best_sku = %result.best_sku,
                final_price = %result.final_price,
                correlation_id = %correlation_id,
                "bid evaluation completed"
            );
            render(&result, args.json, &correlation_id)
        }
        Err(error) => {
            let error_class = error.kind();
            let interface = error.into_interface(correlation_id.clone());
            CommandResult::failure(
                "evaluate",
                &correlation_id,
                error_class,
                interface.to_string(),
                1,
            )
        }
    }
}

pub(crate) fn read_document(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("could not read `{}`", path.display()))
}

pub(crate) fn io_failure(
    command: &str,
    correlation_id: &str,
    error: &anyhow::Error,
) -> CommandResult {
    CommandResult::failure(command, correlation_id, "io", format!("{error:#}"), 2)
}

fn render(result: &MatchResult, as_json: bool, correlation_id: &str) -> CommandResult {
    if as_json {
        let payload = json!({
            "command": "evaluate",
            "status": "ok",
            "correlation_id": correlation_id,
            "generated_at": Utc::now().to_rfc3339(),
            "result": result,
        });
        return CommandResult::rendered(payload.to_string());
    }

    CommandResult::rendered(
        [
            format!("best sku: {}", result.best_sku),
            format!("match: {:.2}%", result.match_percentage),
            format!("material cost: {}", result.material_cost),
            format!("total test cost: {}", result.total_test_cost),
            format!("final bid price: {}", result.final_price),
        ]
        .join("\n"),
    )
}
