use anyhow::{anyhow, bail, Result};
use indexer_core::actions::cancel_actions;
use indexer_core::client::IndexerManagementClient;
use indexer_core::models::Action;
use indexer_core::network::resolve_chain_alias;

use crate::cli::CancelCommand;
use crate::config::Config;
use crate::spinner::{fail, spinner, succeed};
use crate::views::output::{print_records, OutputFormat};

/// Column projection for canceled actions, in display order.
const ACTION_COLUMNS: &[&str] = &[
    "id",
    "protocolNetwork",
    "type",
    "deploymentID",
    "allocationID",
    "amount",
    "poi",
    "force",
    "priority",
    "status",
    "source",
    "reason",
];

const USAGE: &str = "\
Usage: graph-indexer actions cancel [OPTIONS] [ACTION_IDS]...

Arguments:
  [ACTION_IDS]...  The ids of the queued actions to cancel

Options:
  -o, --output <OUTPUT>  Choose the output format: table (default), JSON, or YAML
  -h, --help             Show usage information";

#[derive(Debug, PartialEq)]
struct ValidatedInputs {
    format: OutputFormat,
    action_ids: Vec<i64>,
}

pub async fn run(command: CancelCommand) -> Result<()> {
    let input_spinner = spinner("Processing inputs");
    let inputs = match validate_inputs(&command) {
        Ok(inputs) => {
            succeed(input_spinner, "Processed input parameters");
            inputs
        }
        Err(err) => {
            fail(input_spinner, "Failed to process input parameters");
            eprintln!("\n{USAGE}\n");
            return Err(err);
        }
    };

    let action_spinner = spinner(format!("Cancelling {} actions", inputs.action_ids.len()));
    let canceled = match execute(&inputs.action_ids).await {
        Ok(canceled) => {
            succeed(action_spinner, "Actions canceled");
            canceled
        }
        Err(err) => {
            fail(action_spinner, "Failed to cancel actions");
            return Err(err);
        }
    };

    // Display human-friendly chain aliases instead of CAIP2 ids.
    let canceled: Vec<Action> = canceled.into_iter().map(with_chain_alias).collect();

    print_records(inputs.format, &canceled, ACTION_COLUMNS)?;

    Ok(())
}

fn validate_inputs(command: &CancelCommand) -> Result<ValidatedInputs> {
    let format: OutputFormat = command
        .output
        .parse()
        .map_err(|message: String| anyhow!(message))?;

    if command.action_ids.is_empty() {
        bail!("Missing required argument: 'actionID'");
    }

    let action_ids = command
        .action_ids
        .iter()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| anyhow!("Invalid action id '{}', expected a number", raw))
        })
        .collect::<Result<Vec<i64>>>()?;

    Ok(ValidatedInputs { format, action_ids })
}

/// Config load, client construction, and the cancellation call.
///
/// A successful return means the cancellations already took effect on the
/// server; anything that fails afterwards (alias rewrite, rendering) still
/// exits non-zero without undoing them.
async fn execute(action_ids: &[i64]) -> Result<Vec<Action>> {
    let config = Config::load()?;
    let client = IndexerManagementClient::new(&config.api)?;
    let canceled = cancel_actions(&client, action_ids).await?;
    Ok(canceled)
}

fn with_chain_alias(action: Action) -> Action {
    Action {
        protocol_network: resolve_chain_alias(&action.protocol_network),
        ..action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexer_core::models::{ActionStatus, ActionType};
    use rstest::rstest;

    fn command(output: &str, ids: &[&str]) -> CancelCommand {
        CancelCommand {
            action_ids: ids.iter().map(|s| s.to_string()).collect(),
            output: output.to_string(),
        }
    }

    #[test]
    fn accepts_numeric_ids_in_order() {
        let inputs = validate_inputs(&command("table", &["3", "7"])).unwrap();
        assert_eq!(inputs.action_ids, vec![3, 7]);
        assert_eq!(inputs.format, OutputFormat::Table);
    }

    #[rstest]
    #[case("table", OutputFormat::Table)]
    #[case("json", OutputFormat::Json)]
    #[case("yaml", OutputFormat::Yaml)]
    fn accepts_each_allowed_format(#[case] raw: &str, #[case] expected: OutputFormat) {
        let inputs = validate_inputs(&command(raw, &["1"])).unwrap();
        assert_eq!(inputs.format, expected);
    }

    #[rstest]
    #[case("xml")]
    #[case("TABLE")]
    #[case("Json")]
    fn rejects_unknown_formats(#[case] raw: &str) {
        let err = validate_inputs(&command(raw, &["1"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid output format"));
        assert!(message.contains(raw));
        assert!(message.contains("['json', 'yaml', 'table']"));
    }

    #[test]
    fn rejects_empty_id_list() {
        let err = validate_inputs(&command("table", &[])).unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: 'actionID'");
    }

    #[test]
    fn format_is_checked_before_the_id_list() {
        let err = validate_inputs(&command("xml", &[])).unwrap_err();
        assert!(err.to_string().contains("Invalid output format"));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = validate_inputs(&command("table", &["3", "abc"])).unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn alias_rewrite_preserves_every_other_field() {
        let action = Action {
            id: 1,
            protocol_network: "eip155:1".to_string(),
            action_type: ActionType::Unallocate,
            deployment_id: Some("QmXyZ".to_string()),
            allocation_id: Some("0xabc".to_string()),
            amount: None,
            poi: Some("0x0".to_string()),
            force: Some(false),
            priority: 0,
            status: ActionStatus::Canceled,
            source: "indexerAgent".to_string(),
            reason: "manual".to_string(),
        };

        let rewritten = with_chain_alias(action.clone());
        assert_eq!(rewritten.protocol_network, "mainnet");
        assert_eq!(
            Action {
                protocol_network: action.protocol_network.clone(),
                ..rewritten
            },
            action
        );
    }

    #[test]
    fn alias_rewrite_passes_unknown_networks_through() {
        let action = Action {
            id: 2,
            protocol_network: "eip155:99999".to_string(),
            action_type: ActionType::Allocate,
            deployment_id: None,
            allocation_id: None,
            amount: None,
            poi: None,
            force: None,
            priority: 0,
            status: ActionStatus::Canceled,
            source: "cli".to_string(),
            reason: "manual".to_string(),
        };

        let rewritten = with_chain_alias(action);
        assert_eq!(rewritten.protocol_network, "eip155:99999");
    }

    #[test]
    fn display_columns_match_the_wire_contract() {
        assert_eq!(
            ACTION_COLUMNS,
            &[
                "id",
                "protocolNetwork",
                "type",
                "deploymentID",
                "allocationID",
                "amount",
                "poi",
                "force",
                "priority",
                "status",
                "source",
                "reason",
            ]
        );
    }
}
