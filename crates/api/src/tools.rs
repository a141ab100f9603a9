//! Named tool registry and dispatch.
//!
//! Every tool is reachable three ways: its REST route, `POST /tools/{name}`
//! and one line on the stdio transport. All three go through [`dispatch`]
//! or the same operation functions, so they answer identically.

use cashcast_shared::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::AppState;
use crate::routes::{
    competitors, events, export, forecast, planning, pms, pricing, scenario, validation,
};

/// Description of one tool.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolSpec {
    /// Tool name used for dispatch.
    pub name: &'static str,
    /// What the tool does.
    pub description: &'static str,
    /// Equivalent REST route.
    pub route: &'static str,
    /// Required arguments.
    pub required: &'static [&'static str],
    /// Optional arguments.
    pub optional: &'static [&'static str],
}

/// Every tool the server exposes.
pub const TOOLS: [ToolSpec; 11] = [
    ToolSpec {
        name: "get_cash_position",
        description: "Projected cash position for one day with reserve status",
        route: "POST /api/v1/cash-position",
        required: &[],
        optional: &["as_of_date"],
    },
    ToolSpec {
        name: "generate_daily_forecast",
        description: "Daily cash flow forecast with per-account breakdown",
        route: "POST /api/v1/forecast",
        required: &["start_date", "end_date"],
        optional: &["include_details"],
    },
    ToolSpec {
        name: "run_scenario",
        description: "What-if scenario compared day by day with the baseline",
        route: "POST /api/v1/scenario",
        required: &["start_date", "end_date"],
        optional: &["scenario_name", "occupancy_change", "rate_change", "expense_change"],
    },
    ToolSpec {
        name: "validate_forecast",
        description: "Forecast vs actual variance and accuracy for one day",
        route: "POST /api/v1/validate",
        required: &["forecast_date", "actual_inflows", "actual_outflows"],
        optional: &["projected_inflows", "projected_outflows"],
    },
    ToolSpec {
        name: "export_report",
        description: "Render a report as summary text, CSV or JSON",
        route: "POST /api/v1/export",
        required: &["report"],
        optional: &["format", "arguments"],
    },
    ToolSpec {
        name: "optimize_pricing",
        description: "Recommended nightly rates with revenue uplift",
        route: "POST /api/v1/pricing",
        required: &["start_date", "end_date"],
        optional: &["current_occupancy", "lead_days", "competitor_rate"],
    },
    ToolSpec {
        name: "get_events",
        description: "Local events affecting demand in a date range",
        route: "POST /api/v1/events",
        required: &["start_date", "end_date"],
        optional: &["event_type"],
    },
    ToolSpec {
        name: "get_competitor_rates",
        description: "Competitor rates and market position for one day",
        route: "POST /api/v1/competitors",
        required: &["date"],
        optional: &[],
    },
    ToolSpec {
        name: "fetch_opera_rates",
        description: "PMS rates compared with recommended rates, with an action per day",
        route: "POST /api/v1/pms/rates",
        required: &["start_date", "end_date"],
        optional: &["rate_code"],
    },
    ToolSpec {
        name: "get_opera_inventory",
        description: "PMS room inventory and occupancy with rate recommendations",
        route: "POST /api/v1/pms/inventory",
        required: &["start_date", "end_date"],
        optional: &[],
    },
    ToolSpec {
        name: "export_monthly_for_planning",
        description: "Monthly roll-up and planning import records",
        route: "POST /api/v1/planning/monthly",
        required: &["start_date", "end_date"],
        optional: &["scenario"],
    },
];

/// Looks up a tool by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

fn parse<T: DeserializeOwned>(arguments: Value) -> AppResult<T> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| AppError::Validation(format!("Invalid arguments: {e}")))
}

fn to_value<T: Serialize>(result: &T) -> AppResult<Value> {
    serde_json::to_value(result).map_err(|e| AppError::Internal(e.to_string()))
}

/// Runs the named tool with a JSON argument object.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown tool, `AppError::Validation`
/// for malformed arguments, and the tool's own error otherwise.
pub fn dispatch(state: &AppState, name: &str, arguments: Value) -> AppResult<Value> {
    debug!(tool = name, "Dispatching tool");
    match name {
        "get_cash_position" => to_value(&forecast::cash_position(state, &parse(arguments)?)?),
        "generate_daily_forecast" => {
            to_value(&forecast::daily_forecast(state, &parse(arguments)?)?)
        }
        "run_scenario" => to_value(&scenario::compare_scenario(state, &parse(arguments)?)?),
        "validate_forecast" => to_value(&validation::validate(state, &parse(arguments)?)?),
        "export_report" => to_value(&export::export_report_for(state, &parse(arguments)?)?),
        "optimize_pricing" => to_value(&pricing::optimize(state, &parse(arguments)?)?),
        "get_events" => to_value(&events::events(state, &parse(arguments)?)?),
        "get_competitor_rates" => {
            to_value(&competitors::competitor_rates(state, &parse(arguments)?)?)
        }
        "fetch_opera_rates" => to_value(&pms::pms_rates(state, &parse(arguments)?)?),
        "get_opera_inventory" => to_value(&pms::inventory(state, &parse(arguments)?)?),
        "export_monthly_for_planning" => to_value(&planning::monthly(state, &parse(arguments)?)?),
        _ => Err(AppError::NotFound(format!("Unknown tool: {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::state;

    #[test]
    fn test_every_tool_dispatches() {
        for tool in &TOOLS {
            let err = dispatch(&state(), tool.name, json!({"unexpected": true}));
            // Tools with no required arguments succeed; the rest reject the call.
            match err {
                Ok(_) => assert!(
                    tool.required.is_empty(),
                    "{} accepted empty arguments",
                    tool.name
                ),
                Err(e) => assert!(matches!(e, AppError::Validation(_)), "{}: {e}", tool.name),
            }
        }
    }

    #[test]
    fn test_unknown_tool() {
        let err = dispatch(&state(), "book_room", Value::Null).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_null_arguments_treated_as_empty() {
        let value = dispatch(&state(), "get_cash_position", Value::Null).unwrap();
        assert_eq!(value["status"], "OK");
    }

    #[test]
    fn test_oversized_scenario_delta_is_rejected() {
        let err = dispatch(
            &state(),
            "run_scenario",
            json!({
                "start_date": "2026-02-01",
                "end_date": "2026-02-02",
                "rate_change": "100000000000000000000000000"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{err}");
    }

    #[test]
    fn test_oversized_competitor_rate_is_rejected() {
        let err = dispatch(
            &state(),
            "optimize_pricing",
            json!({
                "start_date": "2026-02-01",
                "end_date": "2026-02-01",
                "competitor_rate": "70000000000000000000000000000"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{err}");
    }

    #[test]
    fn test_oversized_variance_is_rejected() {
        let err = dispatch(
            &state(),
            "validate_forecast",
            json!({
                "forecast_date": "2026-02-02",
                "actual_inflows": "70000000000000000000000000000",
                "actual_outflows": "0",
                "projected_inflows": "0.0000001",
                "projected_outflows": "0"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{err}");
    }

    #[test]
    fn test_pms_tools_dispatch() {
        let args = json!({"start_date": "2026-03-04", "end_date": "2026-03-05"});

        let rates = dispatch(&state(), "fetch_opera_rates", args.clone()).unwrap();
        assert_eq!(rates["summary"]["rates_to_increase"], 2);

        let inventory = dispatch(&state(), "get_opera_inventory", args).unwrap();
        assert_eq!(inventory["days"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("get_events").unwrap().route, "POST /api/v1/events");
        assert!(find("nope").is_none());
    }
}
