use crate::{CliError, CliErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use ollm_config::Config;
use serde_json::Value;

/// Effective configuration as JSON, with the derived bind host included
#[track_caller]
pub fn render(config: &Config, pretty: bool) -> CliErrorResult<String> {
    let caller = Location::caller();
    let to_cli_error = |e: serde_json::Error| CliError::Serialize {
        source: e,
        location: ErrorLocation::from(caller),
    };

    let mut value = serde_json::to_value(config).map_err(to_cli_error)?;
    value["dev_server"]["bind_host"] = Value::from(config.dev_server.bind_host());

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    output.map_err(to_cli_error)
}
