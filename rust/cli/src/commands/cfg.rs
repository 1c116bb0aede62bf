//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_balance": {
//!     "value": 500,
//!     "source": "default"
//!   },
//!   "seats": {
//!     "value": 6,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration with source tracking and prints it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let hint = format!("set {} to point at a valid TOML file", config::CONFIG_ENV);
            ui::display_warning(err, &hint)?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "opponent_stack": {
            "value": config.opponent_stack,
            "source": sources.opponent_stack,
        },
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "blind_increase_interval": {
            "value": config.blind_increase_interval,
            "source": sources.blind_increase_interval,
        },
        "blind_increase_amount": {
            "value": config.blind_increase_amount,
            "source": sources.blind_increase_amount,
        },
        "max_raise_multiple": {
            "value": config.max_raise_multiple,
            "source": sources.max_raise_multiple,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            config::CONFIG_ENV,
            config::SEED_ENV,
            config::SEATS_ENV,
            config::STARTING_BALANCE_ENV,
            config::AI_ENV,
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_values_with_sources() {
        clear_env();
        unsafe {
            std::env::set_var(config::SEATS_ENV, "6");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();
        assert!(result.is_ok());

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["seats"]["value"], 6);
        assert_eq!(json["seats"]["source"], "env");
        assert_eq!(json["ai"]["value"], "baseline");
        assert_eq!(json["ai"]["source"], "default");
        assert!(json["seed"]["value"].is_null());
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_configuration() {
        clear_env();
        unsafe {
            std::env::set_var(config::STARTING_BALANCE_ENV, "0");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("WARNING: "));
    }
}
