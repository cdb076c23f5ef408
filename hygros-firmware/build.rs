//! Build script for hygros-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates hygros.toml at compile time
//! - Generates `config.rs` with the validated values as constants

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Numeric keys accepted per section, with their inclusive ranges
const KEYS: &[(&str, &str, i64, i64)] = &[
    ("poll", "interval_ms", 80, 60_000),
    ("poll", "read_attempts", 1, 255),
    ("display", "intensity", 0, 15),
    ("display", "scan_limit", 0, 7),
    ("sensor", "address", 0x08, 0x77),
    ("sensor", "i2c_frequency", 10_000, 400_000),
    ("console", "baudrate", 1_200, 2_000_000),
];

/// Board-level values with no counterpart in `hygros_core::config::Config`
const DEFAULT_I2C_FREQUENCY: i64 = 100_000;
const DEFAULT_BAUDRATE: i64 = 115_200;

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    generate_config(&config);
}

/// Linker scripts: memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse hygros.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=hygros.toml");

    let config_path = Path::new("hygros.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: hygros.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a hygros.toml configuration file.         ║\n\
            ║  Please create one in the hygros-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read hygros.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in hygros.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                error_msg
                    .lines()
                    .map(|l| format!("║  {:<64}║", l))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    }
}

/// Look up `[section] key` as an integer
fn value(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

/// Check every known key for type and range, and reject unknown ones
fn validate_config(config: &toml::Value) {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => {
            errors.push("top level must be a table".to_string());
            report(&errors);
            return;
        }
    };

    for (section, body) in root {
        let table = match body.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };
        for (key, raw) in table {
            let Some(&(_, _, min, max)) = KEYS
                .iter()
                .find(|(s, k, _, _)| *s == section.as_str() && *k == key.as_str())
            else {
                errors.push(format!("unknown key '{}' in [{}]", key, section));
                continue;
            };
            match raw.as_integer() {
                Some(v) if v < min || v > max => {
                    errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
                }
                Some(_) => {}
                None => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }

    report(&errors);
}

fn report(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid configuration in hygros.toml                     ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Emit `config.rs`; keys left out of hygros.toml keep the library defaults
fn generate_config(config: &toml::Value) {
    let mut overrides = String::new();
    for (section, field) in [
        ("poll", "interval_ms"),
        ("poll", "read_attempts"),
        ("display", "intensity"),
        ("display", "scan_limit"),
        ("sensor", "address"),
    ] {
        if let Some(v) = value(config, section, field) {
            overrides.push_str(&format!("    config.{}.{} = {};\n", section, field, v));
        }
    }

    let i2c_frequency = value(config, "sensor", "i2c_frequency").unwrap_or(DEFAULT_I2C_FREQUENCY);
    let baudrate = value(config, "console", "baudrate").unwrap_or(DEFAULT_BAUDRATE);

    let source = format!(
        "// Generated by build.rs from hygros.toml\n\
         \n\
         /// Application configuration\n\
         pub const CONFIG: hygros_core::config::Config = {{\n\
         \x20   let mut config = hygros_core::config::Config::new();\n\
         {overrides}\
         \x20   config\n\
         }};\n\
         \n\
         /// Sensor bus clock in Hz\n\
         pub const I2C_FREQUENCY: u32 = {i2c_frequency};\n\
         \n\
         /// Status console baud rate\n\
         pub const CONSOLE_BAUDRATE: u32 = {baudrate};\n"
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    if let Err(e) = fs::write(out_dir.join("config.rs"), source) {
        panic!("failed to write config.rs: {}", e);
    }
}
