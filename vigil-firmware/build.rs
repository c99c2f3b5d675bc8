//! Build script for vigil-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Picks the clock configuration (`VIGIL_CONFIG`, default `clock.toml`)
//! - Validates it at compile time and embeds it via `OUT_DIR`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "VIGIL_CONFIG";

/// Configuration file used when `VIGIL_CONFIG` is unset
const DEFAULT_CONFIG: &str = "clock.toml";

fn main() {
    setup_linker();
    embed_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate the selected configuration and copy it to `OUT_DIR/clock.toml`
fn embed_config() {
    println!("cargo:rerun-if-env-changed={}", CONFIG_ENV);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let selected = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let config_path = manifest_dir.join(&selected);

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        fail(
            "Configuration file not found",
            &[
                format!("Looked for: {}", config_path.display()),
                format!("Set {} or create {}.", CONFIG_ENV, DEFAULT_CONFIG),
            ],
        );
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read configuration", &[e.to_string()]),
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate(&config);
    if !errors.is_empty() {
        fail("Invalid clock configuration", &errors);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("clock.toml"), content).unwrap();

    println!("cargo:warning={} validated successfully", selected);
}

/// Check sections and keys the firmware reads
fn validate(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["configuration must be a table".to_string()],
    };

    for (name, value) in root {
        match name.as_str() {
            "alarm" | "display" | "input" => {
                if !value.is_table() {
                    errors.push(format!("[{}] must be a table", name));
                }
            }
            _ => errors.push(format!("unknown section [{}]", name)),
        }
    }

    match config.get("alarm").and_then(|a| a.get("time")) {
        Some(toml::Value::String(time)) => {
            if !is_hh_mm(time) {
                errors.push(format!("[alarm] time '{}' must be HH:MM", time));
            }
        }
        Some(_) => errors.push("[alarm] time must be a string".to_string()),
        None => errors.push("[alarm] missing 'time'".to_string()),
    }

    check_int(config, "alarm", "blink_ms", 1, u32::MAX as i64, &mut errors);
    check_int(config, "display", "i2c_bus", 0, 1, &mut errors);
    check_int(config, "display", "i2c_address", 0, 0x7F, &mut errors);
    check_int(config, "input", "poll_ms", 1, u32::MAX as i64, &mut errors);
    check_int(config, "input", "debounce_ms", 0, u32::MAX as i64, &mut errors);

    if let Some(value) = config.get("display").and_then(|d| d.get("dry_run")) {
        if !value.is_bool() {
            errors.push("[display] dry_run must be true or false".to_string());
        }
    }

    errors
}

/// Check an optional integer key lies in `min..=max`
fn check_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match config.get(section).and_then(|s| s.get(key)) {
        None => {}
        Some(toml::Value::Integer(n)) if (min..=max).contains(n) => {}
        Some(_) => errors.push(format!(
            "[{}] {} must be an integer in {}..={}",
            section, key, min, max
        )),
    }
}

/// Strict "HH:MM" check, 24-hour
fn is_hh_mm(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }

    let field = |hi: u8, lo: u8| -> Option<u8> {
        if hi.is_ascii_digit() && lo.is_ascii_digit() {
            Some((hi - b'0') * 10 + (lo - b'0'))
        } else {
            None
        }
    };

    matches!(
        (field(bytes[0], bytes[1]), field(bytes[3], bytes[4])),
        (Some(h), Some(m)) if h < 24 && m < 60
    )
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let truncated = if line.chars().count() > 62 {
                    format!("{}...", line.chars().take(59).collect::<String>())
                } else {
                    line.to_string()
                };
                format!("║  • {:<62} ║", truncated)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}
