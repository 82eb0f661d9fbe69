//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::Shape;
use crate::config::ParameterFile;
use crate::error::CliError;
use parampat_core::{Complex, OutputStyle, Pattern, pattern_factory, to_pattern};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json_mode: bool,
    pub quiet: bool,
}

fn print_json(value: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

// =============================================================================
// DESCRIBE COMMAND
// =============================================================================

/// Rebuild a pattern from `description` and render it in `style`.
pub fn cmd_describe(
    output: Output,
    description: &str,
    style: OutputStyle,
) -> Result<(), CliError> {
    let pattern = pattern_factory(description)?;
    let rendered = pattern.description(style);

    if output.json_mode {
        print_json(&serde_json::json!({
            "kind": pattern.kind_name(),
            "style": style,
            "description": rendered,
        }));
        return Ok(());
    }

    if !output.quiet {
        println!("{} pattern ({style})", pattern.kind_name());
    }
    println!("{rendered}");
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Outcome of `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub value: String,
    /// Machine description of the pattern.
    pub pattern: String,
    pub matches: bool,
    /// Text description of what the value should look like.
    pub expected: String,
}

/// Check `value` against the pattern described by `description`.
pub fn check_value(description: &str, value: &str) -> Result<CheckReport, CliError> {
    let pattern = pattern_factory(description)?;
    Ok(CheckReport {
        value: value.to_string(),
        pattern: pattern.description(OutputStyle::Machine),
        matches: pattern.is_match(value),
        expected: pattern.description(OutputStyle::Text),
    })
}

/// Check one value; a mismatch is an error.
pub fn cmd_check(output: Output, description: &str, value: &str) -> Result<(), CliError> {
    let report = check_value(description, value)?;

    if output.json_mode {
        print_json(&report);
    } else if report.matches {
        println!("ok: \"{}\"", report.value);
    } else {
        println!("no match: \"{}\"", report.value);
        if !output.quiet {
            println!("expected: {}", report.expected);
        }
    }

    if !report.matches {
        return Err(CliError::Mismatch {
            value: report.value,
            pattern: report.pattern,
        });
    }
    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Check every parameter in the file at `path`; any mismatch is an error.
pub fn cmd_validate(output: Output, path: &Path) -> Result<(), CliError> {
    let file = ParameterFile::load(path)?;
    let reports = file.validate();
    let total = reports.len();
    let failed = reports.iter().filter(|report| !report.matches).count();

    if output.json_mode {
        print_json(&serde_json::json!({
            "file": path.to_string_lossy(),
            "total": total,
            "failed": failed,
            "parameters": reports,
        }));
    } else {
        if !output.quiet {
            println!("Parameter file: {}", path.display());
            println!();
        }
        for report in &reports {
            if report.matches {
                println!("  ok    {} = \"{}\"", report.name, report.value);
            } else {
                println!("  FAIL  {} = \"{}\"", report.name, report.value);
                println!("        expected: {}", report.expected);
            }
        }
        if !output.quiet {
            println!();
            println!("{} checked, {} failed", total, failed);
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed { failed, total });
    }
    Ok(())
}

// =============================================================================
// DEFAULT-PATTERN COMMAND
// =============================================================================

/// Default pattern for `shape`.
pub fn default_pattern(shape: Shape) -> Result<Pattern, CliError> {
    let pattern = match shape {
        Shape::Int => to_pattern::<i64>(),
        Shape::Double => to_pattern::<f64>(),
        Shape::Bool => to_pattern::<bool>(),
        Shape::String => to_pattern::<String>(),
        Shape::IntList => to_pattern::<Vec<i64>>(),
        Shape::IntListList => to_pattern::<Vec<Vec<i64>>>(),
        Shape::StringIntMap => to_pattern::<BTreeMap<String, i64>>(),
        Shape::Complex => to_pattern::<Complex<f64>>(),
        Shape::Point3 => to_pattern::<[f64; 3]>(),
    }?;
    Ok(pattern)
}

/// Print the default pattern for `shape` in `style`.
pub fn cmd_default_pattern(
    output: Output,
    shape: Shape,
    style: OutputStyle,
) -> Result<(), CliError> {
    let pattern = default_pattern(shape)?;
    let rendered = pattern.description(style);

    if output.json_mode {
        print_json(&serde_json::json!({
            "shape": format!("{shape:?}"),
            "style": style,
            "description": rendered,
        }));
        return Ok(());
    }

    println!("{rendered}");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
