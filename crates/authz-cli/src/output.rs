//! Output formatting utilities.

use colored::Colorize;

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs a single item.
///
/// `headline` is what `Quiet` prints and what `Text` leads with.
///
/// # Errors
///
/// Returns [`crate::CliError::Json`] if the item cannot be serialized.
pub fn output_single<T: serde::Serialize>(
    item: &T,
    headline: &str,
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Text => {
            success(headline);
            let json = serde_json::to_value(item)?;
            print_fields(&json);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item)?;
            println!("{json}");
        }
        OutputFormat::Quiet => println!("{headline}"),
    }
    Ok(())
}

/// Prints the top-level fields of an object as `key: value` lines.
fn print_fields(value: &serde_json::Value) {
    let Some(map) = value.as_object() else {
        return;
    };
    for (key, val) in map {
        match val {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => println!("  {}: {s}", key.bold()),
            serde_json::Value::Array(items) => {
                println!("  {}:", key.bold());
                for item in items {
                    println!("    - {}", render_scalar(item));
                }
            }
            other => println!("  {}: {other}", key.bold()),
        }
    }
}

fn render_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(pair) if pair.len() == 2 => {
            format!("{} = {}", render_scalar(&pair[0]), render_scalar(&pair[1]))
        }
        other => other.to_string(),
    }
}
