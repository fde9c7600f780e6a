//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{OutputFormat, ProsaArgs};
use crate::error::Result;

/// Output a result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ProsaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ProsaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!("{}", "=".repeat(message.len()));
    }

    // Convert to JSON value for uniform rendering across report types.
    let value = serde_json::to_value(result)?;
    print_value(&value, 0);

    Ok(())
}

/// Output as JSON.
fn output_json<T: Serialize>(result: &T, args: &ProsaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a JSON value as indented `Key: value` lines.
///
/// Nested objects become sections with title-cased headers; arrays of
/// `[word, count]` pairs (the top-words listings) become one line per pair.
fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);

    if let Some(object) = value.as_object() {
        for (key, field) in object {
            match field {
                Value::Object(_) => {
                    println!("{pad}{}:", title_case(key));
                    print_value(field, indent + 1);
                }
                Value::Array(entries) => {
                    println!("{pad}{}:", title_case(key));
                    for entry in entries {
                        if let Some(pair) = as_count_pair(entry) {
                            println!("{pad}  {}: {}", pair.0, pair.1);
                        } else {
                            println!("{pad}  {}", format_scalar(entry));
                        }
                    }
                }
                _ => {
                    println!("{pad}{}: {}", title_case(key), format_scalar(field));
                }
            }
        }
    } else {
        println!("{pad}{}", format_scalar(value));
    }
}

/// Interpret a JSON value as a `[word, count]` pair if it is one.
fn as_count_pair(value: &Value) -> Option<(&str, u64)> {
    let entries = value.as_array()?;
    if entries.len() != 2 {
        return None;
    }
    Some((entries[0].as_str()?, entries[1].as_u64()?))
}

/// Format a scalar JSON value for human output.
///
/// Floats print with up to three decimals, trailing zeros trimmed, so
/// pre-rounded report values show exactly their significant digits.
fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if n.is_f64() {
                    let formatted = format!("{f:.3}");
                    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
                    trimmed.to_string()
                } else {
                    n.to_string()
                }
            } else {
                n.to_string()
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Turn a snake_case report key into a display label.
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("word_count"), "Word Count");
        assert_eq!(title_case("flesch_reading_ease"), "Flesch Reading Ease");
        assert_eq!(title_case("sentiment"), "Sentiment");
    }

    #[test]
    fn test_format_scalar_floats() {
        assert_eq!(format_scalar(&serde_json::json!(3.5)), "3.5");
        assert_eq!(format_scalar(&serde_json::json!(0.286)), "0.286");
        assert_eq!(format_scalar(&serde_json::json!(7.0)), "7");
        assert_eq!(format_scalar(&serde_json::json!(42)), "42");
        assert_eq!(format_scalar(&serde_json::json!("Positive")), "Positive");
    }

    #[test]
    fn test_as_count_pair() {
        assert_eq!(
            as_count_pair(&serde_json::json!(["great", 2])),
            Some(("great", 2))
        );
        assert_eq!(as_count_pair(&serde_json::json!(["only"])), None);
        assert_eq!(as_count_pair(&serde_json::json!([1, 2])), None);
    }
}
