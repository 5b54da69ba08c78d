//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a dimmed empty-result notice to stderr.
pub fn empty(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a dimmed count summary to stderr.
pub fn count(label: &str, n: usize) {
    eprintln!();
    eprintln!("{}: {}", label.dimmed(), n);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a list of values, one JSON document per entry.
pub fn json_list<T: Serialize>(values: &[T], pretty: bool) -> Result<()> {
    for value in values {
        if pretty {
            json_pretty(value)?;
        } else {
            json(value)?;
        }
    }
    Ok(())
}
