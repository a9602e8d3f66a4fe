pub mod grid;

use serde::Serialize;

/// Print either the human-readable `text` or the pretty JSON form of
/// `value`, depending on the global `--json` flag.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn emit<T: Serialize>(value: &T, json: bool, text: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
