use serde::de::DeserializeOwned;
use std::fs;

/// Read a JSON input file and deserialise into a typed input struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let parsed =
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse '{}': {}", path, e))?;
    Ok(parsed)
}
