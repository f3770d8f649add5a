//! Objective lists are persisted as a serialized JSON array in a TEXT column.

/// Serialize an objective list for storage.
pub fn encode_objectives(objectives: &[String]) -> String {
    serde_json::to_string(objectives).unwrap_or_else(|_| String::from("[]"))
}

/// Decode a stored objective list. Absent or malformed values decode to an empty list.
pub fn decode_objectives(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}
