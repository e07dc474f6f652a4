/// Trim leading/trailing whitespace from a cell value.
pub fn clean_str(raw: &str) -> String {
    raw.trim().to_string()
}

/// True when a header name carries whitespace that cell values would lose.
pub fn has_padding(name: &str) -> bool {
    name.len() != name.trim().len()
}
