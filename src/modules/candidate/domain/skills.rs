/// Splits a comma-separated skill list into trimmed entries, dropping empties.
/// Case is preserved.
pub fn parse_skill_set(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
