/// Derive a stable identifier from a human-readable game name.
///
/// Lowercases the name and keeps only ASCII letters and digits. The mapping is
/// deliberately lossy and therefore not injective: `"Diablo IV"` and
/// `"Diablo-IV!"` both become `"diabloiv"`. Records are never deduplicated on
/// this value.
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
