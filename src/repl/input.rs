//! Input normalisation

/// Lowercases `input` and splits it into whitespace-separated words.
///
/// Blank input yields no words.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
