/// Slices `text` into consecutive chunks of at most `max_chars` characters.
///
/// No word-boundary awareness: a chunk may end mid-word. Empty input yields a
/// single empty line so every item occupies at least one row. A `max_chars`
/// of zero is treated as one.
pub fn wrap_fixed(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
