use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Byte offset of the `char_pos`-th character, clamped to the text length.
pub fn char_to_byte(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Number of characters that start before `byte_pos`.
pub fn byte_to_char(text: &str, byte_pos: usize) -> usize {
    text.char_indices().take_while(|(i, _)| *i < byte_pos).count()
}

/// Encode to Latin-1, replacing every character outside it with `?`.
pub fn to_latin1_lossy(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Split text into lines on `\n`, dropping a trailing `\r` from each line.
/// An empty text is one empty line; a trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
