/// Indentation and character-offset helpers shared by the document model.
///
/// Indentation is never stored on its own: it is the run of leading tabs and
/// spaces of a line's text, extracted on demand. Every column in this crate
/// counts `char`s, so the helpers here translate char offsets to byte offsets.

pub fn leading_whitespace(text: &str) -> &str {
    let rest = text.trim_start_matches([' ', '\t']);
    &text[..text.len() - rest.len()]
}

pub fn text_without_leading_whitespace(text: &str) -> &str {
    text.trim_start_matches([' ', '\t'])
}

/// Number of indent levels in `indent`: one per tab, one per full run of
/// `tab_stop` spaces.
pub fn indent_level(indent: &str, tab_stop: usize) -> usize {
    let tabs = indent.chars().filter(|c| *c == '\t').count();
    let spaces = indent.chars().filter(|c| *c == ' ').count();
    tabs + spaces / tab_stop.max(1)
}

/// Append one indent unit: a tab, or `tab_stop` spaces when `expand_tab` is set.
pub fn push_indent(indent: &str, tab_stop: usize, expand_tab: bool) -> String {
    if expand_tab {
        format!("{indent}{}", " ".repeat(tab_stop.max(1)))
    } else {
        format!("{indent}\t")
    }
}

/// Remove one indent unit from the end of `indent`.
pub fn pop_indent(indent: &str, tab_stop: usize) -> String {
    if let Some(stripped) = indent.strip_suffix('\t') {
        return stripped.to_string();
    }

    let mut result = indent.to_string();
    let mut removed = 0;
    while removed < tab_stop.max(1) && result.ends_with(' ') {
        result.pop();
        removed += 1;
    }
    result
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `char_index`, clamped to the end of `text`.
pub fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

pub fn split_at_char(text: &str, char_index: usize) -> (&str, &str) {
    text.split_at(byte_offset(text, char_index))
}

/// Slice `text` by a char range; out-of-range bounds are clamped.
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    &text[start_byte..end_byte]
}

/// Replace the chars in `start..end` with `replacement`.
pub fn splice_chars(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut result = String::with_capacity(text.len() + replacement.len());
    result.push_str(&text[..start_byte]);
    result.push_str(replacement);
    result.push_str(&text[end_byte..]);
    result
}
