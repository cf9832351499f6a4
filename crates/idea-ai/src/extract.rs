//! Locating the JSON object inside model output.
//!
//! The model is asked for bare JSON but sometimes wraps it in a markdown fence
//! or a sentence of prose. We take the first balanced `{...}` span, ignoring
//! braces that sit inside string literals.

/// The first balanced JSON object in `text`, or `None` if there isn't one.
#[must_use]
pub fn json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let tail = &text[start..];
    object_len(tail).map(|len| &tail[..len])
}

/// Byte length of the object starting at `s[0] == '{'`.
fn object_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
