//! Plain-text view of rich-text editor output.
//!
//! The edit form measures a description by what the reader sees, so tags
//! are dropped and character references decoded, the way a browser's
//! `textContent` reads. This is a measuring aid, not a sanitiser.

/// Text content of `markup`: tags removed, entities decoded.
///
/// A `<` that cannot open a tag (for example in `a < b`) is kept as text,
/// as are unknown entities.
pub fn text_content(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        text.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            if !opens_tag(tail) {
                text.push('<');
                rest = &tail[1..];
                continue;
            }
            // An unterminated tag swallows the rest of the input.
            rest = tail.find('>').map_or("", |end| &tail[end + 1..]);
        } else {
            match decode_entity(tail) {
                Some((ch, used)) => {
                    text.push(ch);
                    rest = &tail[used..];
                }
                None => {
                    text.push('&');
                    rest = &tail[1..];
                }
            }
        }
    }

    text.push_str(rest);
    text
}

fn opens_tag(tail: &str) -> bool {
    tail[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Decode the reference at the start of `tail` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_entity(tail: &str) -> Option<(char, usize)> {
    let (semi, _) = tail.char_indices().take(12).find(|&(_, c)| c == ';')?;
    let name = &tail[1..semi];

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };

    Some((ch, semi + 1))
}
