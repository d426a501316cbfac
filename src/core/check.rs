use crate::error::{AppError, ErrCheck};

/// Byte-for-byte equality. No normalization: line endings, casing and
/// trailing whitespace all count.
pub fn compare(expected: &[u8], observed: &[u8]) -> Result<(), AppError> {
    if expected == observed {
        return Ok(());
    }

    Err(AppError::Check(ErrCheck::ContentMismatch {
        expected: preview(expected),
        actual: preview(observed),
    }))
}

/// Render bytes for a mismatch report: quoted text with escapes when the
/// content is valid UTF-8, hex otherwise.
pub fn preview(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => escape(text),
        Err(_) => format!("0x{}", hex::encode(bytes)),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
