//! JSON string escaping for serialized field values.

/// Upper bound on the byte length of an escaped string.
///
/// Matches the working-buffer bound of the reference wire format. Input
/// that escapes to more than this is silently cut short, never past a
/// partial escape sequence or inside a UTF-8 character.
pub const MAX_ESCAPED_LEN: usize = 4094;

/// Escapes a raw string for embedding in a JSON string literal.
///
/// `"` and `\` are prefixed with a backslash and a literal newline becomes
/// the two-byte sequence `\n`. Every other character passes through
/// unchanged — no unicode escaping, no other control-character handling.
/// The wire contract is exactly this minimal set.
pub fn escape_json(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '"' | '\\' => {
                if out.len() + 2 > MAX_ESCAPED_LEN {
                    break;
                }
                out.push('\\');
                out.push(ch);
            }
            '\n' => {
                if out.len() + 2 > MAX_ESCAPED_LEN {
                    break;
                }
                out.push_str("\\n");
            }
            _ => {
                if out.len() + ch.len_utf8() > MAX_ESCAPED_LEN {
                    break;
                }
                out.push(ch);
            }
        }
    }
    out
}
