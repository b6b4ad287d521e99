use serde::Serialize;

/// Serialize a value to JSON that is safe to send as an HTTP header value.
/// Non-ASCII characters (and DEL) are written as `\uXXXX` escapes, using
/// surrogate pairs outside the BMP.
pub fn to_header_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    Ok(out)
}

/// Remove every carriage return so the buffer only holds `\n` line endings
pub fn normalize_line_endings(text: &str) -> String {
    text.replace('\r', "")
}
