//! Mapping between application ids and registry file names
//!
//! Bytes outside `[A-Za-z0-9._-]` are written as `%XX` so any id yields a
//! single portable file name.

const EXTENSION: &str = ".yaml";

fn is_plain(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// File name of the entry stored under `key`
pub fn to_file_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + EXTENSION.len());
    for byte in key.bytes() {
        if is_plain(byte) {
            name.push(char::from(byte));
        } else {
            name.push_str(&format!("%{byte:02X}"));
        }
    }
    name.push_str(EXTENSION);
    name
}

/// Key of the entry stored in `file_name`, if it is an entry file at all
pub fn from_file_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(EXTENSION)?;
    if stem.is_empty() {
        return None;
    }

    let bytes = stem.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            // Only the uppercase form written by `to_file_name` is accepted,
            // so every decoded key maps back to the same file
            let high = hex_value(*bytes.get(i + 1)?)?;
            let low = hex_value(*bytes.get(i + 2)?)?;
            decoded.push((high << 4) | low);
            i += 3;
        } else if is_plain(bytes[i]) {
            decoded.push(bytes[i]);
            i += 1;
        } else {
            return None;
        }
    }
    let key = String::from_utf8(decoded).ok()?;
    (to_file_name(&key) == file_name).then_some(key)
}
