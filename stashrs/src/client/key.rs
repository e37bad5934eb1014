use super::error::KeyError;

pub const SERVER_MAX_KEY_LENGTH: usize = 250;

/// Checks a key against the memcached key rules.
///
/// `extra_len` accounts for a prefix that will be added to the key and
/// `max_len` of 0 disables the length check. Length is measured in UTF-8
/// bytes; anything up to and including space (0x20) and DEL (0x7f) is
/// rejected.
pub fn check_key(key: &str, extra_len: usize, max_len: usize) -> Result<(), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }
    let length = key.len() + extra_len;
    if max_len != 0 && length > max_len {
        return Err(KeyError::TooLong {
            length,
            max: max_len,
        });
    }
    if key.chars().any(|c| c <= ' ' || c == '\u{7f}') {
        return Err(KeyError::ControlCharacter);
    }
    Ok(())
}
