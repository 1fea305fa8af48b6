use std::ffi::{OsStr, OsString};
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Normalises a string to NFC (composed) form.
pub fn nfc_string(s: &str) -> String {
    s.nfc().collect()
}

/// Returns the NFC form of `name` when it differs from `name`.
///
/// Names that are not valid Unicode are never renamed and yield `None`.
pub fn nfc_name(name: &OsStr) -> Option<OsString> {
    let name = name.to_str()?;
    if is_nfc_quick(name.chars()) == IsNormalized::Yes {
        return None;
    }
    let composed = nfc_string(name);
    if composed == name {
        None
    } else {
        Some(OsString::from(composed))
    }
}
