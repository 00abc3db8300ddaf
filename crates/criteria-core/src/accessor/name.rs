use crate::error::UnsupportedReason;

///
/// CONSTANTS
///

pub const GETTER_PREFIX: &str = "get";
pub const IS_PREFIX: &str = "is";
pub const SETTER_PREFIX: &str = "set";

const CLOSURE_MARKERS: [&str; 2] = ["{{closure}}", "lambda$"];

/// Derive the field name an accessor method operates on.
///
/// `get`, `is`, and `set` are recognised (checked in that order) when they end
/// at a word boundary: `get_id_card` and `getIdCard` both qualify, `issue`
/// does not. The remainder is decapitalised bean-style, so a leading acronym
/// (`getURL`) keeps its case.
pub fn derive_field_name(method: &str) -> Result<String, UnsupportedReason> {
    if CLOSURE_MARKERS.iter().any(|marker| method.starts_with(marker)) {
        return Err(UnsupportedReason::InlineClosure);
    }

    let rest = [GETTER_PREFIX, IS_PREFIX, SETTER_PREFIX]
        .iter()
        .find_map(|prefix| strip_accessor_prefix(method, prefix))
        .ok_or(UnsupportedReason::MissingPrefix)?;

    Ok(decapitalize(rest))
}

fn strip_accessor_prefix<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = method.strip_prefix(prefix)?;

    if let Some(snake) = rest.strip_prefix('_') {
        return Some(snake);
    }

    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
        .then_some(rest)
}

// decapitalize
// `Name` -> `name`, `URL` -> `URL`, `X` -> `x`
fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    if first.is_uppercase() && chars.next().is_some_and(char::is_uppercase) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    out.extend(first.to_lowercase());
    out.push_str(&name[first.len_utf8()..]);

    out
}
