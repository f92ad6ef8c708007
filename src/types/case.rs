//! Name case conversion.

/// Convert a camelCase name to hyphen-case: `backgroundColor` → `background-color`.
///
/// A hyphen goes between every lowercase letter and the uppercase letter that
/// follows it. Runs of capitals are left alone after the first.
pub fn camel_to_hyphen(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        match prev {
            Some(p) if p.is_ascii_lowercase() && c.is_ascii_uppercase() => {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            }
            _ => out.push(c),
        }
        prev = Some(c);
    }

    out
}
