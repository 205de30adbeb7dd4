use folio_types::MalformedIndexPolicy;

/// Resolve a target's `data-index` attribute.
///
/// Under [`MalformedIndexPolicy::Skip`] the attribute must be a plain
/// non-negative integer, otherwise `None`. Under
/// [`MalformedIndexPolicy::AliasToZero`] leading digits are read the way
/// `parseInt` reads them (`"12abc"` is 12) and anything without them is 0.
pub fn parse_index(attr: Option<&str>, policy: MalformedIndexPolicy) -> Option<u32> {
    let attr = attr.map(str::trim);
    match policy {
        MalformedIndexPolicy::Skip => attr.and_then(|s| s.parse::<u32>().ok()),
        MalformedIndexPolicy::AliasToZero => Some(attr.and_then(leading_digits).unwrap_or(0)),
    }
}

fn leading_digits(s: &str) -> Option<u32> {
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<u32>().ok()
}
