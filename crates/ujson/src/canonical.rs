use crate::Any;

/// Reorders a sequence into its canonical form: elements are sorted by the
/// byte-wise lexicographic order of their JSON encodings.
///
/// The sort is stable, so elements with byte-identical encodings keep their
/// original relative order. An element whose encoding fails contributes the
/// empty byte string as its sort key and therefore sorts first; the
/// operation itself never fails.
pub fn canonicalize(items: &mut [Any]) {
    items.sort_by_cached_key(|item| item.to_json().unwrap_or_default());
}
