// crates/osm-rid-core/src/text.rs

/// Convert a name into the key form stored in the table.
///
/// Keys are plain Unicode lower-case. No trimming and no accent folding:
/// `"Zürich"` becomes `"zürich"`, never `"zurich"`.
///
/// # Examples
///
/// ```rust
/// use osm_rid_core::text::fold_key;
///
/// assert_eq!(fold_key("Los Angeles"), "los angeles");
/// assert_eq!(fold_key("ZÜRICH"), "zürich");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// `true` for empty or whitespace-only input.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
