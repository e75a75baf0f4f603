//! Error-code catalog allocation and patching.
//!
//! The catalog is an error-message YAML of the shape
//!
//! ```yaml
//! error:
//!   messages:
//!
//!     product.not.found:
//!       code: "PRODUCT-0001"
//!       message: "Product not found"
//! ```
//!
//! treated strictly as text: existing codes are found by pattern matching
//! and new entries are appended at the end, never rewritten in place.
//! Within one prefix, codes are unique and increase by one relative to
//! the maximum already present.

use regex::Regex;

/// Prefix used when neither the document nor the namespace yields one.
pub const DEFAULT_PREFIX: &str = "GEN";

/// Minimum digit width of the numeric code suffix.
const CODE_WIDTH: usize = 4;

// ============================================================================
// Allocation
// ============================================================================

/// Next unused code under `prefix`.
///
/// Scans `document` for `code: "<prefix>-<digits>"` entries, takes the
/// maximum numeric suffix (0 when there are none) and adds one. Suffixes
/// are zero-padded to four digits; past 9999 the field widens rather
/// than wrapping, and already-widened codes keep counting.
#[must_use]
pub fn next_code(document: &str, prefix: &str) -> String {
    let re = Regex::new(&format!(
        r#"code:\s*"{}-(\d{{4,}})""#,
        regex::escape(prefix)
    ))
    .unwrap();
    let max = re
        .captures_iter(document)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{:0width$}", prefix, max + 1, width = CODE_WIDTH)
}

/// Whether `key` already has an entry in the document.
///
/// An entry line is exactly four spaces, the key, and a colon with
/// nothing else after it.
#[must_use]
pub fn key_exists(document: &str, key: &str) -> bool {
    let re = Regex::new(&format!(r"(?m)^ {{4}}{}:\s*$", regex::escape(key))).unwrap();
    re.is_match(document)
}

/// Infer the code prefix for a document.
///
/// A document is expected to use one prefix throughout, so any existing
/// `code: "<PREFIX>-####"` entry wins. Otherwise the dotted `namespace`
/// is consulted: the segment following `root_marker` is upper-cased
/// (`com.acme.billing` with marker `acme` gives `BILLING`). Falls back
/// to [`DEFAULT_PREFIX`].
#[must_use]
pub fn infer_prefix(document: &str, namespace: &str, root_marker: &str) -> String {
    let re = Regex::new(r#"code:\s*"([A-Z]+)-\d{4,}""#).unwrap();
    if let Some(caps) = re.captures(document) {
        return caps[1].to_string();
    }

    if !root_marker.is_empty() {
        let segments: Vec<&str> = namespace.split('.').collect();
        if let Some(idx) = segments.iter().position(|s| *s == root_marker) {
            if let Some(segment) = segments.get(idx + 1) {
                if !segment.is_empty() {
                    return segment.to_uppercase();
                }
            }
        }
    }

    DEFAULT_PREFIX.to_string()
}

// ============================================================================
// Patching
// ============================================================================

/// Append a new entry to the document, returning the updated text.
///
/// Creates the `error:` root and `  messages:` header lines when the
/// document does not have them yet. The rest of the document is kept
/// byte-for-byte; the new block lands at the end, preceded by a blank
/// line. Rejecting duplicate keys is the caller's job (via
/// [`key_exists`]).
#[must_use]
pub fn append_entry(document: &str, key: &str, code: &str, message: &str) -> String {
    let mut out = String::from(document);

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    let has_root = document.lines().any(|line| line.starts_with("error:"));
    let has_messages = document.lines().any(|line| line.starts_with("  messages:"));
    if !has_root {
        out.push_str("error:\n");
    }
    if !has_messages {
        out.push_str("  messages:\n");
    }

    out.push_str(&format!(
        "\n    {key}:\n      code: \"{code}\"\n      message: \"{message}\"\n"
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"error:
  messages:

    product.not.found:
      code: "PRODUCT-0001"
      message: "Product not found"

    product.price.missing:
      code: "PRODUCT-0007"
      message: "Product has no price"
"#;

    #[test]
    fn test_next_code_empty_document() {
        assert_eq!(next_code("", "PRODUCT"), "PRODUCT-0001");
    }

    #[test]
    fn test_next_code_no_entries_for_prefix() {
        assert_eq!(next_code(CATALOG, "ASSET"), "ASSET-0001");
    }

    #[test]
    fn test_next_code_increments_maximum() {
        assert_eq!(next_code(CATALOG, "PRODUCT"), "PRODUCT-0008");
    }

    #[test]
    fn test_next_code_ignores_entry_order() {
        let doc = "code: \"X-0005\"\ncode: \"X-0002\"\ncode: \"X-0004\"\n";
        assert_eq!(next_code(doc, "X"), "X-0006");
    }

    #[test]
    fn test_next_code_prefix_with_metacharacters() {
        // Dotted release prefixes must be matched literally.
        let doc = "code: \"1.2.3-0002\"\ncode: \"1x2y3-0009\"\n";
        assert_eq!(next_code(doc, "1.2.3"), "1.2.3-0003");
    }

    #[test]
    fn test_next_code_widens_past_padding() {
        assert_eq!(next_code("code: \"X-9999\"", "X"), "X-10000");
        assert_eq!(next_code("code: \"X-10000\"", "X"), "X-10001");
    }

    #[test]
    fn test_key_exists() {
        assert!(key_exists(CATALOG, "product.not.found"));
        assert!(!key_exists(CATALOG, "product.not"));
        assert!(!key_exists(CATALOG, "asset.not.found"));
    }

    #[test]
    fn test_key_exists_requires_entry_indent() {
        // `messages:` sits at two spaces, not four; it is a header, not
        // an entry.
        assert!(!key_exists(CATALOG, "messages"));
    }

    #[test]
    fn test_key_exists_is_idempotent() {
        let first = key_exists(CATALOG, "product.not.found");
        let second = key_exists(CATALOG, "product.not.found");
        assert_eq!(first, second);
    }

    #[test]
    fn test_infer_prefix_prefers_document() {
        assert_eq!(infer_prefix(CATALOG, "com.acme.billing", "acme"), "PRODUCT");
    }

    #[test]
    fn test_infer_prefix_from_namespace() {
        assert_eq!(infer_prefix("", "com.acme.billing", "acme"), "BILLING");
        assert_eq!(
            infer_prefix("", "com.acme.asset.constants", "acme"),
            "ASSET"
        );
    }

    #[test]
    fn test_infer_prefix_fallback() {
        assert_eq!(infer_prefix("", "", ""), "GEN");
        assert_eq!(infer_prefix("", "com.other.billing", "acme"), "GEN");
        // Marker present but nothing after it.
        assert_eq!(infer_prefix("", "com.acme", "acme"), "GEN");
    }

    #[test]
    fn test_append_entry_to_existing_catalog() {
        let updated = append_entry(CATALOG, "product.expired", "PRODUCT-0008", "Product expired");
        assert!(updated.starts_with(CATALOG));
        assert!(updated.ends_with(
            "\n    product.expired:\n      code: \"PRODUCT-0008\"\n      message: \"Product expired\"\n"
        ));
    }

    #[test]
    fn test_append_entry_creates_headers() {
        let updated = append_entry("", "a.b", "GEN-0001", "msg");
        assert_eq!(
            updated,
            "error:\n  messages:\n\n    a.b:\n      code: \"GEN-0001\"\n      message: \"msg\"\n"
        );
    }

    #[test]
    fn test_append_entry_repairs_missing_trailing_newline() {
        let doc = "error:\n  messages:\n\n    a.b:\n      code: \"GEN-0001\"\n      message: \"m\"";
        let updated = append_entry(doc, "c.d", "GEN-0002", "n");
        assert!(updated.contains("message: \"m\"\n\n    c.d:\n"));
    }

    #[test]
    fn test_allocate_append_round_trip() {
        let mut doc = String::new();
        for (i, key) in ["a.one", "a.two", "a.three"].iter().enumerate() {
            let code = next_code(&doc, "ASSET");
            assert_eq!(code, format!("ASSET-{:04}", i + 1));
            doc = append_entry(&doc, key, &code, "some message");
        }
        assert_eq!(next_code(&doc, "ASSET"), "ASSET-0004");
        assert!(key_exists(&doc, "a.two"));
    }
}
