use crate::types::snapshot::PageSnapshot;

/// Met when any meta tag declares `http-equiv="Content-Encoding"` or
/// `name="compression"`. Presence-only: actual response headers are never
/// inspected, this is a markup-level hint.
pub fn compression_enabled(snapshot: &PageSnapshot) -> bool {
    snapshot.meta_tags.iter().any(|meta| {
        meta.http_equiv.as_deref() == Some("Content-Encoding")
            || meta.name.as_deref() == Some("compression")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::MetaTag;

    #[test]
    fn no_meta_tags_means_criterion_not_met() {
        assert!(!compression_enabled(&PageSnapshot::default()));
    }

    #[test]
    fn content_encoding_http_equiv_passes() {
        let snapshot = PageSnapshot {
            meta_tags: vec![MetaTag {
                name: None,
                http_equiv: Some("Content-Encoding".to_string()),
            }],
            ..PageSnapshot::default()
        };
        assert!(compression_enabled(&snapshot));
    }

    #[test]
    fn compression_name_passes() {
        let snapshot = PageSnapshot {
            meta_tags: vec![MetaTag {
                name: Some("compression".to_string()),
                http_equiv: None,
            }],
            ..PageSnapshot::default()
        };
        assert!(compression_enabled(&snapshot));
    }

    #[test]
    fn unrelated_meta_tags_do_not_pass() {
        let snapshot = PageSnapshot {
            meta_tags: vec![MetaTag {
                name: Some("viewport".to_string()),
                http_equiv: None,
            }],
            ..PageSnapshot::default()
        };
        assert!(!compression_enabled(&snapshot));
    }
}
