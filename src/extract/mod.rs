pub mod tags;

use crate::types::snapshot::{
    DarkModeSignals, ImageElement, MetaTag, PageSnapshot, ScriptElement, StylesheetElement,
};
use tags::{attr_value, has_attr, TagScanner};

/// Builds a [`PageSnapshot`] from raw markup. Never fails: unrecognized or
/// malformed content is skipped, an empty document yields an empty snapshot.
pub fn snapshot_from_html(html: &str) -> PageSnapshot {
    let scanner = TagScanner::new();
    let html = scanner.strip_comments(html);

    let images = scanner
        .img_tags(&html)
        .iter()
        .map(|attrs| ImageElement {
            src: attr_value(attrs, "src").unwrap_or_default().to_string(),
            lazy_loading: attr_value(attrs, "loading")
                .map(|value| value.eq_ignore_ascii_case("lazy"))
                .unwrap_or(false),
        })
        .collect::<Vec<_>>();

    let scripts = scanner
        .script_tags(&html)
        .iter()
        .map(|attrs| ScriptElement {
            src: attr_value(attrs, "src").map(str::to_string),
            async_or_defer: has_attr(attrs, "async") || has_attr(attrs, "defer"),
        })
        .collect::<Vec<_>>();

    let stylesheets = scanner
        .link_tags(&html)
        .iter()
        .filter(|attrs| {
            attr_value(attrs, "rel")
                .map(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("stylesheet"))
                })
                .unwrap_or(false)
        })
        .map(|attrs| StylesheetElement {
            href: attr_value(attrs, "href").unwrap_or_default().to_string(),
        })
        .collect::<Vec<_>>();

    let meta_tags = scanner
        .meta_tags(&html)
        .iter()
        .map(|attrs| MetaTag {
            name: attr_value(attrs, "name").map(str::to_string),
            http_equiv: attr_value(attrs, "http-equiv").map(str::to_string),
        })
        .collect::<Vec<_>>();

    let dark_mode = detect_dark_mode(&scanner, &html, &meta_tags);

    let snapshot = PageSnapshot {
        images,
        scripts,
        stylesheets,
        meta_tags,
        dark_mode,
    };
    tracing::debug!(
        images = snapshot.images.len(),
        scripts = snapshot.scripts.len(),
        stylesheets = snapshot.stylesheets.len(),
        meta_tags = snapshot.meta_tags.len(),
        "extracted page snapshot"
    );
    snapshot
}

fn detect_dark_mode(scanner: &TagScanner, html: &str, meta_tags: &[MetaTag]) -> DarkModeSignals {
    let color_scheme_meta = meta_tags
        .iter()
        .any(|meta| meta.name.as_deref() == Some("color-scheme"));

    // A static extractor cannot resolve computed styles; the body tag's
    // inline declaration stands in for the resolved background check.
    let black_background = scanner
        .body_tag(html)
        .and_then(|attrs| attr_value(&attrs, "style").map(str::to_string))
        .map(|style| scanner.declares_black_background(&style))
        .unwrap_or(false);

    DarkModeSignals {
        color_scheme_meta,
        data_theme_attr: scanner.has_data_theme(html),
        dark_mode_class: scanner.has_dark_mode_class(html),
        black_background,
    }
}
