use crate::types::snapshot::PageSnapshot;

const MINIFICATION_MARKERS: [&str; 2] = [".min.", "minified"];

/// Met when the page references at least one external script or stylesheet
/// and strictly more than 30% of them carry a minification marker in their
/// source path. Inline scripts are outside the denominator.
pub fn minified_resources(snapshot: &PageSnapshot) -> bool {
    let total = snapshot.external_scripts() + snapshot.stylesheets.len();
    if total == 0 {
        return false;
    }

    let minified = snapshot
        .scripts
        .iter()
        .filter_map(|script| script.src.as_deref())
        .filter(|src| is_minified(src))
        .count()
        + snapshot
            .stylesheets
            .iter()
            .filter(|stylesheet| is_minified(&stylesheet.href))
            .count();

    minified as f64 / total as f64 > 0.3
}

fn is_minified(path: &str) -> bool {
    MINIFICATION_MARKERS.iter().any(|marker| path.contains(marker))
}
