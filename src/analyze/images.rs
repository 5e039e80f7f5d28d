use crate::types::snapshot::PageSnapshot;

/// Met when the page has at least one image and strictly more than half of
/// its images use a modern format or are lazy-loaded. A page without images
/// does not meet the criterion.
pub fn image_optimization(snapshot: &PageSnapshot) -> bool {
    if snapshot.images.is_empty() {
        return false;
    }

    let optimized = snapshot
        .images
        .iter()
        .filter(|image| {
            image.src.contains(".webp") || image.src.contains(".avif") || image.lazy_loading
        })
        .count();

    optimized as f64 / snapshot.images.len() as f64 > 0.5
}
