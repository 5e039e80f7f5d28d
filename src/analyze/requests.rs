use crate::types::snapshot::PageSnapshot;

const REQUEST_LIMIT: usize = 20;

/// Met when the combined script, stylesheet and image count is below the
/// fixed limit. An empty page carries no evidence of request discipline, so
/// zero elements is "not met" rather than trivially met.
pub fn reduced_requests(snapshot: &PageSnapshot) -> bool {
    let total = snapshot.total_elements();
    total > 0 && total < REQUEST_LIMIT
}
