use crate::types::snapshot::PageSnapshot;

/// Met when the page signals dark-mode support, or when strictly more than
/// half of its scripts load async/defer. The denominator here is the TOTAL
/// script count, inline scripts included; the minified-resources criterion
/// counts external resources only. The asymmetry is inherited behavior and
/// kept as-is.
pub fn energy_efficient_design(snapshot: &PageSnapshot) -> bool {
    if snapshot.dark_mode.any() {
        return true;
    }

    let deferred = snapshot
        .scripts
        .iter()
        .filter(|script| script.async_or_defer)
        .count();

    deferred as f64 > snapshot.scripts.len() as f64 * 0.5
}
