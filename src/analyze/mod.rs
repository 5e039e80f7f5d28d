pub mod advice;
pub mod compression;
pub mod design;
pub mod images;
pub mod requests;
pub mod resources;

use crate::types::report::{AnalysisResult, CriteriaResult, Rating};
use crate::types::snapshot::PageSnapshot;

pub const CRITERIA_COUNT: u8 = 5;
pub const POINTS_PER_CRITERION: u8 = 100 / CRITERIA_COUNT;

/// Scores a snapshot against the five green-software criteria. Total over
/// any well-formed snapshot: never fails, never divides by zero, and the
/// result is entirely determined by the argument.
pub fn analyze(snapshot: &PageSnapshot) -> AnalysisResult {
    let details = CriteriaResult {
        image_optimization: images::image_optimization(snapshot),
        minified_resources: resources::minified_resources(snapshot),
        compression_enabled: compression::compression_enabled(snapshot),
        reduced_requests: requests::reduced_requests(snapshot),
        energy_efficient_design: design::energy_efficient_design(snapshot),
    };

    let score = details.passed() * POINTS_PER_CRITERION;
    AnalysisResult {
        score,
        rating: Rating::from_score(score),
        details,
    }
}
