use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-level bucketed interpretation of a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Average,
    Poor,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Rating::Good
        } else if score >= 40 {
            Rating::Average
        } else {
            Rating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Average => "average",
            Rating::Poor => "poor",
        }
    }

    /// Exit code contract: good 0, average 1, poor 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Rating::Good => 0,
            Rating::Average => 1,
            Rating::Poor => 2,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five independent booleans, one per criterion. Field names keep the
/// original wire casing so snapshots and records stay interchangeable
/// with earlier tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaResult {
    pub image_optimization: bool,
    pub minified_resources: bool,
    pub compression_enabled: bool,
    pub reduced_requests: bool,
    pub energy_efficient_design: bool,
}

impl CriteriaResult {
    pub fn passed(&self) -> u8 {
        [
            self.image_optimization,
            self.minified_resources,
            self.compression_enabled,
            self.reduced_requests,
            self.energy_efficient_design,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    /// Stable (label, met) pairs for report rendering.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("imageOptimization", self.image_optimization),
            ("minifiedResources", self.minified_resources),
            ("compressionEnabled", self.compression_enabled),
            ("reducedRequests", self.reduced_requests),
            ("energyEfficientDesign", self.energy_efficient_design),
        ]
    }
}

/// Immutable scoring outcome, entirely determined by the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub rating: Rating,
    pub details: CriteriaResult,
}

/// Fixed advice entry attached to a failed criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// Rendered unit handed to the report formatters.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub source: String,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: AnalysisResult,
    pub recommendations: Vec<Advice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_thresholds_are_exact() {
        assert_eq!(Rating::from_score(100), Rating::Good);
        assert_eq!(Rating::from_score(80), Rating::Good);
        assert_eq!(Rating::from_score(70), Rating::Good);
        assert_eq!(Rating::from_score(69), Rating::Average);
        assert_eq!(Rating::from_score(60), Rating::Average);
        assert_eq!(Rating::from_score(40), Rating::Average);
        assert_eq!(Rating::from_score(39), Rating::Poor);
        assert_eq!(Rating::from_score(20), Rating::Poor);
        assert_eq!(Rating::from_score(0), Rating::Poor);
    }

    #[test]
    fn criteria_serialize_with_original_casing() {
        let details = CriteriaResult {
            image_optimization: true,
            ..CriteriaResult::default()
        };
        let json = serde_json::to_string(&details).expect("criteria should serialize");
        assert!(json.contains("\"imageOptimization\":true"));
        assert!(json.contains("\"energyEfficientDesign\":false"));
    }

    #[test]
    fn passed_counts_each_criterion_once() {
        let details = CriteriaResult {
            image_optimization: true,
            reduced_requests: true,
            energy_efficient_design: true,
            ..CriteriaResult::default()
        };
        assert_eq!(details.passed(), 3);
        assert_eq!(CriteriaResult::default().passed(), 0);
    }
}
