use super::badge::badge_for;
use crate::types::report::PageReport;

pub fn to_markdown(report: &PageReport) -> String {
    let badge = badge_for(Some(report.analysis.rating));

    let mut output = String::new();
    output.push_str("# Green Software Report\n\n");
    output.push_str(&format!("Source: {}\n", report.source));
    output.push_str(&format!(
        "Rating: {} {} ({}%)\n\n",
        badge.glyph, report.analysis.rating, report.analysis.score
    ));

    output.push_str("## Practices\n\n");
    for (label, met) in report.analysis.details.entries() {
        output.push_str(&format!("- [{}] {}\n", if met { "✓" } else { "✗" }, label));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for advice in &report.recommendations {
            output.push_str(&format!("- {}: {}\n", advice.title, advice.summary));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use crate::types::snapshot::PageSnapshot;
    use chrono::Utc;

    #[test]
    fn markdown_report_contains_sections_and_glyphs() {
        let analysis = analyze::analyze(&PageSnapshot::default());
        let report = PageReport {
            source: "empty.html".to_string(),
            analyzed_at: Utc::now(),
            recommendations: analyze::advice::recommendations(&analysis.details),
            analysis,
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Green Software Report"));
        assert!(rendered.contains("Rating: ✗ poor (0%)"));
        assert!(rendered.contains("- [✗] imageOptimization"));
        assert!(rendered.contains("## Recommendations"));
        assert!(rendered.contains("Serve images in modern formats"));
    }

    #[test]
    fn markdown_report_shows_none_when_all_criteria_pass() {
        let report = PageReport {
            source: "clean.html".to_string(),
            analyzed_at: Utc::now(),
            analysis: crate::types::report::AnalysisResult {
                score: 100,
                rating: crate::types::report::Rating::Good,
                details: crate::types::report::CriteriaResult {
                    image_optimization: true,
                    minified_resources: true,
                    compression_enabled: true,
                    reduced_requests: true,
                    energy_efficient_design: true,
                },
            },
            recommendations: Vec::new(),
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("Rating: ✓ good (100%)"));
        assert!(rendered.contains("- none"));
    }
}
