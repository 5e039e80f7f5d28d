use crate::types::report::{Advice, CriteriaResult};

/// Fixed advice entries for each failed criterion, in criterion order.
/// Weights and texts are not configurable.
pub fn recommendations(details: &CriteriaResult) -> Vec<Advice> {
    let mut advice = Vec::new();
    if !details.image_optimization {
        advice.push(Advice {
            id: "rec.images.modern_formats",
            title: "Serve images in modern formats",
            summary: "Convert images to WebP or AVIF, or mark below-the-fold images loading=\"lazy\".",
        });
    }
    if !details.minified_resources {
        advice.push(Advice {
            id: "rec.resources.minify",
            title: "Minify scripts and stylesheets",
            summary: "Ship minified bundles so most external resources carry a .min. marker.",
        });
    }
    if !details.compression_enabled {
        advice.push(Advice {
            id: "rec.compression.declare",
            title: "Declare transfer compression",
            summary: "Enable gzip or brotli on the server and surface the hint in page metadata.",
        });
    }
    if !details.reduced_requests {
        advice.push(Advice {
            id: "rec.requests.bundle",
            title: "Reduce request count",
            summary: "Bundle scripts and stylesheets and sprite small images to stay under 20 resource elements.",
        });
    }
    if !details.energy_efficient_design {
        advice.push(Advice {
            id: "rec.design.efficiency",
            title: "Adopt energy-efficient design",
            summary: "Offer a dark color scheme and load scripts with async or defer.",
        });
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_criteria_met_yields_no_advice() {
        let details = CriteriaResult {
            image_optimization: true,
            minified_resources: true,
            compression_enabled: true,
            reduced_requests: true,
            energy_efficient_design: true,
        };
        assert!(recommendations(&details).is_empty());
    }

    #[test]
    fn each_failed_criterion_yields_one_entry() {
        let advice = recommendations(&CriteriaResult::default());
        assert_eq!(advice.len(), 5);
        assert_eq!(advice[0].id, "rec.images.modern_formats");
        assert_eq!(advice[4].id, "rec.design.efficiency");
    }
}
