use crate::types::report::Rating;

/// Glyph and color for a rating, matching the badge the original indicator
/// painted: green check, yellow tilde, red cross, gray question mark when no
/// analysis is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub glyph: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

pub fn badge_for(rating: Option<Rating>) -> BadgeStyle {
    match rating {
        Some(Rating::Good) => BadgeStyle {
            glyph: "✓",
            color: "#22C55E",
            label: "good",
        },
        Some(Rating::Average) => BadgeStyle {
            glyph: "~",
            color: "#EAB308",
            label: "average",
        },
        Some(Rating::Poor) => BadgeStyle {
            glyph: "✗",
            color: "#EF4444",
            label: "poor",
        },
        None => BadgeStyle {
            glyph: "?",
            color: "#6B7280",
            label: "unknown",
        },
    }
}
