//! Keyword table and the high-intensity classifier.

/// Phrases that mark an article as high-intensity. Stored lowercase.
pub static HIGH_INTENSITY_KEYWORDS: &[&str] = &[
    "price surge",
    "price spike",
    "price collapse",
    "price plunge",
    "opec",
    "oil production cut",
    "production increase",
    "supply disruption",
    "supply chain",
    "shortage",
    "sanctions",
    "embargo",
    "geopolitical",
    "refinery fire",
    "pipeline attack",
    "explosion",
    "strategic reserve",
    "inventory decline",
    "inventory surge",
    "demand surge",
    "demand destruction",
    "hurricane",
    "storm disruption",
    "breaking:",
    "urgent:",
    "alert:",
];

/// True if `text` contains any keyword, ignoring case.
pub fn is_high_intensity(text: &str) -> bool {
    let lower = text.to_lowercase();
    HIGH_INTENSITY_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Title or description match. A missing description never matches.
pub fn article_is_high_intensity(title: &str, description: Option<&str>) -> bool {
    is_high_intensity(title) || is_high_intensity(description.unwrap_or(""))
}

/// Keywords found in `text`, in table order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    HIGH_INTENSITY_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}
