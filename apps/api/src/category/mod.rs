//! Category Resolver — maps user text plus a sentiment score to a single
//! target content category via prioritized rule matching.

/// Ordered (category, keywords) rules evaluated top-to-bottom over the
/// lower-cased text. First matching rule wins; topic keywords always beat
/// the sentiment rules below.
const TOPIC_RULES: &[(&str, &[&str])] = &[
    (
        "ProgrammerHumor",
        &["code", "python", "bug", "error", "java", "dev", "linux"],
    ),
    ("aww", &["cat", "dog", "pet", "animal", "cute"]),
    (
        "school_memes",
        &["school", "exam", "study", "student", "class", "teacher"],
    ),
    ("antiwork", &["work", "job", "boss", "office", "meeting"]),
];

/// Sentiment thresholds for the vibe rules. Both boundaries are inclusive.
const POSITIVE_VIBE: f64 = 0.2;
const NEGATIVE_VIBE: f64 = -0.2;

/// Defensive fallback. Reachable only when the score is NaN and no topic
/// keyword matched.
pub const FALLBACK_CATEGORY: &str = "memes";

/// Resolves the target category for `text` given its compound score.
///
/// Matching is substring containment per keyword, not word-boundary
/// tokenization — "dedicated" matches "cat". Intentional.
pub fn resolve(text: &str, sentiment_score: f64) -> &'static str {
    let text_lower = text.to_lowercase();

    for (category, keywords) in TOPIC_RULES {
        if keywords.iter().any(|kw| text_lower.contains(kw)) {
            return category;
        }
    }

    if sentiment_score >= POSITIVE_VIBE {
        "wholesomememes"
    } else if sentiment_score <= NEGATIVE_VIBE {
        "2meirl4meirl"
    } else if sentiment_score.is_nan() {
        FALLBACK_CATEGORY
    } else {
        "me_irl"
    }
}
