use chrono::{Datelike, NaiveDate};
use serde_json::{json, Value};

use crate::normalize::{is_fallback, normalize, RawOutput};

// ── Composition ───────────────────────────────────────

/// Normalize raw model output; if it falls back, discard the fallback and
/// return deterministic template content instead. This is the standard
/// degradation path for every proposal feature: users get rule-based content,
/// never an error page.
pub fn normalize_or<F>(raw: RawOutput, generate: F) -> Value
where
    F: FnOnce() -> Value,
{
    let value = normalize(raw, None);
    if is_fallback(&value) {
        log::info!("AI normalization fell back; substituting template content");
        generate()
    } else {
        value
    }
}

// ── Proposal Template ─────────────────────────────────

/// Rule-based puja proposal, shaped exactly like the AI-generated one.
/// Same inputs always produce the same output.
pub fn proposal_template(deity: &str, occasion: &str, date: NaiveDate) -> Value {
    let (themes, benefits) = deity_profile(deity);
    let date_str = date.format("%Y-%m-%d").to_string();
    json!({
        "pujaName": format!("{} {} Puja", occasion, deity),
        "deity": deity,
        "occasion": occasion,
        "date": date_str,
        "description": format!(
            "A traditional {} puja dedicated to {}, performed by experienced priests with \
             full vedic rituals. Participate from anywhere and receive blessings on {}.",
            occasion, deity, date.format("%-d %B %Y")
        ),
        "focusThemes": themes,
        "benefits": benefits,
        "targetAudience": "Devotees seeking blessings, spiritual growth, and family well-being",
    })
}

/// Curated theme/benefit sets for commonly proposed deities. Unknown deities
/// get a generic devotional set rather than an empty one.
fn deity_profile(deity: &str) -> (Vec<&'static str>, Vec<&'static str>) {
    match deity.trim().to_lowercase().as_str() {
        "ganesha" | "ganesh" | "vinayaka" => (
            vec!["obstacle removal", "new beginnings", "wisdom", "success in ventures"],
            vec!["removal of obstacles", "success in new endeavors", "clarity of mind"],
        ),
        "lakshmi" | "mahalakshmi" => (
            vec!["wealth", "prosperity", "abundance", "good fortune"],
            vec!["financial stability", "prosperity in business", "household harmony"],
        ),
        "shiva" | "mahadev" | "shankara" => (
            vec!["transformation", "inner strength", "protection", "liberation"],
            vec!["protection from negativity", "inner peace", "spiritual progress"],
        ),
        "durga" | "devi" => (
            vec!["divine protection", "courage", "victory over adversity"],
            vec!["protection of family", "strength in difficult times", "fearlessness"],
        ),
        "hanuman" => (
            vec!["strength", "devotion", "courage", "protection from harm"],
            vec!["physical and mental strength", "protection during travel", "steadfast devotion"],
        ),
        "saraswati" => (
            vec!["knowledge", "learning", "arts", "eloquence"],
            vec!["success in studies", "creative inspiration", "clarity in speech"],
        ),
        "vishnu" | "narayana" => (
            vec!["preservation", "dharma", "peace", "family welfare"],
            vec!["harmony at home", "righteous living", "overall well-being"],
        ),
        _ => (
            vec!["devotion", "blessings", "spiritual growth"],
            vec!["divine blessings", "peace of mind", "spiritual merit"],
        ),
    }
}

// ── Monthly Themes Template ───────────────────────────

/// Rule-based monthly focus themes for the content calendar.
pub fn focus_themes_template(month: u32, year: i32) -> Value {
    let themes: Vec<&'static str> = match month {
        1 => vec!["new year resolutions", "Makar Sankranti", "sun worship", "fresh starts"],
        2 => vec!["Maha Shivaratri preparation", "devotion", "austerity"],
        3 => vec!["Holi", "spring renewal", "color and joy"],
        4 => vec!["Rama Navami", "Hanuman Jayanti", "new year (regional)"],
        5 => vec!["Akshaya Tritiya", "prosperity", "charitable giving"],
        6 => vec!["summer observances", "Ganga Dussehra", "purification"],
        7 => vec!["Guru Purnima", "gratitude to teachers", "Chaturmas begins"],
        8 => vec!["Raksha Bandhan", "Krishna Janmashtami", "family bonds"],
        9 => vec!["Ganesh Chaturthi", "new ventures", "obstacle removal"],
        10 => vec!["Navratri", "Durga Puja", "Dussehra", "victory of good"],
        11 => vec!["Diwali", "Lakshmi Puja", "light over darkness", "prosperity"],
        _ => vec!["Margashirsha observances", "year-end reflection", "gratitude"],
    };
    // First of the month anchors the calendar entry
    let anchor = NaiveDate::from_ymd_opt(year, month.clamp(1, 12), 1)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    json!({
        "focusThemes": themes,
        "keyDates": [anchor],
        "contentAngles": [
            "festival significance explainers",
            "how-to-participate guides",
            "devotee testimonial spotlights",
        ],
    })
}

/// Convenience: themes template for a chrono date.
pub fn focus_themes_for_date(date: NaiveDate) -> Value {
    focus_themes_template(date.month(), date.year())
}
