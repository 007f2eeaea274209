/// System prompt for proposal features
pub fn proposal_system() -> String {
    "You are a content strategist for a Hindu devotional services platform. You craft puja \
     proposals that are respectful, accurate about ritual tradition, and appealing to devotees. \
     Always respond in valid JSON format as specified. Do not include markdown fences or explanations outside the JSON."
        .to_string()
}

/// Generate a full puja content proposal for a deity and occasion
pub fn generate_proposal(deity: &str, occasion: &str, date: &str) -> String {
    format!(
        "Create a puja content proposal for a {} puja dedicated to {} on {}.\n\n\
         Include a compelling puja name, a 2-3 sentence description suitable for a marketing page, \
         3-5 focus themes, 3-5 devotee benefits, and the target audience.\n\
         Respond as JSON: {{\"pujaName\": \"...\", \"deity\": \"{}\", \"occasion\": \"{}\", \
         \"date\": \"{}\", \"description\": \"...\", \"focusThemes\": [\"...\"], \
         \"benefits\": [\"...\"], \"targetAudience\": \"...\"}}",
        occasion, deity, date, deity, occasion, date
    )
}

/// Suggest monthly focus themes for the content calendar
pub fn focus_themes(month: u32, year: i32) -> String {
    format!(
        "For month {} of {}, suggest focus themes for a puja content calendar.\n\
         Consider major Hindu festivals, auspicious periods, and seasonal observances in that month.\n\
         Respond as JSON: {{\"focusThemes\": [\"...\"], \"keyDates\": [\"...\"], \"contentAngles\": [\"...\"]}}",
        month, year
    )
}

/// Analyze proposal pipeline performance
pub fn performance_insight(proposal_count: u32, approved_count: u32, top_deities: &[String]) -> String {
    let deities = if top_deities.is_empty() {
        "none yet".to_string()
    } else {
        top_deities.join(", ")
    };
    format!(
        "This month the team generated {} puja proposals, of which {} were approved. \
         Most-proposed deities: {}.\n\n\
         Summarize what is working and recommend 2-4 concrete adjustments to the proposal mix.\n\
         Respond as JSON: {{\"summary\": \"...\", \"recommendations\": [\"...\"]}}",
        proposal_count, approved_count, deities
    )
}
