const TEMPLATE: &str = include_str!("../templates/feedback_v2.md");

/// Everything the prompt template needs for one pass.
#[derive(Debug, serde::Serialize)]
pub struct PromptContext<'a> {
    pub motion: &'a str,
    pub motion_type: &'a str,
    pub position: &'a str,
    pub expected_duration_minutes: u32,
    /// `MM:SS` of the measured speech length.
    pub actual_time: String,
    pub chunked_transcript: &'a str,
}

/// Classify a motion by its wording: "this house would" debates policy,
/// "this house prefers" compares worlds, anything else argues principle.
pub fn motion_type(motion: &str) -> &'static str {
    let lower = motion.to_lowercase();
    if lower.contains("this house would") {
        "policy"
    } else if lower.contains("this house prefers") {
        "comparison"
    } else {
        "principle"
    }
}

pub fn build_prompt(ctx: &PromptContext<'_>) -> Result<String, minijinja::Error> {
    let mut env = minijinja::Environment::new();
    env.add_template("feedback_v2", TEMPLATE)?;
    env.get_template("feedback_v2")?.render(ctx)
}
