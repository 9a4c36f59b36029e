/// Minimum length of a trimmed prompt worth sending to the model.
pub const MIN_PROMPT_LEN: usize = 10;

/// Decides whether a submitted prompt is well-formed enough to generate
/// test cases from: trim, then require at least [`MIN_PROMPT_LEN`]
/// characters.
///
/// This is a deliberately minimal heuristic, a placeholder for future
/// content-safety or PII checks. It is not a security boundary.
pub fn validate(prompt: &str) -> bool {
    prompt.trim().chars().count() >= MIN_PROMPT_LEN
}
