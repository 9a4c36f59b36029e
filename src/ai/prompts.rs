/// Fixed instruction for every generation call. The output shape itself is
/// enforced separately via the response schema in the request's
/// generationConfig.
pub const SYSTEM_PROMPT: &str = r#"
You are a test case generation expert. Use the provided prompt to generate a set of test cases.
Test cases should be comprehensive and cover various scenarios, including positive, negative, and edge cases.
Give each test case a short unique id of the form "TC-001", a description of the scenario, and the expected result.
Return an empty array if no meaningful test cases can be derived from the prompt.
"#;

/// Interpolates the user's feature description into the fixed request
/// template.
pub fn user_prompt(prompt: &str) -> String {
    format!("Generate test cases for the following functionality:\n\n{prompt}")
}
