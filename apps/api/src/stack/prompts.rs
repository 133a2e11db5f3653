// Prompt constants for stack inference.
// Reuses the JSON-array fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ARRAY_ONLY;

/// Extraction is not creative work; keep sampling close to deterministic.
pub const STACK_TEMPERATURE: f32 = 0.1;

/// Enough for twenty short names plus JSON punctuation.
pub const STACK_MAX_OUTPUT_TOKENS: u32 = 300;

const STACK_SYSTEM_ROLE: &str = "You extract the technology stack from job descriptions. \
    Return ONLY a JSON array of distinct technology, framework, language, database, \
    cloud and tool names as strings. No prose.";

/// Example of the expected output shape, appended to every user message.
pub const STACK_OUTPUT_EXAMPLE: &str = r#"["React", "Node.js", "PostgreSQL", "Docker"]"#;

/// System instruction for stack extraction.
pub fn stack_system_prompt() -> String {
    format!("{STACK_SYSTEM_ROLE} {JSON_ARRAY_ONLY}")
}

/// User message: the full job description followed by the output example.
pub fn stack_user_prompt(job_description: &str) -> String {
    format!(
        "Job description:\n{job_description}\n\n\
         Return the technologies as a JSON array, for example: {STACK_OUTPUT_EXAMPLE}"
    )
}
