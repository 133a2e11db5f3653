// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs next to it and composes these.

/// System prompt fragment that enforces a bare JSON array as output.
pub const JSON_ARRAY_ONLY: &str = "You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
