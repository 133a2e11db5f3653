// Stack inference: job description in, canonical technology list out.
// The only LLM call goes through llm_client; everything after it is pure.

pub mod canonical;
pub mod handlers;
pub mod normalize;
pub mod parse;
pub mod prompts;
pub mod service;
