// Listing content generation: sections, prompt templates, request building,
// keyword suggestion, and the per-session content store.
// All LLM calls go through llm_client; nothing here talks HTTP to the model.

pub mod builder;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod sections;
pub mod store;
