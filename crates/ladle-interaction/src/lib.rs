pub mod groq_api_agent;
pub mod prompt;

pub use groq_api_agent::GroqApiAgent;
