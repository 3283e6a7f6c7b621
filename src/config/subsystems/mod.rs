pub mod matcher;
pub mod llm;
pub mod online;

pub use matcher::MatcherConfig;
pub use llm::LlmConfig;
pub use online::OnlineConfig;
