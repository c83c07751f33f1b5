pub mod analysis;
pub mod llm;
pub mod research;
