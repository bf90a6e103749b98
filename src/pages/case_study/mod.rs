//! Case Study Pages
//!
//! Customer stories: who uses QuestDB, for what, and what came of it.

pub mod counterflow;
