pub mod catalog;
pub mod constraints;
pub mod daily;
pub mod generator;
pub mod hint;
pub mod history;
pub mod orchestrator;
pub mod streak;
pub mod theme;
pub mod word_loader;
