pub mod config;
pub mod daily;
pub mod hint;
pub mod streak;
pub mod word;
