pub mod analyze;
pub mod prompt;
