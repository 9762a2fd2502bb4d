pub mod engine;
pub mod probability;
pub mod rules;
pub mod types;
