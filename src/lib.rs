pub mod backend;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod scanner;
