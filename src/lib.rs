pub mod aggregate;
pub mod assessment;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod grade;
pub mod history;
pub mod reporting;
pub mod tree;
pub mod types;
