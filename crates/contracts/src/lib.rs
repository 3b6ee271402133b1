pub mod catalog;
pub mod export;
pub mod query;
pub mod stats;
pub mod system;
