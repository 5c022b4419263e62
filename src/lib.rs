pub mod config;
pub mod errors;
pub mod extraction;
pub mod graph;
pub mod interrefs;
pub mod pipeline;
pub mod resolution;
pub mod types;
