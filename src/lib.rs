// Library crate so the generation flow can be driven directly from tests.

pub mod ai {
    pub mod client;
    pub mod generator;
    pub mod prompts;
    pub mod schema_utils;
}
pub mod config;
pub mod error;
pub mod flow;
pub mod handler;
pub mod models;
pub mod routes;
pub mod state;
pub mod validate;

pub use models::{GenerationResult, PromptRequest, TestCase};
