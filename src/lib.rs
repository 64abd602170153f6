pub mod agent_parser;
pub mod args;
pub mod export;
pub mod progress_bar_manager;
pub mod reference_data;
pub mod ua_error;
pub mod user_agents;

pub use crate::ua_error::UaError;
pub use crate::user_agents::{generate_batch, generate_one};
