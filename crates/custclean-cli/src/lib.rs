//! CLI library components for the customer cleaning pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
