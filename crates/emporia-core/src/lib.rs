//! Cross-service helpers shared by the Emporia services.

pub mod health;
pub mod middleware;
pub mod pagination;
pub mod serde;
pub mod tracing;
