//! Session types shared across Emporia services.
//!
//! Provides JWT validation, the session-cookie builders, and the `Session`
//! extractor both services use to authenticate requests.

pub mod cookie;
pub mod session;
pub mod token;
