//! Shared plumbing for the workspace: logging setup, startup environment
//! checks and the small wire types returned by the meta endpoints.

pub mod types;
pub mod utils;
pub mod env;
