//! Service layer providing the course-module operations on top of models.
//! - Turns loosely-typed request bodies into validated inputs before any store call.
//! - Reuses validation and entity definitions in `models` crate.
//! - Owns schema bootstrap (migrations + first-run seed data).

pub mod errors;
pub mod bootstrap;
pub mod modules;
pub mod visits;
#[cfg(test)]
pub mod test_support;
