pub mod domain;
pub mod service;

pub use domain::{CreateModuleInput, ModulePatch, NewModule, UpdateModuleInput};
