pub mod errors;
pub mod db;
pub mod module;
pub mod visit;

#[cfg(test)]
mod tests;
