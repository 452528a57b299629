// Shared types
pub mod types;
mod macros;

// Modular tools
pub mod check;
pub mod extract;
