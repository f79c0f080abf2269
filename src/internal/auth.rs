pub mod error;
pub mod functions;
pub mod structs;
