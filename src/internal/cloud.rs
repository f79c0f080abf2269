pub mod error;
pub mod functions;
pub mod raw_json;
