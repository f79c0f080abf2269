pub mod auth;
pub mod cloud;
pub mod config;
pub mod entrance;
pub mod remote_file;
