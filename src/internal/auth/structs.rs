pub mod cloud_auth;
pub mod session_token;
