pub mod crawl;
pub mod download;
pub mod local;
pub mod remote;
