pub mod build_headers;
