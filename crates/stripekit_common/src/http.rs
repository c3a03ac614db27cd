//! HTTP utilities.

// Include the client module
pub mod client;
