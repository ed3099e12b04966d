//! Network layer - HTTP request execution
//!
//! The dispatcher takes a resolved request and hands back the raw response.

pub mod client;

pub use client::{create_client, Dispatch, ReqwestDispatcher};
