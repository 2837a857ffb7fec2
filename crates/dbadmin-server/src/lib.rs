//! # dbadmin-server
//!
//! HTTP boundary for the dbadmin auth gate.
//!
//! The handler builds an explicit request context from forwarded headers
//! and query parameters, drives the gate, and maps its outcome to a
//! response. Returning that response is what halts the pipeline in
//! production; tests inspect the returned value and keep running.

pub mod handler;
pub mod observability;
pub mod pages;

pub use handler::{AppState, AuthParams, gate_request, router};
