// --- File: crates/payflow_common/src/http.rs ---
//! HTTP utilities shared by the payments clients.

pub mod client;
