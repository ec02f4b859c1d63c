//! HTTP + `WebSocket` binding for the Gather platform core.
//!
//! This crate is transport glue: it mirrors the core's operation
//! contracts onto REST routes and a change-stream `WebSocket` endpoint
//! without adding semantics of its own. The engine crates
//! (`gather-store`, `gather-bus`, `gather-core`) stay wire-format
//! agnostic; everything HTTP-shaped lives here.
//!
//! # Modules
//!
//! - [`state`] -- shared [`AppState`](state::AppState) (directory + bus)
//! - [`handlers`] -- REST endpoint handlers, one submodule per entity
//! - [`ws`] -- the `/ws/changes/{topic}` stream
//! - [`router`] -- route assembly with CORS and tracing layers
//! - [`server`] -- bind-and-serve lifecycle
//! - [`error`] -- [`ApiError`](error::ApiError) and its HTTP mapping

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;
