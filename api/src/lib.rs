//! HTTP surface of the Recipe API: application state, routes, DTOs and
//! error mapping. The binary in `main.rs` wires real infrastructure into
//! [`app::create_app`]; tests wire in-memory repositories instead.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
