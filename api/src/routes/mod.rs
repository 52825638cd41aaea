//! Route handlers grouped by URL prefix

pub mod auth;
pub mod food_gpt;
pub mod recipes;
