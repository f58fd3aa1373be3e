//! Trivia API Library
//!
//! This library provides the request-handling surface for the trivia
//! application: question CRUD, category listing, free-text search, and
//! quiz question selection over a PostgreSQL store.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
