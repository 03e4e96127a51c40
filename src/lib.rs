//! # Todo API Server Library
//!
//! This library provides the core functionality for the todo API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `db`: Connection pool and migrations
//! - `error`: Error handling and HTTP response mapping
//! - `models`: Database models and data structures
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
