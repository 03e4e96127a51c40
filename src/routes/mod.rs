/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `todos`: Todo CRUD endpoints (list, get, create, update, delete)

pub mod health;
pub mod todos;
