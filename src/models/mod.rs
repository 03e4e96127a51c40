/// Database models
///
/// - `todo`: the sole domain entity and its SQL operations

pub mod todo;
