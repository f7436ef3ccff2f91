//! Storage layer: the credential store (`users`) and the task repository
//! (`tasks`). Every function takes the pool as an explicit argument so the
//! whole layer can be exercised against a test-scoped database.

pub mod tasks;
pub mod users;
