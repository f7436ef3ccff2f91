//! The `smarttask` library crate.
//!
//! Contains the domain models, credential store, task repository,
//! authentication (password hashing, JWT issue/verify, bearer-token
//! middleware), routing configuration, and error handling for the SmartTask
//! service. The binary (`main.rs`) wires these together and runs the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
