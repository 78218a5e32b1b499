//! # hackbright - Hackbright Project Tracker
//!
//! A front end for a database of students, class projects, and the grades
//! students receive on those projects, driven by a line-based command loop.

pub mod cli;
pub mod command;
pub mod db;
pub mod error;
pub mod models;
pub mod output;
pub mod repl;

pub use db::Database;
pub use error::{HbaError, Result};
pub use models::*;
