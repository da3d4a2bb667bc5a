#![deny(unreachable_patterns)]
#![deny(unknown_lints)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]

pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod models;
pub mod routing;
pub mod server;
