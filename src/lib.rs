#![allow(non_snake_case)]

pub mod client;
pub mod model;

#[cfg(feature = "server")]
pub mod server;
