//! Core translation engine module

pub mod config;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod provider;
pub mod service;
