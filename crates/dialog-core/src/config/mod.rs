//! Configuration module for dialog-core

pub mod server_config;

pub use server_config::DialogServerConfig;
