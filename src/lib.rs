pub mod commands;
pub mod config;
pub mod connection;
pub mod entity;
pub mod keyboards;
pub mod migration;
pub mod types;
