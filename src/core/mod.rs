pub mod board;
pub mod config;
pub mod controller;
pub mod engine;
pub mod line;
pub mod selector;
pub mod slot;
