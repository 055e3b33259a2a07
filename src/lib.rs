pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod core;
pub mod ui;
