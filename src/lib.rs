// src/lib.rs
pub mod app;
pub mod filesystem;
pub mod hasher;
pub mod ui;
pub mod workflow;
