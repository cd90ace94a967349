// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod enquiry;
pub mod session;
