// src/models/mod.rs

pub mod answer;
pub mod enquiry;
pub mod question;
pub mod result;
pub mod session;
pub mod user;
