// src/models.rs

pub mod maintenance;
pub mod requirement;
