// src/lib.rs

pub mod advisor;
pub mod catalog;
pub mod common;
pub mod config;
pub mod db;
pub mod display;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
