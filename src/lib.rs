//! VAGA BLINDADA ROV Landing Page API Library
//!
//! Backend for the course landing page: static course content, lead capture,
//! lead listing, analytics events and a placeholder checkout.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Domain models, validation and errors.
//! - `data`: Data access layer.
//! - `app`: Router assembly and HTTP middleware.
//! - `config`: Configuration management.
//! - `course`: Static course page content.
//! - `db`: Database connection and pool management.
//! - `db_storage`: Lead and analytics storage.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `validation`: Input field rules.

pub mod api;
pub mod core;
pub mod data;

pub mod app;
pub mod config;
pub mod course;
pub mod db;
pub mod db_storage;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validation;
