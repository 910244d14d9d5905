//! quotegen: a terminal inspirational-quote generator backed by a
//! managed GraphQL backend.
//!
//! The backend owns all persistence and compute; this crate only reads
//! the shared counter once at startup, drives the generator workflow
//! through a modal dialog, and renders the page.

pub mod backend;
pub mod config;
pub mod logging;
pub mod ui;
pub mod worker;
