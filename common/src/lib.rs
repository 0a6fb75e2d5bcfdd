//! Shared models and view logic for the tutoring admin dashboard.
//!
//! Everything here is plain Rust with no browser dependency so the
//! frontend can stay a thin rendering layer and the behaviour can be
//! tested natively:
//!
//! - `model`: courses, students, faculty and notifications.
//! - `list_view`: search, filters, pagination and the row action menu.
//! - `form`: the draft/validate/submit state machine behind every dialog.
//! - `repository`: the storage seam plus its in-memory implementation.
//! - `config`: dashboard settings read from the host page.
//! - `seed`: the records the dashboard starts with.

pub mod config;
pub mod form;
pub mod list_view;
pub mod model;
pub mod repository;
pub mod seed;
