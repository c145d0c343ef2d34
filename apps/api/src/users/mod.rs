// User settings and data export.

pub mod handlers;
pub mod settings;
