// Journal entries: create, list, and today's entry.

pub mod handlers;
pub mod validation;
