// Mood analytics: pure aggregation over a user's journal entries.
// Nothing here touches the store except `handlers`; every other module is a
// side-effect-free transform over an in-memory entry slice.

pub mod emotions;
pub mod handlers;
pub mod range;
pub mod report;
pub mod streak;
pub mod summary;
pub mod trend;
