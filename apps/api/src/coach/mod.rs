// Pulse Coach: empathetic chat replies streamed from the LLM, plus
// deterministic reflection helpers (insight line, affirmation).
// All LLM calls go through llm_client — no direct provider calls here.

pub mod crisis;
pub mod handlers;
pub mod model;
pub mod prompts;
pub mod reflection;

pub use model::CoachModel;
