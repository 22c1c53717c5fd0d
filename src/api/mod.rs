/// Module API - Enveloppe de réponse des handlers
pub mod result;

pub use result::{AppResponse, AppResult};
