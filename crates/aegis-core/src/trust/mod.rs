pub mod alerts;
pub mod classify;
