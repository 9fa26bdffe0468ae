/// Liveness payload.
pub mod health;
