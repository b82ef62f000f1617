pub mod assignment;
pub mod block;
pub mod reservation;
pub mod settings;
pub mod slot;
pub mod week;

use serde::{Deserialize, Serialize};

/// Uniform call result surfaced to the presentation layer: a success flag
/// and a human-readable message, never a thrown fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub success: bool,
    pub message: String,
}

impl OperationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
