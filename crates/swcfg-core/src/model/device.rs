// ── Device domain types ──

use serde::{Deserialize, Serialize};

/// Model prefix shared by the switch product line (`MS120-8`, `MS390-48`, ...).
pub const SWITCH_MODEL_PREFIX: &str = "MS";

/// Device claimed into a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub serial: String,
    pub model: String,
}

impl Device {
    pub fn is_switch(&self) -> bool {
        is_switch_model(&self.model)
    }
}

/// Whether a model string belongs to the switch product line.
///
/// Only the first two characters are compared, case-sensitively.
pub fn is_switch_model(model: &str) -> bool {
    model.starts_with(SWITCH_MODEL_PREFIX)
}
