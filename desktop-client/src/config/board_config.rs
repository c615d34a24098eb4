use common::config::{Validate, validate_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct BoardConfig {
    pub cell_size: f32,
    pub gap: f32,
}

impl BoardConfig {
    /// Side of the whole grid: three cells plus a gap around and between them.
    pub fn board_side(&self) -> f32 {
        3.0 * self.cell_size + 4.0 * self.gap
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        validate_range("cell_size", self.cell_size, 32.0..=200.0)?;
        validate_range("gap", self.gap, 0.0..=16.0)?;
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: 64.0,
            gap: 4.0,
        }
    }
}
