//! Wall segment records.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallKind {
    /// Horizontal segment on top of cell `(x, y)`.
    Beam,
    /// Vertical segment on the left of cell `(x, y)`.
    Pole,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WallSpec {
    pub kind: WallKind,
    pub x:    i32,
    pub y:    i32,
}

impl WallSpec {
    pub fn beam(x: i32, y: i32) -> Self {
        Self { kind: WallKind::Beam, x, y }
    }

    pub fn pole(x: i32, y: i32) -> Self {
        Self { kind: WallKind::Pole, x, y }
    }
}
