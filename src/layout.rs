//! Physical layout description.
//!
//! The device publishes its layout as KLE JSON wrapped in a `{"keymap": ...}`
//! object. Each physical key carries a `"row,col"` matrix label in its first
//! legend; that label is the join key against the keymap, and the geometry is
//! carried along for the presentation layer only.

use serde::{Deserialize, Serialize};

use crate::{RemapKitError, RkResult};

/// Position, size and rotation of one physical key, in keyboard units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalKey {
    /// Matrix label, expected as `"<row>,<col>"`. `None` if the layout key
    /// has no legend.
    pub label: Option<String>,
    pub shape: KeyShape,
}

impl PhysicalKey {
    /// Parses the matrix label into `(row, col)`.
    pub fn matrix_position(&self) -> RkResult<(u8, u8)> {
        let label = self.label.as_deref().ok_or_else(|| {
            RemapKitError::Parse(format!(
                "physical key at ({}, {}) has no matrix label",
                self.shape.x, self.shape.y
            ))
        })?;
        let (row, col) = label.split_once(',').ok_or_else(|| {
            RemapKitError::Parse(format!(
                "malformed matrix label {label:?} (expected \"row,col\")"
            ))
        })?;
        let row = row.trim().parse::<u8>().map_err(|_| {
            RemapKitError::Parse(format!("matrix label {label:?} has a non-numeric row"))
        })?;
        let col = col.trim().parse::<u8>().map_err(|_| {
            RemapKitError::Parse(format!("matrix label {label:?} has a non-numeric col"))
        })?;
        Ok((row, col))
    }
}

/// Ordered list of physical keys. Iteration order is the layout's own key
/// order and determines snapshot ordering downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescription {
    pub keys: Vec<PhysicalKey>,
}

#[derive(Deserialize)]
struct LayoutJson {
    keymap: kle_serial::Keyboard,
}

impl LayoutDescription {
    pub fn from_kle_json(content: &str) -> RkResult<Self> {
        let parsed: LayoutJson = serde_json::from_str(content)
            .map_err(|err| RemapKitError::Parse(format!("invalid layout JSON: {err}")))?;
        Ok(Self::from_kle(parsed.keymap))
    }

    pub fn from_kle_value(value: serde_json::Value) -> RkResult<Self> {
        let parsed: LayoutJson = serde_json::from_value(value)
            .map_err(|err| RemapKitError::Parse(format!("invalid layout JSON: {err}")))?;
        Ok(Self::from_kle(parsed.keymap))
    }

    fn from_kle(keyboard: kle_serial::Keyboard) -> Self {
        let keys = keyboard
            .keys
            .iter()
            .map(|key| {
                // KLE legends can be multi-line; only the first line is the
                // matrix label.
                let label = key
                    .legends
                    .first()
                    .and_then(|legend| legend.as_ref())
                    .map(|legend| legend.text.lines().next().unwrap_or("").trim().to_string())
                    .filter(|text| !text.is_empty());
                PhysicalKey {
                    label,
                    shape: KeyShape {
                        x: key.x as f32,
                        y: key.y as f32,
                        width: key.width as f32,
                        height: key.height as f32,
                        rotation: key.rotation as f32,
                    },
                }
            })
            .collect();
        Self { keys }
    }
}
