//! Runtime tuning configuration read from and written to the device.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapConfig {
    pub mouse: MouseConfig,
    pub key_resolver: KeyResolverConfig,
}

/// Pointer emulation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseConfig {
    /// Layer activated automatically while the pointer moves.
    pub auto_mouse_layer: u8,
    /// How long the auto layer stays active after the last movement, in ms.
    pub auto_mouse_duration_ms: u32,
    /// Movement events needed before the auto layer engages.
    pub auto_mouse_threshold: u8,
    pub scroll_divider_x: i8,
    pub scroll_divider_y: i8,
}

/// Timing thresholds for the firmware-side key resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResolverConfig {
    pub tap_hold: TapHoldConfig,
    pub tap_dance: TapDanceConfig,
    pub combo: ComboConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapHoldConfig {
    pub threshold_ms: u32,
    /// Resolve to hold as soon as another key is pressed, even before the
    /// threshold elapses.
    pub hold_on_other_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapDanceConfig {
    pub threshold_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboConfig {
    pub threshold_ms: u32,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            mouse: MouseConfig {
                auto_mouse_layer: 1,
                auto_mouse_duration_ms: 500,
                auto_mouse_threshold: 1,
                scroll_divider_x: 20,
                scroll_divider_y: -12,
            },
            key_resolver: KeyResolverConfig {
                tap_hold: TapHoldConfig {
                    threshold_ms: 200,
                    hold_on_other_key: true,
                },
                tap_dance: TapDanceConfig { threshold_ms: 250 },
                combo: ComboConfig { threshold_ms: 50 },
            },
        }
    }
}
