//! Key action and key code value types.
//!
//! A programmable key is described by a `KeyAction`, which wraps one or two
//! `KeyCode`s (or a tap-dance slot index). Both are closed sums: every variant
//! the firmware can report is listed here, and anything else coming off the
//! wire is rejected as an unknown variant instead of being coerced.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Standard keyboard scancodes (HID usage page 0x07).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Key {
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    LeftBracket = 0x2F,
    RightBracket = 0x30,
    Backslash = 0x31,
    NonUsHash = 0x32,
    Semicolon = 0x33,
    Quote = 0x34,
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    Application = 0x65,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Modifier {
    LeftCtrl = 0,
    LeftShift = 1,
    LeftAlt = 2,
    LeftGui = 3,
    RightCtrl = 4,
    RightShift = 5,
    RightAlt = 6,
    RightGui = 7,
}

/// Mouse buttons for the firmware's pointer emulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Mouse {
    Left = 0,
    Right = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Consumer-control usages (HID usage page 0x0C, abridged).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Media {
    PlayPause = 0,
    Next = 1,
    Previous = 2,
    Stop = 3,
    Mute = 4,
    VolumeUp = 5,
    VolumeDown = 6,
    BrightnessUp = 7,
    BrightnessDown = 8,
}

/// Firmware-internal functions that never reach the host as HID usages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Special {
    MouseScroll = 0,
    AutoMouseReset = 1,
    OutputUsb = 2,
    OutputBle = 3,
    BondClear = 4,
    FlashClear = 5,
    Bootloader = 6,
    PowerOff = 7,
}

/// Layer operations. The index must stay below the keymap's layer count,
/// which is checked when the action is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerOp {
    /// Layer is active while the key is held.
    Momentary(u8),
    /// Layer toggles on press.
    Toggle(u8),
}

/// A single HID-level effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    None,
    Key(Key),
    Modifier(Modifier),
    Mouse(Mouse),
    Media(Media),
    Special(Special),
    Layer(LayerOp),
}

impl KeyCode {
    /// The layer index this code references, if it is a layer operation.
    pub fn layer_ref(&self) -> Option<u8> {
        match self {
            KeyCode::Layer(LayerOp::Momentary(idx)) | KeyCode::Layer(LayerOp::Toggle(idx)) => {
                Some(*idx)
            }
            _ => None,
        }
    }
}

/// What a key does when actuated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// Defer to the action at the same position on a lower layer.
    #[default]
    Inherit,
    /// Emit one code.
    Normal(KeyCode),
    /// Emit two codes together. The pair is ordered: `Normal2(a, b)` and
    /// `Normal2(b, a)` are distinct actions.
    Normal2(KeyCode, KeyCode),
    /// Tap code on a quick press, hold code on a sustained one. The timing is
    /// resolved firmware-side.
    TapHold(KeyCode, KeyCode),
    /// Sticky code applied to exactly the next keypress.
    OneShot(KeyCode),
    /// Run the firmware-side tap-dance definition with this slot index.
    TapDance(u8),
}

impl KeyAction {
    /// Highest layer index referenced by any code in this action.
    pub fn max_layer_ref(&self) -> Option<u8> {
        match self {
            KeyAction::Normal(code) | KeyAction::OneShot(code) => code.layer_ref(),
            KeyAction::Normal2(first, second) | KeyAction::TapHold(first, second) => {
                match (first.layer_ref(), second.layer_ref()) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                }
            }
            KeyAction::Inherit | KeyAction::TapDance(_) => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::None => write!(f, "xxx"),
            KeyCode::Key(key) => write!(f, "{key}"),
            KeyCode::Modifier(modifier) => write!(f, "{modifier}"),
            KeyCode::Mouse(button) => write!(f, "M:{button}"),
            KeyCode::Media(usage) => write!(f, "Md:{usage}"),
            KeyCode::Special(func) => write!(f, "Sp:{func}"),
            KeyCode::Layer(LayerOp::Momentary(idx)) => write!(f, "MO({idx})"),
            KeyCode::Layer(LayerOp::Toggle(idx)) => write!(f, "TG({idx})"),
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::Inherit => write!(f, "___"),
            KeyAction::Normal(code) => write!(f, "{code}"),
            KeyAction::Normal2(first, second) => write!(f, "{first}+{second}"),
            KeyAction::TapHold(tap, hold) => write!(f, "{tap}/{hold}"),
            KeyAction::OneShot(code) => write!(f, "OS({code})"),
            KeyAction::TapDance(idx) => write!(f, "TD({idx})"),
        }
    }
}
