//! Wheel of Names - a spinning name picker
//!
//! Core modules:
//! - `wheel`: Winner selection (rotation generation, segment resolution, spin session)
//! - `roster`: The editable list of names on the wheel
//! - `lists`: Named saved lists
//! - `palette`: Segment colors and text contrast
//! - `settings`: User preferences
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod lists;
pub mod palette;
pub mod roster;
pub mod settings;
pub mod wheel;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{ColorError, ListsError, RosterError, WheelError};
pub use lists::SavedLists;
pub use palette::{Palette, Rgb};
pub use roster::Roster;
pub use settings::Settings;
pub use wheel::{SpinPhase, SpinRequest, WheelSession, Winner, generate_rotation, resolve_winner};

/// Wheel configuration constants
pub mod consts {
    /// One full turn, in degrees
    pub const FULL_TURN: f64 = 360.0;

    /// Pointer sits at the top of the wheel (0° points right, clockwise positive)
    pub const POINTER_ANGLE: f64 = -90.0;

    /// Offset applied to segment 0 so that it starts under the pointer
    pub const SEGMENT_ORIGIN: f64 = -90.0;

    /// Time between spin start and winner resolution
    pub const SETTLE_DURATION_MS: u32 = 4000;

    /// Whole turns per spin, drawn from [MIN_SPINS, MAX_SPINS)
    pub const MIN_SPINS: f64 = 5.0;
    pub const MAX_SPINS: f64 = 8.0;
}

/// Normalize an angle in degrees to [0, 360)
///
/// `%` keeps the sign of the dividend, so negative input needs the second
/// reduction.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % consts::FULL_TURN) + consts::FULL_TURN) % consts::FULL_TURN
}
