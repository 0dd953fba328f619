//! Winner selection
//!
//! All selection logic lives here and stays deterministic:
//! - Seeded RNG only
//! - Pure resolution from (rotation, segment count, pointer)
//! - Time enters only through `WheelSession::advance`

pub mod resolve;
pub mod rotation;
pub mod segment;
pub mod session;

pub use resolve::resolve_winner;
pub use rotation::{RngState, generate_rotation, generate_rotation_in};
pub use segment::SegmentArc;
pub use session::{SpinConfig, SpinPhase, SpinRequest, WheelSession, Winner};
