//! Spin session state machine
//!
//! `Idle -> Spinning -> Settled`, driven by elapsed time the same way a
//! fixed-step simulation is: the host calls [`WheelSession::advance`] from
//! its frame loop or timer, and the winner resolves exactly once when the
//! settle duration runs out.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::resolve::resolve_winner;
use super::rotation::{RngState, generate_rotation_in};
use crate::error::{RosterError, WheelError};
use crate::roster::Roster;
use crate::settings::Settings;

/// A resolved spin result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Segment index at spin time
    pub index: usize,
    pub label: String,
}

/// Current phase of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpinPhase {
    /// Nothing in flight
    Idle,
    /// Wheel is turning toward `target`
    Spinning {
        target: f64,
        /// Names as rendered when the spin started
        segments: Vec<String>,
        remaining_ms: u32,
    },
    /// Winner is known
    Settled { winner: Winner },
}

/// Outcome of a spin request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    /// A new spin began; the renderer should animate to `target`
    Started { target: f64 },
    /// A spin was already running, nothing changed
    Ignored,
}

/// Spin parameters taken from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinConfig {
    pub settle_duration_ms: u32,
    pub min_spins: f64,
    pub max_spins: f64,
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SpinConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            settle_duration_ms: settings.settle_duration_ms,
            min_spins: settings.min_spins,
            max_spins: settings.max_spins,
            pointer_angle: settings.pointer_angle,
        }
    }
}

/// One wheel: its names, accumulated rotation and spin phase
#[derive(Debug, Clone)]
pub struct WheelSession {
    config: SpinConfig,
    roster: Roster,
    /// Absolute rotation in degrees, never reset
    rotation: f64,
    phase: SpinPhase,
    /// Whether the result dialog should be shown
    result_visible: bool,
    rng_state: RngState,
    rng: Pcg32,
}

impl WheelSession {
    /// Create a session with the given seed
    pub fn new(roster: Roster, config: SpinConfig, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            config,
            roster,
            rotation: 0.0,
            phase: SpinPhase::Idle,
            result_visible: false,
            rng: rng_state.to_rng(),
            rng_state,
        }
    }

    /// Create a session from stored settings
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let roster = Roster::new().with_duplicate_policy(settings.reject_duplicates);
        Self::new(roster, SpinConfig::from(settings), seed)
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    /// Accumulated rotation (what the renderer should show)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    pub fn winner(&self) -> Option<&Winner> {
        match &self.phase {
            SpinPhase::Settled { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// Hide the result without touching the winner
    pub fn dismiss(&mut self) {
        self.result_visible = false;
    }

    /// Start a spin from `Idle` or `Settled`
    ///
    /// Re-entrant calls while spinning are ignored, not queued.
    pub fn spin(&mut self) -> Result<SpinRequest, WheelError> {
        if self.is_spinning() {
            log::warn!("Spin requested while spinning, ignored");
            return Ok(SpinRequest::Ignored);
        }
        if self.roster.is_empty() {
            return Err(WheelError::NoSegments);
        }

        let target = generate_rotation_in(
            self.rotation,
            self.config.min_spins,
            self.config.max_spins,
            &mut self.rng,
        );
        self.rotation = target;
        self.result_visible = false;
        self.phase = SpinPhase::Spinning {
            target,
            segments: self.roster.names().to_vec(),
            remaining_ms: self.config.settle_duration_ms,
        };

        log::info!(
            "Spinning {} names to {:.1}° ({} ms)",
            self.roster.len(),
            target,
            self.config.settle_duration_ms
        );
        Ok(SpinRequest::Started { target })
    }

    /// Advance the settle timer. Returns the winner on the call that settles.
    pub fn advance(&mut self, elapsed_ms: u32) -> Result<Option<Winner>, WheelError> {
        let SpinPhase::Spinning {
            target,
            segments,
            remaining_ms,
        } = &mut self.phase
        else {
            return Ok(None);
        };

        *remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
        if *remaining_ms > 0 {
            return Ok(None);
        }

        // Resolve against the names captured at spin time, whatever the
        // roster looks like now.
        let index = resolve_winner(*target, segments.len(), self.config.pointer_angle)?;
        let label = segments
            .get(index)
            .cloned()
            .ok_or(WheelError::IndexOutOfRange {
                index,
                len: segments.len(),
            })?;
        let winner = Winner { index, label };

        log::info!("Wheel settled on {:?} (index {})", winner.label, winner.index);
        self.phase = SpinPhase::Settled {
            winner: winner.clone(),
        };
        self.result_visible = true;
        Ok(Some(winner))
    }

    /// Run the rest of the settle timer at once
    pub fn settle(&mut self) -> Result<Option<Winner>, WheelError> {
        match &self.phase {
            SpinPhase::Spinning { remaining_ms, .. } => {
                let remaining = *remaining_ms;
                self.advance(remaining)
            }
            _ => Ok(None),
        }
    }

    /// Add a name to the wheel
    pub fn add_name(&mut self, raw: &str) -> Result<usize, RosterError> {
        let result = self.roster.add(raw);
        if let Err(e) = &result {
            log::warn!("Rejected name: {}", e);
        }
        result
    }

    /// Remove a name by index. A shown result is discarded.
    pub fn remove_name(&mut self, index: usize) -> Result<String, WheelError> {
        let len = self.roster.len();
        let removed = self
            .roster
            .remove_at(index)
            .ok_or(WheelError::IndexOutOfRange { index, len })?;
        if matches!(self.phase, SpinPhase::Settled { .. }) {
            self.phase = SpinPhase::Idle;
            self.result_visible = false;
        }
        Ok(removed)
    }

    /// Replace every name, e.g. when loading a saved list
    pub fn replace_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roster.replace(names);
        if matches!(self.phase, SpinPhase::Settled { .. }) {
            self.phase = SpinPhase::Idle;
            self.result_visible = false;
        }
    }

    /// Take the winner off the wheel and return to `Idle`
    pub fn remove_winner(&mut self) -> Result<Winner, WheelError> {
        let SpinPhase::Settled { winner } = &self.phase else {
            return Err(WheelError::NotSettled);
        };
        let winner = winner.clone();

        let at_index = self.roster.get(winner.index) == Some(winner.label.as_str());
        let removed = if at_index {
            self.roster.remove_at(winner.index).is_some()
        } else {
            self.roster.remove_label(&winner.label)
        };
        if !removed {
            log::warn!("Winner {:?} is no longer on the wheel", winner.label);
        }

        self.phase = SpinPhase::Idle;
        self.result_visible = false;
        Ok(winner)
    }
}
