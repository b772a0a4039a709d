//! Pass-through configuration for collaborators that drive assembly.
//!
//! The selector never reads these values. They tell host code when to assemble and
//! which randomness source to hand in.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// When the host runs assembly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StartingMethod {
    /// As soon as the owning object is created.
    #[default]
    Awake,
    /// Only when the host calls in explicitly.
    OnCall,
}

/// How the host seeds the randomness source it injects.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RandomSeedMode {
    /// The host's default random stream.
    #[default]
    Default,
    /// A seed supplied in [`ModularConfig::manual_seed`].
    Manual,
    /// A seed derived by the host from the object's position.
    PositionBased,
}

/// Configuration for an [`crate::catalog::assembly::Assembler`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ModularConfig {
    pub starting_method: StartingMethod,
    pub seed_mode: RandomSeedMode,
    /// Required when `seed_mode` is [`RandomSeedMode::Manual`].
    pub manual_seed: Option<u64>,
    /// Also draw for part sets whose `active` flag is off.
    pub include_inactive: bool,
}

impl ModularConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starting_method(mut self, starting_method: StartingMethod) -> Self {
        self.starting_method = starting_method;
        self
    }

    pub fn with_seed_mode(mut self, seed_mode: RandomSeedMode) -> Self {
        self.seed_mode = seed_mode;
        self
    }

    /// Sets a manual seed and switches the seed mode to [`RandomSeedMode::Manual`].
    pub fn with_manual_seed(mut self, seed: u64) -> Self {
        self.seed_mode = RandomSeedMode::Manual;
        self.manual_seed = Some(seed);
        self
    }

    pub fn with_include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }

    /// True when assembly should run as part of object creation.
    pub fn assembles_on_creation(&self) -> bool {
        self.starting_method == StartingMethod::Awake
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        match (self.seed_mode, self.manual_seed) {
            (RandomSeedMode::Manual, None) => Err(Error::InvalidConfig(
                "seed_mode Manual requires manual_seed".into(),
            )),
            (RandomSeedMode::Default | RandomSeedMode::PositionBased, Some(_)) => {
                Err(Error::InvalidConfig(
                    "manual_seed is only used with seed_mode Manual".into(),
                ))
            }
            _ => Ok(()),
        }
    }
}
