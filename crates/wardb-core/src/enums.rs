//! Enumeration types used by the analysis models.
//!
//! Each enum mirrors an integer-coded column in the source database;
//! `from_code` converts the stored code and rejects anything unknown.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Crew proficiency level (database codes 1-5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Novice,
    Cadet,
    #[default]
    Regular,
    Veteran,
    Ace,
}

/// Terminal attack maneuver flown by a missile target (weapon codes 6121-6123).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalManeuver {
    /// Climb then dive onto the target.
    PopUp,
    /// Lateral S-weave on the attack run.
    ZigZag,
    /// Randomized jinking.
    Random,
}

/// Missile seeker guidance mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidanceMode {
    /// Active or semi-active radar homing — signature penalty keys off RCS.
    #[default]
    Radar,
    /// Infrared homing — signature penalty keys off IR detection distance.
    Infrared,
}

/// Target aspect for direction-dependent radar cross sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Front,
    Side,
    Rear,
}

impl Proficiency {
    /// Resolve a database proficiency code (1-5).
    pub fn from_code(code: i64) -> ModelResult<Self> {
        match code {
            1 => Ok(Self::Novice),
            2 => Ok(Self::Cadet),
            3 => Ok(Self::Regular),
            4 => Ok(Self::Veteran),
            5 => Ok(Self::Ace),
            _ => Err(ModelError::InvalidEnum {
                kind: "proficiency",
                code,
            }),
        }
    }
}

impl TerminalManeuver {
    /// Resolve a weapon capability code (6121-6123).
    pub fn from_code(code: i64) -> ModelResult<Self> {
        match code {
            6121 => Ok(Self::PopUp),
            6122 => Ok(Self::ZigZag),
            6123 => Ok(Self::Random),
            _ => Err(ModelError::InvalidEnum {
                kind: "terminal maneuver",
                code,
            }),
        }
    }
}

impl GuidanceMode {
    /// Resolve a database guidance-mode code (1 = radar, 2 = infrared).
    pub fn from_code(code: i64) -> ModelResult<Self> {
        match code {
            1 => Ok(Self::Radar),
            2 => Ok(Self::Infrared),
            _ => Err(ModelError::InvalidEnum {
                kind: "guidance mode",
                code,
            }),
        }
    }
}
