use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::homekit::HeatingCoolingState;

/// Operation mode as the AC endpoint reports it. The `Cold` variant rides
/// on the wire as `"cool"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AcMode {
    Off,
    Cold,
    Hot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum FanSpeed {
    #[default]
    Auto,
    Low,
    Medium,
    High,
}

/// Last known device state. Shared between the accessory's refresh and
/// translate operations; may be stale between refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct AcState {
    pub mode: AcMode,
    pub temperature: f32,
}

impl AcMode {
    /// Wire strings other than `"off"` and `"hot"` all decode to `Cold`.
    pub fn from_wire(s: &str) -> AcMode {
        match s {
            "off" => AcMode::Off,
            "hot" => AcMode::Hot,
            _ => AcMode::Cold,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            AcMode::Off => "off",
            AcMode::Cold => "cool",
            AcMode::Hot => "hot",
        }
    }

    pub fn to_homekit(self) -> HeatingCoolingState {
        match self {
            AcMode::Off => HeatingCoolingState::Off,
            AcMode::Hot => HeatingCoolingState::Heat,
            AcMode::Cold => HeatingCoolingState::Cool,
        }
    }

    pub fn from_homekit(state: HeatingCoolingState) -> AcMode {
        match state {
            HeatingCoolingState::Off => AcMode::Off,
            HeatingCoolingState::Heat => AcMode::Hot,
            _ => AcMode::Cold,
        }
    }
}

impl From<String> for AcMode {
    fn from(value: String) -> AcMode {
        AcMode::from_wire(&value)
    }
}

impl From<AcMode> for String {
    fn from(value: AcMode) -> String {
        value.as_wire().to_string()
    }
}

impl Display for AcMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl From<u8> for FanSpeed {
    fn from(value: u8) -> FanSpeed {
        match value {
            1 => FanSpeed::Low,
            2 => FanSpeed::Medium,
            3 => FanSpeed::High,
            _ => FanSpeed::Auto,
        }
    }
}

impl Default for AcState {
    fn default() -> Self {
        AcState {
            mode: AcMode::Off,
            temperature: 22.0,
        }
    }
}
