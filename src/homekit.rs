//! Vocabulary of the home-automation host: characteristic identifiers and
//! the numeric values the host exchanges for them.

/// Heating/cooling state as the host encodes it (0 = off, 1 = heat,
/// 2 = cool, 3 = auto).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingCoolingState {
    Off,
    Heat,
    Cool,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureDisplayUnits {
    Celsius,
    Fahrenheit,
}

/// Characteristics of the thermostat service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Characteristic {
    CurrentHeatingCoolingState,
    TargetHeatingCoolingState,
    CurrentTemperature,
    TargetTemperature,
    TemperatureDisplayUnits,
}

/// Fixed information record shown by the host for an accessory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub serial_number: &'static str,
}

impl HeatingCoolingState {
    pub fn value(self) -> u8 {
        match self {
            HeatingCoolingState::Off => 0,
            HeatingCoolingState::Heat => 1,
            HeatingCoolingState::Cool => 2,
            HeatingCoolingState::Auto => 3,
        }
    }

    /// Values outside the host's enumeration are treated as `Cool`.
    pub fn from_value(value: i64) -> HeatingCoolingState {
        match value {
            0 => HeatingCoolingState::Off,
            1 => HeatingCoolingState::Heat,
            3 => HeatingCoolingState::Auto,
            _ => HeatingCoolingState::Cool,
        }
    }
}

impl TemperatureDisplayUnits {
    pub fn value(self) -> u8 {
        match self {
            TemperatureDisplayUnits::Celsius => 0,
            TemperatureDisplayUnits::Fahrenheit => 1,
        }
    }

    pub fn from_value(value: i64) -> TemperatureDisplayUnits {
        match value {
            1 => TemperatureDisplayUnits::Fahrenheit,
            _ => TemperatureDisplayUnits::Celsius,
        }
    }
}

impl Characteristic {
    /// Characteristics registered for the thermostat service, in
    /// registration order.
    pub const ALL: [Characteristic; 5] = [
        Characteristic::CurrentHeatingCoolingState,
        Characteristic::TargetHeatingCoolingState,
        Characteristic::CurrentTemperature,
        Characteristic::TargetTemperature,
        Characteristic::TemperatureDisplayUnits,
    ];

    pub fn writable(self) -> bool {
        matches!(
            self,
            Characteristic::TargetHeatingCoolingState
                | Characteristic::TargetTemperature
                | Characteristic::TemperatureDisplayUnits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Characteristic, HeatingCoolingState, TemperatureDisplayUnits};

    #[test]
    fn heating_cooling_state_values() {
        for state in [
            HeatingCoolingState::Off,
            HeatingCoolingState::Heat,
            HeatingCoolingState::Cool,
            HeatingCoolingState::Auto,
        ] {
            assert_eq!(HeatingCoolingState::from_value(state.value() as i64), state);
        }

        assert_eq!(HeatingCoolingState::from_value(17), HeatingCoolingState::Cool);
    }

    #[test]
    fn display_units_values() {
        assert_eq!(TemperatureDisplayUnits::from_value(0), TemperatureDisplayUnits::Celsius);
        assert_eq!(TemperatureDisplayUnits::from_value(1), TemperatureDisplayUnits::Fahrenheit);
        assert_eq!(TemperatureDisplayUnits::from_value(42), TemperatureDisplayUnits::Celsius);
    }

    #[test]
    fn current_characteristics_are_read_only() {
        assert!(!Characteristic::CurrentHeatingCoolingState.writable());
        assert!(!Characteristic::CurrentTemperature.writable());
        assert!(Characteristic::TargetTemperature.writable());
    }
}
