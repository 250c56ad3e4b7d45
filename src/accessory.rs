use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use error_stack::{Result, ResultExt};
use log::{debug, error};
use serde::Deserialize;
use serde_json::Value;

use crate::ac::{AcMode, AcState};
use crate::device::AcDevice;
use crate::error::AccessoryError;
use crate::homekit::{
    AccessoryInformation, Characteristic, HeatingCoolingState, TemperatureDisplayUnits,
};

/// Accessory type identifier registered with the host platform.
pub const ACCESSORY_NAME: &str = "nico-esp8266-ac";

/// Per-accessory configuration supplied by the host.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessoryConfig {
    pub name: String,
    pub url: Option<String>,
}

/// Request/response contract between the host's characteristic callbacks
/// and an accessory.
///
/// Reads return the last known value immediately; any device interaction
/// they trigger only becomes visible on a later read. Writes wait for
/// their own request/response cycle.
#[allow(async_fn_in_trait)]
pub trait ThermostatControl {
    fn mode(&self) -> HeatingCoolingState;
    async fn set_mode(
        &self,
        value: HeatingCoolingState,
    ) -> Result<HeatingCoolingState, AccessoryError>;
    fn temperature(&self) -> f32;
    async fn set_temperature(&self, value: f32) -> Result<f32, AccessoryError>;
    fn display_units(&self) -> TemperatureDisplayUnits;
    fn set_display_units(&self, value: TemperatureDisplayUnits) -> TemperatureDisplayUnits;
}

/// Thermostat accessory backed by the REST endpoint of an AC unit.
#[derive(Debug, Clone)]
pub struct AcAccessory {
    name: String,
    ac: Arc<Mutex<AcState>>,
    device: AcDevice,
}

impl AcAccessory {
    /// Fails without registering anything when the configuration carries
    /// no URL.
    pub fn new(config: &AccessoryConfig) -> Result<AcAccessory, AccessoryError> {
        let url = config.url.as_ref().ok_or(AccessoryError::UrlNotSupplied)?;

        Ok(AcAccessory {
            name: config.name.clone(),
            ac: Arc::new(Mutex::new(AcState::default())),
            device: AcDevice::new(url.clone()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn information(&self) -> AccessoryInformation {
        AccessoryInformation {
            manufacturer: "Nico",
            model: "ESP8266",
            serial_number: "Nico-AC",
        }
    }

    /// Snapshot of the cached device state.
    pub fn cached_state(&self) -> AcState {
        self.ac().clone()
    }

    /// Fetch the device state and overwrite the cached values. Any
    /// failure is logged and leaves the previous values in place.
    pub async fn refresh(&self) {
        match self.fetch_state().await {
            Ok((mode, temperature)) => {
                let mut ac = self.ac();
                ac.mode = mode;
                ac.temperature = temperature;
            }
            Err(e) => error!("Error getting state for {}: {:?}", self.name, e),
        }
    }

    /// Answer a read request for one of the thermostat characteristics.
    pub fn handle_get(&self, characteristic: Characteristic) -> Value {
        match characteristic {
            Characteristic::CurrentHeatingCoolingState
            | Characteristic::TargetHeatingCoolingState => Value::from(self.mode().value()),
            Characteristic::CurrentTemperature | Characteristic::TargetTemperature => {
                Value::from(self.temperature())
            }
            Characteristic::TemperatureDisplayUnits => Value::from(self.display_units().value()),
        }
    }

    /// Apply a write request to one of the thermostat characteristics and
    /// echo the resulting value.
    pub async fn handle_set(
        &self,
        characteristic: Characteristic,
        value: &Value,
    ) -> Result<Value, AccessoryError> {
        match characteristic {
            Characteristic::TargetHeatingCoolingState => {
                let requested = value
                    .as_i64()
                    .ok_or_else(|| AccessoryError::InvalidValue(value.clone()))?;
                let mode = self.set_mode(HeatingCoolingState::from_value(requested)).await?;
                Ok(Value::from(mode.value()))
            }
            Characteristic::TargetTemperature => {
                let requested = value
                    .as_f64()
                    .ok_or_else(|| AccessoryError::InvalidValue(value.clone()))?;
                let temperature = self.set_temperature(requested as f32).await?;
                Ok(Value::from(temperature))
            }
            Characteristic::TemperatureDisplayUnits => {
                let requested = TemperatureDisplayUnits::from_value(value.as_i64().unwrap_or(0));
                Ok(Value::from(self.set_display_units(requested).value()))
            }
            _ => Err(AccessoryError::ReadOnly(characteristic).into()),
        }
    }

    fn ac(&self) -> MutexGuard<'_, AcState> {
        // The lock is only held for single field reads and writes, which
        // cannot panic, so a poisoned lock still holds a usable state.
        self.ac.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_refresh(&self) {
        let accessory = self.clone();
        tokio::spawn(async move { accessory.refresh().await });
    }

    async fn fetch_state(&self) -> Result<(AcMode, f32), AccessoryError> {
        let into_context =
            || AccessoryError::Context(format!("Refreshing state of {}", self.name));

        let options = self.device.state().await.change_context_lazy(into_context)?;
        let temperature = options
            .target_temperature
            .to_degrees()
            .change_context_lazy(into_context)?;

        Ok((options.target_mode, temperature))
    }

    async fn send_mode(&self, mode: AcMode) -> Result<(), AccessoryError> {
        let into_context = || AccessoryError::Context(format!("Setting mode of {}", self.name));

        let acknowledgment = self
            .device
            .set_mode(mode)
            .await
            .change_context_lazy(into_context)?;
        acknowledgment.ensure_ok().change_context_lazy(into_context)
    }

    async fn send_temperature(&self, temperature: f32) -> Result<(), AccessoryError> {
        let into_context =
            || AccessoryError::Context(format!("Setting temperature of {}", self.name));

        let acknowledgment = self
            .device
            .set_temperature(temperature)
            .await
            .change_context_lazy(into_context)?;
        acknowledgment.ensure_ok().change_context_lazy(into_context)
    }
}

impl ThermostatControl for AcAccessory {
    fn mode(&self) -> HeatingCoolingState {
        self.spawn_refresh();
        self.ac().mode.to_homekit()
    }

    async fn set_mode(
        &self,
        value: HeatingCoolingState,
    ) -> Result<HeatingCoolingState, AccessoryError> {
        debug!("Mode set to: {:?}", value);
        let mode = AcMode::from_homekit(value);
        self.ac().mode = mode;

        match self.send_mode(mode).await {
            Ok(()) => Ok(mode.to_homekit()),
            Err(e) => {
                error!("Error setting ac status: {:?}", e);
                Err(e)
            }
        }
    }

    fn temperature(&self) -> f32 {
        self.spawn_refresh();
        self.ac().temperature
    }

    async fn set_temperature(&self, value: f32) -> Result<f32, AccessoryError> {
        debug!("Temperature set to: {}", value);
        self.ac().temperature = value;

        match self.send_temperature(value).await {
            Ok(()) => Ok(value),
            Err(e) => {
                error!("Error setting ac temperature: {:?}", e);
                Err(e)
            }
        }
    }

    fn display_units(&self) -> TemperatureDisplayUnits {
        TemperatureDisplayUnits::Celsius
    }

    fn set_display_units(&self, _value: TemperatureDisplayUnits) -> TemperatureDisplayUnits {
        TemperatureDisplayUnits::Celsius
    }
}
