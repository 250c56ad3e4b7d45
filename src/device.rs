use core::fmt::{Display, Formatter};
use error_stack::{Result, ResultExt};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::ac::{AcMode, FanSpeed};
use crate::error::DeviceError;

/// Full option record reported by the AC endpoint. Only `target_mode` and
/// `target_temperature` are consumed; the rest is carried along so the
/// whole record decodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcOptions {
    pub target_mode: AcMode,
    #[serde(default)]
    pub target_fan_speed: FanSpeed,
    pub target_temperature: TemperatureValue,
    #[serde(default)]
    pub vertical_swing: bool,
    #[serde(default)]
    pub sleep_mode: bool,
    #[serde(default)]
    pub dry_mode: bool,
}

/// The endpoint reports the target temperature either as a number or as a
/// numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TemperatureValue {
    Number(f32),
    Text(String),
}

/// Partial update sent to the AC endpoint. Unset fields are left out of
/// the body entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<AcMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_temperature: Option<f32>,
}

/// Reply to an update request. A zero status means the device executed
/// the request.
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgment {
    pub status: StatusValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Number(i64),
    Text(String),
}

impl TemperatureValue {
    pub fn to_degrees(&self) -> Result<f32, DeviceError> {
        match self {
            TemperatureValue::Number(value) => Ok(*value),
            TemperatureValue::Text(text) => text
                .trim()
                .parse::<f32>()
                .map_err(|_| DeviceError::InvalidTemperature(text.clone()).into()),
        }
    }
}

impl StatusValue {
    pub fn is_zero(&self) -> bool {
        match self {
            StatusValue::Number(value) => *value == 0,
            StatusValue::Text(text) => matches!(text.trim().parse::<i64>(), Ok(0)),
        }
    }
}

impl Display for StatusValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusValue::Number(value) => write!(f, "{}", value),
            StatusValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl Acknowledgment {
    pub fn ensure_ok(&self) -> Result<(), DeviceError> {
        if self.status.is_zero() {
            Ok(())
        } else {
            Err(DeviceError::StatusNotZero(self.status.to_string()).into())
        }
    }
}

/// Client for the AC control endpoint. Every operation performs exactly
/// one outbound request; there is no retry, caching or queuing.
#[derive(Debug, Clone)]
pub struct AcDevice {
    http: reqwest::Client,
    base_url: String,
}

impl AcDevice {
    pub fn new(base_url: impl Into<String>) -> Self {
        AcDevice {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn state(&self) -> Result<AcOptions, DeviceError> {
        let into_context =
            || DeviceError::Context(format!("Getting state from {}", self.base_url));

        debug!("GET {}", self.base_url);
        let options = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(DeviceError::Request)
            .change_context_lazy(into_context)?
            .json::<AcOptions>()
            .await
            .map_err(DeviceError::Request)
            .change_context_lazy(into_context)?;

        Ok(options)
    }

    pub async fn set_mode(&self, mode: AcMode) -> Result<Acknowledgment, DeviceError> {
        self.update(&UpdateRequest {
            target_mode: Some(mode),
            ..UpdateRequest::default()
        })
        .await
    }

    pub async fn set_temperature(&self, temperature: f32) -> Result<Acknowledgment, DeviceError> {
        self.update(&UpdateRequest {
            target_temperature: Some(temperature),
            ..UpdateRequest::default()
        })
        .await
    }

    async fn update(&self, request: &UpdateRequest) -> Result<Acknowledgment, DeviceError> {
        let into_context =
            || DeviceError::Context(format!("Posting update to {}", self.base_url));

        debug!("POST {} {:?}", self.base_url, request);
        let acknowledgment = self
            .http
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(DeviceError::Request)
            .change_context_lazy(into_context)?
            .json::<Acknowledgment>()
            .await
            .map_err(DeviceError::Request)
            .change_context_lazy(into_context)?;

        Ok(acknowledgment)
    }
}

#[cfg(test)]
mod tests {
    use super::{AcOptions, Acknowledgment, StatusValue, TemperatureValue, UpdateRequest};
    use crate::ac::{AcMode, FanSpeed};

    #[test]
    fn temperature_from_numeric_string() {
        let value = TemperatureValue::Text("24".to_string());
        assert_eq!(value.to_degrees().unwrap(), 24.0);
    }

    #[test]
    fn temperature_from_number_is_unchanged() {
        let value = TemperatureValue::Number(18.5);
        assert_eq!(value.to_degrees().unwrap(), 18.5);
    }

    #[test]
    fn temperature_from_garbage_is_an_error() {
        let value = TemperatureValue::Text("warm".to_string());
        assert!(value.to_degrees().is_err());
    }

    #[test]
    fn status_zero_variants() {
        assert!(StatusValue::Number(0).is_zero());
        assert!(StatusValue::Text("0".to_string()).is_zero());
        assert!(!StatusValue::Number(1).is_zero());
        assert!(!StatusValue::Text("ERROR".to_string()).is_zero());
    }

    #[test]
    fn acknowledgment_with_nonzero_status_is_an_error() {
        let acknowledgment = Acknowledgment {
            status: StatusValue::Number(3),
        };
        assert!(acknowledgment.ensure_ok().is_err());
    }

    #[test]
    fn update_request_serializes_only_set_fields() {
        let body = serde_json::to_string(&UpdateRequest {
            target_mode: Some(AcMode::Cold),
            ..UpdateRequest::default()
        })
        .unwrap();
        assert_eq!(body, r#"{"targetMode":"cool"}"#);

        let body = serde_json::to_string(&UpdateRequest {
            target_temperature: Some(21.5),
            ..UpdateRequest::default()
        })
        .unwrap();
        assert_eq!(body, r#"{"targetTemperature":21.5}"#);
    }

    #[test]
    fn options_decode_with_string_temperature() {
        let options: AcOptions = serde_json::from_str(
            r#"{
                "targetMode": "hot",
                "targetFanSpeed": 2,
                "targetTemperature": "24",
                "verticalSwing": true,
                "sleepMode": false,
                "dryMode": false
            }"#,
        )
        .unwrap();

        assert_eq!(options.target_mode, AcMode::Hot);
        assert_eq!(options.target_fan_speed, FanSpeed::Medium);
        assert_eq!(options.target_temperature.to_degrees().unwrap(), 24.0);
        assert!(options.vertical_swing);
    }

    #[test]
    fn options_decode_without_unused_fields() {
        let options: AcOptions =
            serde_json::from_str(r#"{"targetMode": "off", "targetTemperature": 22}"#).unwrap();
        assert_eq!(options.target_mode, AcMode::Off);
        assert_eq!(options.target_fan_speed, FanSpeed::Auto);
    }
}
