//! Adapter exposing a networked air-conditioner's state to a smart-home
//! control surface.
//!
//! A single [`accessory::AcAccessory`] mirrors the device's mode and
//! target temperature and proxies reads and writes through the REST
//! endpoint wrapped by [`device::AcDevice`]. The host platform binds its
//! characteristic callbacks to the [`accessory::ThermostatControl`]
//! operations.

pub mod ac;
pub mod accessory;
pub mod device;
pub mod error;
pub mod homekit;

pub use accessory::{AcAccessory, AccessoryConfig, ThermostatControl, ACCESSORY_NAME};
pub use device::AcDevice;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn get_version() -> String {
    format!("{} ({})", built_info::PKG_VERSION, built_info::BUILT_TIME_UTC)
}
