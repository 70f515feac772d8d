pub mod error;
pub mod mock;
pub mod port;
pub mod thermal;

pub use error::{Result, SensorError};
pub use port::TemperatureSensor;
pub use thermal::ThermalZoneSensor;
