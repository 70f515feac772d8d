use crate::{Result, SensorError, TemperatureSensor};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Linux sysfs 温度传感器
///
/// 从 `/sys/class/thermal/thermal_zone{N}/temp` 读取温度，
/// 内核以毫摄氏度输出，这里换算为摄氏度
pub struct ThermalZoneSensor {
    path: PathBuf,
    name: String,
}

impl ThermalZoneSensor {
    /// 创建指定 thermal zone 的传感器
    pub fn new(zone: u32) -> Self {
        Self {
            path: PathBuf::from(format!("/sys/class/thermal/thermal_zone{}/temp", zone)),
            name: format!("thermal_zone{}", zone),
        }
    }

    /// 使用自定义路径创建传感器
    pub fn with_path(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl TemperatureSensor for ThermalZoneSensor {
    async fn read_temperature(&self) -> Result<f64> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            SensorError::unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let millidegrees: i64 = raw.trim().parse().map_err(|_| {
            SensorError::invalid_data(format!(
                "unexpected thermal zone content: {:?}",
                raw.trim()
            ))
        })?;

        let value = millidegrees as f64 / 1000.0;
        debug!(sensor = %self.name, value = %value, "Thermal zone read");

        Ok(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
