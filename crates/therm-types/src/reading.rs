use serde::{Serialize, Deserialize};

/// 单次温度读数
///
/// 每次检查时创建，使用后即丢弃，不做持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub device_id: String,
    pub value: f64,
    pub timestamp: i64,
}

impl TemperatureReading {
    pub fn new(device_id: String, value: f64) -> Self {
        Self {
            device_id,
            value,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
