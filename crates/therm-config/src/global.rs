use serde::{Deserialize, Serialize};

/// 全局配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    pub system: SystemConfig,
    pub monitor: MonitorConfig,
}

/// 系统配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    pub name: String,
    pub version: String,
}

/// 监控配置
///
/// 进程启动时建立，之后不再修改
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// 设备 ID（仅用于输出标识）
    pub device_id: String,

    /// 温度上限（°C），严格大于时触发告警
    pub max_temperature: f64,

    /// 采样周期（毫秒，保留字段，当前无任何行为消费）
    pub sampling_rate: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig {
                name: "THERM Edge Monitor".to_string(),
                version: "1.0.0".to_string(),
            },
            monitor: MonitorConfig::default(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            device_id: "EDGE_AI_001".to_string(),
            max_temperature: 75.0,
            sampling_rate: 1000,
        }
    }
}
