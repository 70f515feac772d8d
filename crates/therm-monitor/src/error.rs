use thiserror::Error;

/// 监控错误类型
#[derive(Error, Debug)]
pub enum MonitorError {
    /// 传感器错误，原样向上传播
    #[error("Sensor error: {0}")]
    Sensor(#[from] therm_sensor::SensorError),

    /// 上报错误
    #[error("Report error: {0}")]
    Report(String),
}

/// 监控结果类型
pub type Result<T> = std::result::Result<T, MonitorError>;
