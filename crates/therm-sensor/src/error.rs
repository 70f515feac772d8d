use thiserror::Error;

/// 传感器错误类型
#[derive(Error, Debug)]
pub enum SensorError {
    /// 读取失败
    #[error("Sensor read failed: {0}")]
    ReadFailed(String),

    /// 读数无效
    #[error("Invalid sensor data: {0}")]
    InvalidData(String),

    /// 传感器不可用
    #[error("Sensor unavailable: {0}")]
    Unavailable(String),
}

/// 传感器结果类型
pub type Result<T> = std::result::Result<T, SensorError>;

impl SensorError {
    /// 创建读取失败错误
    pub fn read_failed(msg: impl Into<String>) -> Self {
        SensorError::ReadFailed(msg.into())
    }

    /// 创建无效读数错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        SensorError::InvalidData(msg.into())
    }

    /// 创建不可用错误
    pub fn unavailable(msg: impl Into<String>) -> Self {
        SensorError::Unavailable(msg.into())
    }
}
