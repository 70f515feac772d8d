use crate::{Result, SensorError, TemperatureSensor};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 模拟传感器
///
/// 返回固定值、预设序列或固定错误，用于测试和演示
pub struct MockSensor {
    behavior: Behavior,
    name: String,
}

enum Behavior {
    Fixed(f64),
    Sequence(Mutex<VecDeque<Result<f64>>>),
    Failing(String),
}

impl MockSensor {
    /// 始终返回固定温度
    pub fn fixed(value: f64) -> Self {
        Self {
            behavior: Behavior::Fixed(value),
            name: "mock".to_string(),
        }
    }

    /// 按顺序返回预设结果，耗尽后返回 ReadFailed
    pub fn sequence(readings: Vec<Result<f64>>) -> Self {
        Self {
            behavior: Behavior::Sequence(Mutex::new(readings.into())),
            name: "mock".to_string(),
        }
    }

    /// 始终返回读取失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Failing(message.into()),
            name: "mock".to_string(),
        }
    }
}

#[async_trait]
impl TemperatureSensor for MockSensor {
    async fn read_temperature(&self) -> Result<f64> {
        match &self.behavior {
            Behavior::Fixed(value) => Ok(*value),
            Behavior::Sequence(readings) => match readings.lock() {
                Ok(mut queue) => queue
                    .pop_front()
                    .unwrap_or_else(|| Err(SensorError::read_failed("mock sequence exhausted"))),
                Err(_) => Err(SensorError::read_failed("mock readings lock poisoned")),
            },
            Behavior::Failing(message) => Err(SensorError::read_failed(message.clone())),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
