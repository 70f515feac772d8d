use crate::Result;
use async_trait::async_trait;

/// 温度传感器 trait
///
/// 抽象温度来源（sysfs、硬件驱动、模拟），消费方只关心读数本身。
/// 读取失败由调用方处理，trait 实现不做重试或降级
#[async_trait]
pub trait TemperatureSensor: Send + Sync {
    /// 读取当前温度（°C）
    async fn read_temperature(&self) -> Result<f64>;

    /// 传感器名称
    fn name(&self) -> &str;
}
