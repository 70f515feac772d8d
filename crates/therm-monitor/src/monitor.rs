use crate::report::{status_line, warning_line, ConsoleReporter, StatusReporter};
use crate::threshold::ThresholdPolicy;
use crate::{MonitorError, Result};
use therm_config::MonitorConfig;
use therm_sensor::TemperatureSensor;
use therm_types::TemperatureReading;
use tracing::{debug, warn};

/// 阈值监控器
///
/// 持有不可变配置和注入的传感器，每次检查读取一次温度并输出状态行，
/// 超过阈值时追加告警行。检查之间不保留任何状态
pub struct ThresholdMonitor {
    config: MonitorConfig,
    policy: ThresholdPolicy,
    sensor: Box<dyn TemperatureSensor>,
    reporter: Box<dyn StatusReporter>,
}

impl ThresholdMonitor {
    /// 创建监控器，输出到控制台
    pub fn new(config: MonitorConfig, sensor: Box<dyn TemperatureSensor>) -> Self {
        Self::with_reporter(config, sensor, Box::new(ConsoleReporter))
    }

    /// 创建监控器并指定上报器
    pub fn with_reporter(
        config: MonitorConfig,
        sensor: Box<dyn TemperatureSensor>,
        reporter: Box<dyn StatusReporter>,
    ) -> Self {
        let policy = ThresholdPolicy::new(config.max_temperature);
        Self {
            config,
            policy,
            sensor,
            reporter,
        }
    }

    /// 执行一次温度检查
    ///
    /// 传感器失败时错误原样返回，此时不输出任何内容。
    /// 不做重试，也不用默认值兜底
    pub async fn check_temperature(&self) -> Result<()> {
        let value = self.sensor.read_temperature().await?;
        let reading = TemperatureReading::new(self.config.device_id.clone(), value);

        debug!(
            device_id = %reading.device_id,
            sensor = %self.sensor.name(),
            value = %reading.value,
            "Temperature read"
        );

        self.emit(&status_line(&reading)).await?;

        if self.policy.exceeded(reading.value) {
            warn!(
                device_id = %reading.device_id,
                value = %reading.value,
                max_temperature = %self.policy.max_temperature(),
                "Temperature above threshold"
            );
            self.emit(&warning_line(self.policy.max_temperature())).await?;
        }

        Ok(())
    }

    /// 监控配置
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    async fn emit(&self, line: &str) -> Result<()> {
        self.reporter
            .emit(line)
            .await
            .map_err(|e| MonitorError::Report(e.to_string()))
    }
}
