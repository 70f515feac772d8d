use anyhow::Result;
use async_trait::async_trait;
use therm_types::TemperatureReading;

/// 状态上报 trait
#[async_trait]
pub trait StatusReporter: Send + Sync {
    /// 输出一行状态信息
    async fn emit(&self, line: &str) -> Result<()>;

    /// 上报器名称
    fn name(&self) -> &str;
}

/// 控制台上报器
///
/// 写入标准输出，当前唯一的上报渠道
pub struct ConsoleReporter;

#[async_trait]
impl StatusReporter for ConsoleReporter {
    async fn emit(&self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// 状态行
pub fn status_line(reading: &TemperatureReading) -> String {
    format!("设备 {} 当前温度: {}°C", reading.device_id, reading.value)
}

/// 告警行
pub fn warning_line(max_temperature: f64) -> String {
    format!("警告：温度超过阈值 {}°C", max_temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let reading = TemperatureReading::new("EDGE_AI_001".to_string(), 60.0);
        let line = status_line(&reading);

        assert!(line.contains("EDGE_AI_001"));
        assert!(line.contains("60"));
    }

    #[test]
    fn test_warning_line() {
        let line = warning_line(75.0);
        assert!(line.contains("75"));
        assert!(line.contains("警告"));
    }

    #[tokio::test]
    async fn test_console_reporter() {
        let reporter = ConsoleReporter;
        assert_eq!(reporter.name(), "console");
        assert!(reporter.emit("test line").await.is_ok());
    }
}
