/// therm-monitor 基本使用示例
///
/// 演示阈值监控的基本流程

use therm_config::MonitorConfig;
use therm_monitor::ThresholdMonitor;
use therm_sensor::mock::MockSensor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("=== THERM EDGE 阈值监控示例 ===\n");

    let config = MonitorConfig::default();
    println!(
        "✓ 配置: 设备 {} 阈值 {}°C\n",
        config.device_id, config.max_temperature
    );

    // 1. 正常温度
    println!("--- 正常温度 ---");
    let monitor = ThresholdMonitor::new(config.clone(), Box::new(MockSensor::fixed(60.0)));
    monitor.check_temperature().await?;
    println!();

    // 2. 恰好等于阈值，不触发告警
    println!("--- 临界温度 ---");
    let monitor = ThresholdMonitor::new(config.clone(), Box::new(MockSensor::fixed(75.0)));
    monitor.check_temperature().await?;
    println!();

    // 3. 超过阈值
    println!("--- 超限温度 ---");
    let monitor = ThresholdMonitor::new(config, Box::new(MockSensor::fixed(82.5)));
    monitor.check_temperature().await?;

    println!("\n=== 示例完成 ===");

    Ok(())
}
