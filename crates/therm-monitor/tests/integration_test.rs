
use test_helpers::{test_config, CaptureReporter};
use therm_monitor::{MonitorError, ThresholdMonitor};
use therm_sensor::mock::MockSensor;

fn build_monitor(
    max_temperature: f64,
    sensor: MockSensor,
) -> (ThresholdMonitor, std::sync::Arc<std::sync::Mutex<Vec<String>>>) {
    let reporter = CaptureReporter::new();
    let lines = reporter.lines();
    let monitor = ThresholdMonitor::with_reporter(
        test_config(max_temperature),
        Box::new(sensor),
        Box::new(reporter),
    );
    (monitor, lines)
}

/// 正常温度：只输出状态行
#[tokio::test]
async fn test_reading_below_threshold() {
    let (monitor, lines) = build_monitor(75.0, MockSensor::fixed(60.0));

    monitor.check_temperature().await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("EDGE_AI_001"));
    assert!(lines[0].contains("60"));
    assert!(!lines[0].contains("警告"));
}

/// 恰好等于阈值：不触发告警
#[tokio::test]
async fn test_reading_at_threshold_does_not_warn() {
    let (monitor, lines) = build_monitor(75.0, MockSensor::fixed(75.0));

    monitor.check_temperature().await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("75"));
}

/// 超过阈值：状态行之后追加告警行
#[tokio::test]
async fn test_reading_above_threshold_warns() {
    let (monitor, lines) = build_monitor(75.0, MockSensor::fixed(76.0));

    monitor.check_temperature().await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("EDGE_AI_001"));
    assert!(lines[0].contains("76"));
    assert!(lines[1].contains("警告"));
    assert!(lines[1].contains("75"));

    // 状态行只出现一次
    assert_eq!(lines.iter().filter(|l| l.contains("设备")).count(), 1);
}

/// 传感器失败：错误向上传播，不输出任何行
#[tokio::test]
async fn test_sensor_failure_propagates() {
    let (monitor, lines) = build_monitor(75.0, MockSensor::failing("hardware fault"));

    let err = monitor.check_temperature().await.unwrap_err();
    assert!(matches!(err, MonitorError::Sensor(_)));
    assert!(err.to_string().contains("hardware fault"));
    assert!(lines.lock().unwrap().is_empty());
}

/// 采样周期配置对输出没有任何影响
#[tokio::test]
async fn test_sampling_rate_has_no_effect() {
    let mut config_fast = test_config(75.0);
    config_fast.sampling_rate = 10;
    let mut config_slow = test_config(75.0);
    config_slow.sampling_rate = 60000;

    let mut outputs = Vec::new();
    for config in [config_fast, config_slow] {
        let reporter = CaptureReporter::new();
        let lines = reporter.lines();
        let monitor = ThresholdMonitor::with_reporter(
            config,
            Box::new(MockSensor::fixed(76.0)),
            Box::new(reporter),
        );
        monitor.check_temperature().await.unwrap();
        outputs.push(lines.lock().unwrap().clone());
    }

    assert_eq!(outputs[0], outputs[1]);
}

/// 连续读数跨越阈值，每次检查独立判断
#[tokio::test]
async fn test_sequence_of_checks() {
    let sensor = MockSensor::sequence(vec![Ok(60.0), Ok(76.0), Ok(75.0)]);
    let (monitor, lines) = build_monitor(75.0, sensor);

    monitor.check_temperature().await.unwrap();
    monitor.check_temperature().await.unwrap();
    monitor.check_temperature().await.unwrap();

    let lines = lines.lock().unwrap();
    // 三条状态行，只有第二次检查带告警
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.iter().filter(|l| l.contains("警告")).count(), 1);
    assert!(lines[2].contains("警告"));
}
