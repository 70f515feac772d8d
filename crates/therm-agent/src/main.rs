use anyhow::Result;
use clap::Parser;
use therm_config::ConfigLoader;
use therm_monitor::ThresholdMonitor;
use therm_sensor::{mock::MockSensor, TemperatureSensor, ThermalZoneSensor};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config directory path
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Thermal zone index to read
    #[arg(long, default_value_t = 0)]
    thermal_zone: u32,

    /// Use a simulated sensor with a fixed temperature instead of sysfs
    #[arg(long)]
    simulate: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let loader = ConfigLoader::new(&args.config);
    loader.validate()?;
    let global = loader.load_global()?;

    tracing::info!(
        system = %global.system.name,
        device_id = %global.monitor.device_id,
        max_temperature = %global.monitor.max_temperature,
        "Starting temperature check"
    );

    let sensor: Box<dyn TemperatureSensor> = match args.simulate {
        Some(value) => Box::new(MockSensor::fixed(value)),
        None => Box::new(ThermalZoneSensor::new(args.thermal_zone)),
    };

    let monitor = ThresholdMonitor::new(global.monitor, sensor);

    // 单次检查，采样周期配置保留但不驱动任何循环
    monitor.check_temperature().await?;

    Ok(())
}
