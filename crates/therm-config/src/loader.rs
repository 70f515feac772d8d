use anyhow::{anyhow, Result};
use config::{Config, File, FileFormat};
use std::path::{Path, PathBuf};

use crate::GlobalConfig;

/// 配置加载器
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// 创建配置加载器
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    /// 加载全局配置
    pub fn load_global(&self) -> Result<GlobalConfig> {
        let config_path = self.config_dir.join("global.toml");

        if !config_path.exists() {
            // 如果配置文件不存在，返回默认配置
            return Ok(GlobalConfig::default());
        }

        let config = Config::builder()
            .add_source(File::new(
                config_path.to_str().ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        let global = self.load_global()?;

        // 阈值必须是合法数值，范围不做限制
        if !global.monitor.max_temperature.is_finite() {
            return Err(anyhow!(
                "max_temperature must be a finite number, got {}",
                global.monitor.max_temperature
            ));
        }

        if global.monitor.device_id.is_empty() {
            return Err(anyhow!("device_id must not be empty"));
        }

        Ok(())
    }
}
