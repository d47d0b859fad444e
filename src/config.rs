use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::form::{FormState, DEFAULT_PRECISION};
use crate::quantity::Quantity;
use crate::units::*;

/// 설정 파일 기본 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 각 물리량별 기본 단위 설정을 담는다. 폼을 새로 만들 때 행의 초기 단위가 된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub mass: MassUnit,
    pub molar_mass: MolarMassUnit,
    pub moles: MolesUnit,
    pub volume: VolumeUnit,
    pub molarity: MolarityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            mass: MassUnit::ALL[0],
            molar_mass: MolarMassUnit::ALL[0],
            moles: MolesUnit::ALL[0],
            volume: VolumeUnit::ALL[0],
            molarity: MolarityUnit::ALL[0],
        }
    }
}

impl DefaultUnits {
    /// 물리량의 기본 단위 라벨.
    pub fn label(&self, q: Quantity) -> &'static str {
        match q {
            Quantity::Mass => self.mass.label(),
            Quantity::MolarMass => self.molar_mass.label(),
            Quantity::Moles => self.moles.label(),
            Quantity::Volume => self.volume.label(),
            Quantity::Molarity => self.molarity.label(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / en / ko
    pub language: String,
    /// TOML 언어팩 디렉터리 (선택)
    pub language_pack_dir: Option<String>,
    /// 결과값 소수점 이하 자리수
    pub display_precision: usize,
    /// off / error / warn / info / debug / trace
    pub log_level: String,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            display_precision: DEFAULT_PRECISION,
            log_level: "info".to_string(),
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 로그 레벨 문자열 오류
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

/// 지정 경로의 설정을 로드한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.log_filter()?;
    Ok(cfg)
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn log_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// 설정의 기본 단위와 자리수로 빈 폼을 만든다.
    pub fn new_form(&self) -> FormState {
        FormState::with_units(
            |q| self.default_units.label(q).to_string(),
            self.display_precision,
        )
    }
}
