use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 입력값/계산 결과는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 항상 위
    pub always_on_top: bool,
    /// UI 배율
    pub ui_scale: f32,
    /// 사용자 지정 폰트(.ttf/.ttc) 경로
    pub custom_font_path: Option<String>,
    /// true면 입력이 불완전할 때 어떤 필드가 문제인지 안내한다. 기본은 조용히 무시.
    pub input_feedback: bool,
    /// RUST_LOG가 없을 때 쓰는 tracing 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_alpha: 1.0,
            always_on_top: false,
            ui_scale: 1.0,
            custom_font_path: None,
            input_feedback: false,
            log_filter: "warn".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
    #[error("ошибка разбора настроек: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("ошибка сериализации настроек: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정을 어디서 얻었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// 기존 파일을 읽음
    File,
    /// 파일이 없어 기본값을 새로 씀
    CreatedDefault,
}

impl ConfigOrigin {
    /// 로드 결과를 기록한다. 로드는 로깅 필터를 정하기 전에 끝나므로
    /// 구독자를 설치한 뒤에 호출해야 한다.
    pub fn log(self, path: &Path) {
        match self {
            ConfigOrigin::File => info!(path = %path.display(), "config loaded"),
            ConfigOrigin::CreatedDefault => {
                info!(path = %path.display(), "default config written")
            }
        }
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<(Config, ConfigOrigin), ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok((cfg, ConfigOrigin::File))
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok((cfg, ConfigOrigin::CreatedDefault))
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// 범위를 벗어난 창 설정을 허용 범위로 되돌린다.
    pub fn clamped(mut self) -> Self {
        self.window_alpha = self.window_alpha.clamp(0.3, 1.0);
        self.ui_scale = self.ui_scale.clamp(0.8, 1.6);
        self
    }
}
