use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::session::EvaporatorSession;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
    #[error("ошибка настроек: {0}")]
    Config(#[from] ConfigError),
    #[error("неизвестный раздел справочника: {0}")]
    UnknownSection(String),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 세션은 루프가 끝나면 버려진다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut session = EvaporatorSession::new();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculator => ui_cli::handle_calculator(config, &mut session)?,
            MenuChoice::Reference => ui_cli::handle_reference(),
            MenuChoice::Schemes => ui_cli::handle_schemes(),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                println!("Завершение работы.");
                break;
            }
        }
    }
    Ok(())
}
