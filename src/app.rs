use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::service::{PropertyService, ServiceError};
use crate::store::PropertyStore;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no saved analysis matches '{0}'")]
    UnknownId(String),
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정 변경은 즉시 파일에 저장한다.
pub fn run<S: PropertyStore>(
    config: &mut Config,
    config_path: &Path,
    tr: Translator,
    service: &mut PropertyService<S>,
) -> Result<(), AppError> {
    let mut tr = tr;
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Analyze => ui_cli::handle_analyze(&tr, config, service)?,
            MenuChoice::Saved => ui_cli::handle_saved(&tr, service)?,
            MenuChoice::Details => ui_cli::handle_details(&tr, service)?,
            MenuChoice::Delete => ui_cli::handle_delete(&tr, service)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    config.save(config_path)?;
                    let lang = i18n::resolve_language(None, Some(&config.language));
                    tr = Translator::new_with_pack(&lang, config.locales_dir.as_deref());
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
