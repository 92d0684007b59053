use std::path::PathBuf;

use ss_types::SsError;
use thiserror::Error;

pub type AnalyserResult<T> = std::result::Result<T, AnalyserError>;

#[derive(Debug, Error)]
pub enum AnalyserError {
    /// Файл захвата не удалось прочитать
    #[error("Couldn't read scan file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: SsError,
    },

    /// Индекс не посчитан: нет пригодных выборок
    #[error("Index computation failed: {0}")]
    Index(#[source] SsError),

    /// Ошибка сериализации отчёта
    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Некорректная конфигурация
    #[error("Config error: {0}")]
    Config(String),
}

impl AnalyserError {
    /// `true`, если ошибка возникла до декодирования (файл недоступен).
    pub fn is_read_failure(&self) -> bool {
        matches!(self, AnalyserError::Read { .. })
    }
}
