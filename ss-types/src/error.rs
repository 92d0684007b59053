use thiserror::Error;

use crate::SampleFamily;

/// Результат для операций анализатора спектра
pub type SsResult<T> = std::result::Result<T, SsError>;

/// Типы ошибок разбора и анализа спектральных выборок.
#[derive(Debug, Error)]
pub enum SsError {
    /// Неизвестный тип выборки в TLV заголовке
    #[error("Unknown sample type: {0}")]
    UnknownSampleType(u8),

    /// Захват пуст: ни одной выборки не декодировано
    #[error("No decoded samples in capture")]
    EmptyCapture,

    /// Нет выборок, пригодных для расчёта индекса (фильтр отсеял всё или
    /// суммарная мощность равна нулю)
    #[error("No usable {family} samples for index computation")]
    NoUsableSamples { family: SampleFamily },

    /// Размер файла захвата превышает допустимый
    #[error("Capture too large: {size} bytes exceeds limit of {limit} bytes")]
    CaptureTooLarge { size: u64, limit: u64 },

    /// Запись не помещается в TLV (длина полезной нагрузки больше u16)
    #[error("Record too large: payload of {0} bytes exceeds TLV length field")]
    RecordTooLarge(usize),

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SsError {
    pub fn no_usable_samples(family: SampleFamily) -> Self {
        Self::NoUsableSamples { family }
    }
}
