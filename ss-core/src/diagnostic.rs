use ss_types::SampleType;
use thiserror::Error;

/// Замечание декодера о пропущенной или усечённой записи.
///
/// Диагностики не прерывают разбор (кроме усечённых данных в конце
/// буфера) и возвращаются вызывающей стороне вместе с записями.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeDiagnostic {
    /// В конце буфера меньше байт, чем занимает заголовок TLV
    #[error("Found incomplete TLV header at position 0x{offset:x}")]
    IncompleteHeader { offset: usize },

    /// Заявленная длина записи выходит за конец буфера
    #[error(
        "Found incomplete TLV at position 0x{offset:x} (need {sample_len} bytes, {remaining} remaining)"
    )]
    IncompleteTlv {
        offset: usize,
        sample_len: usize,
        remaining: usize,
    },

    /// Запись больше самого большого известного варианта
    #[error("sample length {sample_len} too long at position 0x{offset:x}")]
    SampleTooLong { offset: usize, sample_len: usize },

    /// Длина записи фиксированного размера не совпадает с ожидаемой
    #[error(
        "wrong {sample_type} sample length at position 0x{offset:x} (have {have}, expected {expected})"
    )]
    WrongSampleLength {
        offset: usize,
        sample_type: SampleType,
        have: usize,
        expected: usize,
    },

    /// Полезная нагрузка короче заголовка выборки
    #[error(
        "wrong {sample_type} sample length at position 0x{offset:x} (have {have}, expected at least {min})"
    )]
    TruncatedSampleHeader {
        offset: usize,
        sample_type: SampleType,
        have: usize,
        min: usize,
    },

    /// Количество бинов не входит в список допустимых для варианта
    #[error("invalid {sample_type} bin length {bins} at position 0x{offset:x}")]
    InvalidBinLength {
        offset: usize,
        sample_type: SampleType,
        bins: usize,
    },

    #[error("unknown sample type ({sample_type}) at position 0x{offset:x}")]
    UnknownSampleType { offset: usize, sample_type: u8 },
}

impl DecodeDiagnostic {
    /// Смещение записи, к которой относится диагностика.
    pub fn offset(&self) -> usize {
        match self {
            DecodeDiagnostic::IncompleteHeader { offset }
            | DecodeDiagnostic::IncompleteTlv { offset, .. }
            | DecodeDiagnostic::SampleTooLong { offset, .. }
            | DecodeDiagnostic::WrongSampleLength { offset, .. }
            | DecodeDiagnostic::TruncatedSampleHeader { offset, .. }
            | DecodeDiagnostic::InvalidBinLength { offset, .. }
            | DecodeDiagnostic::UnknownSampleType { offset, .. } => *offset,
        }
    }

    /// `true`, если после этой диагностики разбор остановлен.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            DecodeDiagnostic::IncompleteHeader { .. } | DecodeDiagnostic::IncompleteTlv { .. }
        )
    }
}
