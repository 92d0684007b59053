use crate::{SsError, SsResult};

/// Тип спектральной выборки (поле `type` TLV заголовка)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SampleType {
    /// ath9k, канал 20 МГц
    Ht20 = 1,
    /// ath9k, канал 40 МГц (нижняя и верхняя половины по 20 МГц)
    Ht20_40 = 2,
    /// ath10k, переменное число бинов
    Ath10k = 3,
    /// ath11k, переменное число бинов
    Ath11k = 4,
}

/// Семейство выборок: определяет формулу индекса качества.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFamily {
    /// HT20 и HT20/40 (ath9k)
    Ht9k,
    /// ATH10K и ATH11K
    ChipGeneration,
}

impl SampleType {
    pub fn from_u8(v: u8) -> SsResult<Self> {
        match v {
            1 => Ok(SampleType::Ht20),
            2 => Ok(SampleType::Ht20_40),
            3 => Ok(SampleType::Ath10k),
            4 => Ok(SampleType::Ath11k),
            _ => Err(SsError::UnknownSampleType(v)),
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn family(&self) -> SampleFamily {
        match self {
            SampleType::Ht20 | SampleType::Ht20_40 => SampleFamily::Ht9k,
            SampleType::Ath10k | SampleType::Ath11k => SampleFamily::ChipGeneration,
        }
    }

    /// Допустимые количества бинов для типов с переменной длиной данных.
    ///
    /// Для HT20 и HT20/40 число бинов фиксировано и возвращается один элемент.
    pub fn valid_bin_counts(&self) -> &'static [usize] {
        match self {
            SampleType::Ht20 => &[56],
            SampleType::Ht20_40 => &[128],
            SampleType::Ath10k => &[64, 128, 256],
            SampleType::Ath11k => &[16, 32, 64, 128, 256, 512],
        }
    }
}

impl std::fmt::Display for SampleType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SampleType::Ht20 => write!(f, "HT20"),
            SampleType::Ht20_40 => write!(f, "HT20/40"),
            SampleType::Ath10k => write!(f, "ATH10K"),
            SampleType::Ath11k => write!(f, "ATH11K"),
        }
    }
}

impl std::fmt::Display for SampleFamily {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SampleFamily::Ht9k => write!(f, "ht9k"),
            SampleFamily::ChipGeneration => write!(f, "chip-generation"),
        }
    }
}
