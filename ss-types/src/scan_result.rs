use crate::{Ath10kSample, Ath11kSample, Ht20Sample, Ht40Sample, SampleFamily, SampleType};

/// Декодированная спектральная выборка (один TLV элемент захвата)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Ht20(Ht20Sample),
    Ht40(Ht40Sample),
    Ath10k(Ath10kSample),
    Ath11k(Ath11kSample),
}

impl ScanResult {
    pub fn sample_type(&self) -> SampleType {
        match self {
            ScanResult::Ht20(_) => SampleType::Ht20,
            ScanResult::Ht40(_) => SampleType::Ht20_40,
            ScanResult::Ath10k(_) => SampleType::Ath10k,
            ScanResult::Ath11k(_) => SampleType::Ath11k,
        }
    }

    pub fn family(&self) -> SampleFamily {
        self.sample_type().family()
    }

    /// Частота канала, по которой работает частотный фильтр (МГц).
    ///
    /// Для ath10k/ath11k это `freq1`.
    pub fn freq(&self) -> u16 {
        match self {
            ScanResult::Ht20(s) => s.freq,
            ScanResult::Ht40(s) => s.freq,
            ScanResult::Ath10k(s) => s.freq1,
            ScanResult::Ath11k(s) => s.freq1,
        }
    }

    /// Корзина гистограммы RSSI (0..=255).
    ///
    /// Знаковый RSSI HT20 переинтерпретируется как байт, RSSI ath11k
    /// насыщается до 255. У HT20/40 два независимых RSSI, поэтому `None`.
    pub fn rssi_bucket(&self) -> Option<u8> {
        match self {
            ScanResult::Ht20(s) => Some(s.rssi as u8),
            ScanResult::Ht40(_) => None,
            ScanResult::Ath10k(s) => Some(s.rssi),
            ScanResult::Ath11k(s) => Some(u8::try_from(s.rssi).unwrap_or(u8::MAX)),
        }
    }

    pub fn max_exp(&self) -> u8 {
        match self {
            ScanResult::Ht20(s) => s.max_exp,
            ScanResult::Ht40(s) => s.max_exp,
            ScanResult::Ath10k(s) => s.max_exp,
            ScanResult::Ath11k(s) => s.max_exp,
        }
    }

    /// Сырые амплитуды бинов.
    pub fn bins(&self) -> &[u8] {
        match self {
            ScanResult::Ht20(s) => &s.data,
            ScanResult::Ht40(s) => &s.data,
            ScanResult::Ath10k(s) => &s.data,
            ScanResult::Ath11k(s) => &s.data,
        }
    }

    /// Метка времени TSF. У ath11k передаются только младшие 32 бита.
    pub fn tsf(&self) -> u64 {
        match self {
            ScanResult::Ht20(s) => s.tsf,
            ScanResult::Ht40(s) => s.tsf,
            ScanResult::Ath10k(s) => s.tsf,
            ScanResult::Ath11k(s) => u64::from(s.tsf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_ht20() {
        let result = ScanResult::Ht20(Ht20Sample {
            freq: 2412,
            rssi: -5,
            max_exp: 2,
            tsf: 42,
            ..Default::default()
        });

        assert_eq!(result.sample_type(), SampleType::Ht20);
        assert_eq!(result.family(), SampleFamily::Ht9k);
        assert_eq!(result.freq(), 2412);
        assert_eq!(result.rssi_bucket(), Some(251));
        assert_eq!(result.max_exp(), 2);
        assert_eq!(result.bins().len(), 56);
        assert_eq!(result.tsf(), 42);
    }

    #[test]
    fn test_accessors_chip_generation() {
        let ath10k = ScanResult::Ath10k(Ath10kSample {
            freq1: 5180,
            freq2: 5210,
            rssi: 30,
            data: vec![1; 64],
            ..Default::default()
        });
        assert_eq!(ath10k.freq(), 5180);
        assert_eq!(ath10k.rssi_bucket(), Some(30));
        assert_eq!(ath10k.bins().len(), 64);
        assert_eq!(ath10k.family(), SampleFamily::ChipGeneration);

        let ath11k = ScanResult::Ath11k(Ath11kSample {
            freq1: 5955,
            rssi: 700,
            tsf: u32::MAX,
            ..Default::default()
        });
        assert_eq!(ath11k.freq(), 5955);
        assert_eq!(ath11k.rssi_bucket(), Some(255));
        assert_eq!(ath11k.tsf(), u64::from(u32::MAX));
    }

    #[test]
    fn test_ht40_has_no_rssi_bucket() {
        let result = ScanResult::Ht40(Ht40Sample::default());
        assert_eq!(result.rssi_bucket(), None);
        assert_eq!(result.bins().len(), 128);
    }
}
