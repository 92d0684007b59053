/// Количество бинов в выборке HT20
pub const SPECTRAL_HT20_NUM_BINS: usize = 56;

/// Выборка ath9k для канала 20 МГц (фиксированный размер)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ht20Sample {
    /// Показатель сдвига для масштабирования бинов
    pub max_exp: u8,
    /// Частота канала (МГц)
    pub freq: u16,
    pub rssi: i8,
    /// Уровень шума (дБм)
    pub noise: i8,
    pub max_magnitude: u16,
    pub max_index: u8,
    pub bitmap_weight: u8,
    /// Метка времени TSF (мкс)
    pub tsf: u64,
    /// Амплитуды по бинам
    pub data: [u8; SPECTRAL_HT20_NUM_BINS],
}

impl Default for Ht20Sample {
    fn default() -> Self {
        Self {
            max_exp: 0,
            freq: 0,
            rssi: 0,
            noise: 0,
            max_magnitude: 0,
            max_index: 0,
            bitmap_weight: 0,
            tsf: 0,
            data: [0; SPECTRAL_HT20_NUM_BINS],
        }
    }
}
