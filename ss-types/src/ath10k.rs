/// Максимальное количество бинов в выборке ath10k
pub const SPECTRAL_ATH10K_MAX_NUM_BINS: usize = 256;

/// Выборка ath10k: заголовок фиксированного размера + 64/128/256 бинов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ath10kSample {
    /// Ширина канала (МГц)
    pub chan_width_mhz: u8,
    /// Центральная частота первого сегмента (МГц)
    pub freq1: u16,
    /// Центральная частота второго сегмента (МГц, 80+80)
    pub freq2: u16,
    /// Уровень шума (дБм). Нулевой шум означает бракованную выборку.
    pub noise: i16,
    pub max_magnitude: u16,
    pub total_gain_db: u16,
    pub base_pwr_db: u16,
    /// Метка времени TSF (мкс)
    pub tsf: u64,
    pub max_index: i8,
    pub rssi: u8,
    pub relpwr_db: u8,
    pub avgpwr_db: u8,
    /// Показатель сдвига для масштабирования бинов
    pub max_exp: u8,
    /// Амплитуды по бинам
    pub data: Vec<u8>,
}
