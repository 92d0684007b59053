/// Максимальное количество бинов в выборке ath11k
pub const SPECTRAL_ATH11K_MAX_NUM_BINS: usize = 512;

/// Выборка ath11k: заголовок фиксированного размера + 16..512 бинов.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ath11kSample {
    pub chan_width_mhz: u8,
    pub max_index: i8,
    pub max_exp: u8,
    pub freq1: u16,
    pub freq2: u16,
    pub max_magnitude: u16,
    pub rssi: u16,
    /// Младшие 32 бита TSF
    pub tsf: u32,
    pub noise: i32,
    pub data: Vec<u8>,
}
