use crate::ChannelType;

/// Количество бинов в выборке HT20/40 (обе половины)
pub const SPECTRAL_HT20_40_NUM_BINS: usize = 128;

/// Количество бинов в одной половине (20 МГц) выборки HT20/40
pub const SPECTRAL_HT20_40_HALF_BINS: usize = SPECTRAL_HT20_40_NUM_BINS / 2;

/// Выборка ath9k для канала 40 МГц.
///
/// Бины `0..64` относятся к нижней половине канала, `64..128` к верхней.
/// Шум и RSSI передаются отдельно для каждой половины.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ht40Sample {
    /// Тип канала nl80211 (сырое значение)
    pub channel_type: u8,
    /// Частота канала (МГц)
    pub freq: u16,
    pub lower_rssi: i8,
    pub upper_rssi: i8,
    /// Метка времени TSF (мкс)
    pub tsf: u64,
    pub lower_noise: i8,
    pub upper_noise: i8,
    pub lower_max_magnitude: u16,
    pub upper_max_magnitude: u16,
    pub lower_max_index: u8,
    pub upper_max_index: u8,
    pub lower_bitmap_weight: u8,
    pub upper_bitmap_weight: u8,
    /// Показатель сдвига для масштабирования бинов
    pub max_exp: u8,
    /// Амплитуды по бинам
    pub data: [u8; SPECTRAL_HT20_40_NUM_BINS],
}

impl Ht40Sample {
    /// Декодированный тип канала, если значение известно.
    pub fn channel(&self) -> Option<ChannelType> {
        ChannelType::from_u8(self.channel_type)
    }

    pub fn lower_bins(&self) -> &[u8] {
        &self.data[..SPECTRAL_HT20_40_HALF_BINS]
    }

    pub fn upper_bins(&self) -> &[u8] {
        &self.data[SPECTRAL_HT20_40_HALF_BINS..]
    }
}

impl Default for Ht40Sample {
    fn default() -> Self {
        Self {
            channel_type: ChannelType::Ht40Plus.as_u8(),
            freq: 0,
            lower_rssi: 0,
            upper_rssi: 0,
            tsf: 0,
            lower_noise: 0,
            upper_noise: 0,
            lower_max_magnitude: 0,
            upper_max_magnitude: 0,
            lower_max_index: 0,
            upper_max_index: 0,
            lower_bitmap_weight: 0,
            upper_bitmap_weight: 0,
            max_exp: 0,
            data: [0; SPECTRAL_HT20_40_NUM_BINS],
        }
    }
}
