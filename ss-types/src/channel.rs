/// Тип канала nl80211, передаваемый в выборках HT20/40
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelType {
    /// Без HT
    NoHt = 0,
    /// HT20
    Ht20 = 1,
    /// HT40, вторичный канал ниже основного
    Ht40Minus = 2,
    /// HT40, вторичный канал выше основного
    Ht40Plus = 3,
}

impl ChannelType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(ChannelType::NoHt),
            1 => Some(ChannelType::Ht20),
            2 => Some(ChannelType::Ht40Minus),
            3 => Some(ChannelType::Ht40Plus),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}
