pub mod ath10k;
pub mod ath11k;
pub mod channel;
pub mod error;
pub mod ht20;
pub mod ht40;
pub mod sample_type;
pub mod scan_result;

pub use ath10k::*;
pub use ath11k::*;
pub use channel::*;
pub use error::*;
pub use ht20::*;
pub use ht40::*;
pub use sample_type::*;
pub use scan_result::*;
