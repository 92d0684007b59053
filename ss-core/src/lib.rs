//! Разбор захватов спектрального сканирования и индекс качества частоты
//!
//! Декодер TLV записей ath9k (HT20, HT20/40), ath10k и ath11k и расчёт
//! индекса качества по декодированным выборкам.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use ss_core::{compute_index, decode, read_capture, SampleFilter, DEFAULT_MAX_CAPTURE_SIZE};
//!
//! let buf = read_capture("scan.bin", DEFAULT_MAX_CAPTURE_SIZE)?;
//! let (records, diagnostics) = decode(&buf);
//! println!("{} records, {} diagnostics", records.len(), diagnostics.len());
//!
//! let index = compute_index(&records, &SampleFilter::by_freq(2412))?;
//! println!("{index}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod capture;
pub mod decoder;
pub mod diagnostic;
pub mod format;
pub mod index;

pub use capture::*;
pub use decoder::*;
pub use diagnostic::*;
pub use format::*;
pub use index::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
