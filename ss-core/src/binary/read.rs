//! Чтение полей из сетевого (big-endian) представления.
//!
//! Функции не проверяют границы: вызывающая сторона обязана заранее
//! убедиться, что в `buf` достаточно байт начиная с `off`.

use byteorder::{BigEndian, ByteOrder};

pub fn read_u8(
    buf: &[u8],
    off: &mut usize,
) -> u8 {
    let v = buf[*off];
    *off += 1;
    v
}

pub fn read_i8(
    buf: &[u8],
    off: &mut usize,
) -> i8 {
    read_u8(buf, off) as i8
}

pub fn read_u16_be(
    buf: &[u8],
    off: &mut usize,
) -> u16 {
    let v = BigEndian::read_u16(&buf[*off..*off + 2]);
    *off += 2;
    v
}

pub fn read_i16_be(
    buf: &[u8],
    off: &mut usize,
) -> i16 {
    let v = BigEndian::read_i16(&buf[*off..*off + 2]);
    *off += 2;
    v
}

pub fn read_u32_be(
    buf: &[u8],
    off: &mut usize,
) -> u32 {
    let v = BigEndian::read_u32(&buf[*off..*off + 4]);
    *off += 4;
    v
}

pub fn read_i32_be(
    buf: &[u8],
    off: &mut usize,
) -> i32 {
    let v = BigEndian::read_i32(&buf[*off..*off + 4]);
    *off += 4;
    v
}

pub fn read_u64_be(
    buf: &[u8],
    off: &mut usize,
) -> u64 {
    let v = BigEndian::read_u64(&buf[*off..*off + 8]);
    *off += 8;
    v
}

/// Копирует `N` байт в массив фиксированного размера.
pub fn read_array<const N: usize>(
    buf: &[u8],
    off: &mut usize,
) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[*off..*off + N]);
    *off += N;
    out
}
