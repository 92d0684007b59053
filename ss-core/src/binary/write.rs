//! Запись полей в сетевом (big-endian) порядке байт.

pub fn write_u8(
    buf: &mut Vec<u8>,
    val: u8,
) {
    buf.push(val);
}

pub fn write_i8(
    buf: &mut Vec<u8>,
    val: i8,
) {
    buf.push(val as u8);
}

pub fn write_u16_be(
    buf: &mut Vec<u8>,
    val: u16,
) {
    buf.extend_from_slice(&val.to_be_bytes());
}

pub fn write_i16_be(
    buf: &mut Vec<u8>,
    val: i16,
) {
    buf.extend_from_slice(&val.to_be_bytes());
}

pub fn write_u32_be(
    buf: &mut Vec<u8>,
    val: u32,
) {
    buf.extend_from_slice(&val.to_be_bytes());
}

pub fn write_i32_be(
    buf: &mut Vec<u8>,
    val: i32,
) {
    buf.extend_from_slice(&val.to_be_bytes());
}

pub fn write_u64_be(
    buf: &mut Vec<u8>,
    val: u64,
) {
    buf.extend_from_slice(&val.to_be_bytes());
}
