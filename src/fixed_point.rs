//! Conversions from right-justified fixed-point register fields to `f32`.
//!
//! `binary_point` is the number of fractional bits, `width` the size of the field in bits
//! (1 to 32). Bits above `width` are ignored.

fn field_mask(width: u16) -> u32 {
    debug_assert!((1..=32).contains(&width), "bitfield width out of range: {width}");
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

fn scale(binary_point: u16) -> f32 {
    debug_assert!(binary_point < 64, "binary point out of range: {binary_point}");
    (1u64 << binary_point) as f32
}

/// Convert an unsigned bitfield into a floating point number.
pub fn convert_unsigned_fixed_point(value: u32, binary_point: u16, width: u16) -> f32 {
    (value & field_mask(width)) as f32 / scale(binary_point)
}

/// Sign extend the low `width` bits of `value` as a two's complement number.
pub fn sign_extend_bitfield(value: u32, width: u16) -> i32 {
    if width >= 32 {
        return value as i32;
    }

    let sign = 1u32 << (width - 1);
    let x = value & field_mask(width);

    (x ^ sign).wrapping_sub(sign) as i32
}

/// Sign extend a bitfield then convert it into a floating point number.
pub fn convert_signed_fixed_point(value: u32, binary_point: u16, width: u16) -> f32 {
    sign_extend_bitfield(value, width) as f32 / scale(binary_point)
}
