//! Static English dictionary for the text transform.
//!
//! 1024 of the most common English words, at least two characters each,
//! packed at 6 bits per symbol. Symbols 0..=26 are lowercase letters
//! (`'a' + symbol`), 27..=31 are padding, and adding 32 to a symbol marks
//! the first letter of a word.

use std::fmt;

/// Multiplier for the exact-case word hash.
pub const HASH1: i32 = 0x7FEB_352D;
/// Multiplier mixed with each character of a word.
pub const HASH2: i32 = 0x846C_A68B_u32 as i32;

/// Longest word the dynamic dictionary will accept.
pub const MAX_WORD_LENGTH: i32 = 32;

pub const PACKED_WORDS: [u8; 4107] = [
    0xCC, 0x71, 0x21, 0x12, 0x03, 0x43, 0xB8, 0x5A, 0x0D, 0xCC, 0xED, 0x88,
    0x4C, 0x7A, 0x13, 0xCC, 0x70, 0x13, 0x94, 0xE4, 0x78, 0x39, 0x49, 0xC4,
    0x9C, 0x05, 0x44, 0xB8, 0xDC, 0x80, 0x20, 0x3C, 0x80, 0x62, 0x04, 0xE1,
    0x51, 0x3D, 0x84, 0x85, 0x89, 0xC0, 0x0F, 0x31, 0xC4, 0x62, 0x04, 0xB6,
    0x39, 0x42, 0xC3, 0xD8, 0x73, 0xAE, 0x46, 0x20, 0x0D, 0xB0, 0x06, 0x23,
    0x3B, 0x31, 0xC8, 0x4B, 0x60, 0x12, 0xA1, 0x2B, 0x14, 0x08, 0x78, 0x0D,
    0x62, 0x54, 0x4E, 0x32, 0xD3, 0x93, 0xC8, 0x71, 0x36, 0x1C, 0x04, 0xF3,
    0x1C, 0x42, 0x11, 0xD8, 0x72, 0x02, 0x1E, 0x61, 0x13, 0x98, 0x85, 0x44,
    0x9C, 0x04, 0xA0, 0x44, 0x49, 0xC8, 0x32, 0x71, 0x11, 0x88, 0xE3, 0x04,
    0xB1, 0x8B, 0x94, 0x47, 0x61, 0x11, 0x13, 0x62, 0x0B, 0x2F, 0x23, 0x8C,
    0x12, 0x11, 0x02, 0x01, 0x44, 0x84, 0xCC, 0x71, 0x11, 0x13, 0x31, 0xD1,
    0x39, 0x41, 0x87, 0xCC, 0x42, 0xCB, 0xD8, 0x71, 0x0D, 0xD8, 0xE4, 0x4A,
    0xCC, 0x71, 0x0C, 0xE0, 0x44, 0xF4, 0x3E, 0xE5, 0x8D, 0xB9, 0x44, 0xE8,
    0x35, 0x33, 0xA9, 0x51, 0x24, 0xE2, 0x39, 0x42, 0xC3, 0xB9, 0x51, 0x11,
    0xB8, 0xB0, 0xF3, 0x1C, 0x83, 0x4A, 0x8C, 0x06, 0x36, 0x01, 0x8C, 0xC7,
    0x00, 0xDA, 0xC8, 0x28, 0x4B, 0x93, 0x1C, 0x44, 0x67, 0x39, 0x6C, 0xC7,
    0x10, 0xDA, 0x13, 0x4A, 0xF1, 0x0E, 0x3C, 0xB1, 0x33, 0x58, 0xEB, 0x0E,
    0x44, 0x4C, 0xC7, 0x11, 0x21, 0x21, 0x10, 0x43, 0x6D, 0x39, 0x6D, 0x80,
    0x35, 0x39, 0x48, 0x45, 0x24, 0xED, 0x11, 0x6D, 0x12, 0x13, 0x21, 0x04,
    0xCC, 0x83, 0x04, 0xB0, 0x03, 0x6C, 0x00, 0xD6, 0x33, 0x1C, 0x83, 0x46,
    0xB0, 0x02, 0x84, 0x9C, 0x44, 0x44, 0xD8, 0x42, 0xCB, 0xB8, 0xD2, 0xD8,
    0x9C, 0x84, 0xB5, 0x11, 0x16, 0x20, 0x15, 0x31, 0x11, 0xD8, 0x84, 0xC7,
    0x39, 0x44, 0xE0, 0x34, 0xE4, 0xC7, 0x11, 0x1B, 0x4E, 0x80, 0xB2, 0xE1,
    0x10, 0xB2, 0x04, 0x54, 0x48, 0x44, 0x14, 0xE4, 0x44, 0xB8, 0x51, 0x73,
    0x1C, 0xE5, 0x06, 0x1F, 0x23, 0xA0, 0x18, 0x02, 0x0D, 0x49, 0x3D, 0x87,
    0x20, 0xB1, 0x2B, 0x01, 0x24, 0xF3, 0x38, 0xE8, 0xCE, 0x58, 0xDC, 0xCE,
    0x0C, 0x06, 0x32, 0x00, 0xC1, 0x21, 0x00, 0x22, 0xB3, 0x00, 0xA1, 0x24,
    0x00, 0x21, 0xE3, 0x20, 0x51, 0x44, 0x44, 0x43, 0x53, 0xD8, 0x71, 0x11,
    0x12, 0x11, 0x13, 0x58, 0x41, 0x0D, 0xCC, 0x73, 0x92, 0x12, 0x45, 0x44,
    0x37, 0x21, 0x04, 0x37, 0x43, 0x43, 0x11, 0x18, 0x01, 0x39, 0x44, 0xEE,
    0x34, 0x48, 0x0B, 0x48, 0xE9, 0x40, 0x09, 0x3B, 0x14, 0x49, 0x38, 0x02,
    0x4D, 0x40, 0x0B, 0x2D, 0x8B, 0xD1, 0x11, 0x51, 0x0D, 0x4E, 0x45, 0xCF,
    0x10, 0x24, 0xE2, 0x38, 0xD4, 0xC0, 0x20, 0xD8, 0x8E, 0x34, 0x21, 0x11,
    0x36, 0xC1, 0x32, 0x08, 0x73, 0x8E, 0x2F, 0x81, 0x00, 0x47, 0x32, 0x0F,
    0xAC, 0x00, 0x63, 0x50, 0x49, 0x15, 0x11, 0x1C, 0xCE, 0x58, 0x04, 0x43,
    0x98, 0x84, 0x4B, 0x94, 0x84, 0x4C, 0x98, 0xB0, 0x12, 0x4A, 0x60, 0x12,
    0xA8, 0x41, 0x0F, 0xD8, 0xE4, 0x4B, 0x0F, 0x24, 0xC8, 0x2C, 0xBD, 0x84,
    0x35, 0x3C, 0x87, 0x39, 0x42, 0xC3, 0xC8, 0xF1, 0x0D, 0x0F, 0x24, 0xC0,
    0x18, 0x48, 0xCE, 0x09, 0x33, 0x91, 0xB0, 0x81, 0x87, 0x4E, 0x93, 0x81,
    0x98, 0xE8, 0x8E, 0x35, 0x32, 0x0D, 0x50, 0x49, 0x15, 0x11, 0x16, 0x0E,
    0x34, 0x4B, 0x44, 0x54, 0x44, 0x60, 0x35, 0x25, 0x84, 0x46, 0x51, 0x16,
    0xB0, 0x40, 0x0D, 0x8C, 0x81, 0x45, 0x11, 0x11, 0x0D, 0x08, 0x4C, 0xC4,
    0x34, 0x3B, 0x44, 0x10, 0x3A, 0xC4, 0x01, 0x51, 0x33, 0x45, 0x8B, 0x48,
    0x08, 0x49, 0xCE, 0x2C, 0x3C, 0x8E, 0x30, 0x44, 0xC7, 0x20, 0xD1, 0xA0,
    0x48, 0xAD, 0x80, 0x44, 0xCA, 0xC8, 0x3E, 0x23, 0x95, 0x11, 0x1A, 0x12,
    0x49, 0x41, 0x27, 0x00, 0xF3, 0xC4, 0x37, 0x35, 0x11, 0x36, 0xB3, 0x8E,
    0x2B, 0x25, 0x11, 0x12, 0x32, 0x12, 0x08, 0xE5, 0x44, 0x46, 0x52, 0x06,
    0x1D, 0x3B, 0x00, 0x0E, 0x32, 0x11, 0x10, 0x24, 0xC8, 0x38, 0xD8, 0x06,
    0x44, 0x41, 0x32, 0x38, 0xC1, 0x0E, 0x34, 0x49, 0x40, 0x20, 0xBC, 0x44,
    0x48, 0xF1, 0x02, 0x4E, 0xD3, 0x93, 0x20, 0x21, 0x22, 0x1C, 0xE2, 0x02,
    0x12, 0x11, 0x06, 0x20, 0xDC, 0xC7, 0x44, 0x41, 0x32, 0x61, 0x24, 0xC4,
    0x32, 0xB1, 0x15, 0x10, 0xB9, 0x44, 0x10, 0xBB, 0x04, 0x11, 0x38, 0x8E,
    0x30, 0xF0, 0x0D, 0x62, 0x13, 0x97, 0xC8, 0x73, 0x96, 0xBC, 0xB0, 0x18,
    0xAC, 0x85, 0x44, 0xAC, 0x44, 0xD3, 0x11, 0x19, 0x06, 0x1A, 0xD5, 0x0C,
    0x04, 0x44, 0x6E, 0x3C, 0x43, 0x6F, 0x44, 0xE0, 0x4B, 0x10, 0xC9, 0x40,
    0x4E, 0x70, 0x0D, 0x0E, 0xC1, 0x00, 0x49, 0x44, 0x44, 0xC1, 0x41, 0x12,
    0x4C, 0x83, 0x8D, 0x88, 0x02, 0xCB, 0xC4, 0x43, 0x04, 0x30, 0x11, 0x11,
    0x88, 0x44, 0x53, 0x00, 0x83, 0x6F, 0x51, 0x3B, 0x44, 0x5D, 0x38, 0x87,
    0x00, 0x84, 0x72, 0x4C, 0x04, 0x53, 0xC5, 0x43, 0x71, 0x00, 0x84, 0x84,
    0x98, 0xE0, 0x0B, 0xC4, 0x40, 0x0B, 0x2D, 0x89, 0xCE, 0x30, 0x4C, 0xC4,
    0x02, 0x20, 0x0D, 0x0C, 0x80, 0xC0, 0x4C, 0x4B, 0x0E, 0x34, 0x46, 0x21,
    0x51, 0x22, 0x0D, 0x11, 0x24, 0xB8, 0x39, 0x43, 0x46, 0x98, 0xE3, 0x83,
    0x88, 0xE5, 0x11, 0x4E, 0x52, 0x0D, 0x0E, 0xA3, 0x4E, 0x5A, 0xA2, 0x0D,
    0x0E, 0x71, 0x0B, 0x3E, 0xD2, 0x06, 0x1D, 0x38, 0x87, 0x20, 0xB0, 0xEB,
    0x39, 0x3E, 0x0E, 0x51, 0x1D, 0x12, 0x91, 0x81, 0x38, 0x11, 0x2D, 0x8E,
    0x44, 0x38, 0x48, 0x4F, 0x50, 0x0D, 0xB0, 0xE3, 0x53, 0x1E, 0x70, 0x0B,
    0x16, 0xB3, 0x96, 0xB0, 0x82, 0xCB, 0x20, 0xE3, 0x67, 0x20, 0x61, 0xEE,
    0x44, 0x60, 0x0D, 0x21, 0x90, 0x13, 0x20, 0xE3, 0x71, 0x10, 0x39, 0x91,
    0x10, 0x43, 0x61, 0x2D, 0x41, 0x36, 0x1C, 0x84, 0xC4, 0x84, 0xB0, 0x02,
    0x2B, 0x83, 0x94, 0x45, 0x21, 0x0B, 0x16, 0x42, 0x06, 0x1D, 0x38, 0x4E,
    0x4C, 0x7A, 0xC8, 0x4D, 0x32, 0xC4, 0x9C, 0xE5, 0x12, 0x12, 0xB1, 0x13,
    0x8C, 0x44, 0x8F, 0x21, 0x31, 0x2F, 0x44, 0xE5, 0x48, 0x0C, 0x4C, 0x84,
    0x45, 0x52, 0x02, 0x12, 0x72, 0x0C, 0x48, 0x42, 0xC5, 0x95, 0x12, 0x04,
    0x34, 0x38, 0xC4, 0x48, 0x24, 0x48, 0x04, 0x49, 0x40, 0x4C, 0x71, 0x11,
    0x8C, 0x45, 0x44, 0x2C, 0xE3, 0xCC, 0x10, 0xD4, 0xE0, 0x58, 0x06, 0x2A,
    0x20, 0xB2, 0xF3, 0x44, 0x83, 0xE7, 0x39, 0x44, 0x66, 0x00, 0xC1, 0x2E,
    0x15, 0x31, 0x0D, 0xBC, 0xB0, 0x0D, 0x4E, 0xF2, 0xC0, 0x08, 0x49, 0x0D,
    0x0E, 0x03, 0x0E, 0x34, 0x6C, 0x88, 0x34, 0x21, 0x32, 0x4C, 0x03, 0x43,
    0x8C, 0x44, 0x88, 0x18, 0xDB, 0xC0, 0x45, 0x32, 0x02, 0x50, 0xB0, 0x11,
    0xC9, 0x40, 0xC3, 0x10, 0xD2, 0xD8, 0xB0, 0x43, 0x01, 0x11, 0x1B, 0xC0,
    0x62, 0xB0, 0x16, 0x84, 0xE3, 0x8A, 0xC8, 0x82, 0xC4, 0x34, 0x21, 0x20,
    0x2C, 0xC3, 0x92, 0x4E, 0x83, 0x42, 0x2D, 0x40, 0xC4, 0x80, 0x60, 0x08,
    0x36, 0x42, 0x13, 0x1C, 0x44, 0x73, 0x38, 0xE2, 0xE5, 0x21, 0x51, 0x2E,
    0x34, 0x21, 0x2B, 0x10, 0x04, 0x93, 0x91, 0x73, 0xCB, 0x00, 0x83, 0x68,
    0x0C, 0x43, 0x53, 0x20, 0x56, 0x34, 0x35, 0x32, 0x0B, 0xC8, 0x84, 0xC4,
    0xB0, 0x83, 0x54, 0x4C, 0x48, 0x8E, 0x50, 0xF2, 0xC4, 0xD8, 0x41, 0x0A,
    0xB0, 0x04, 0xD3, 0x11, 0x18, 0x51, 0x20, 0xD1, 0xA3, 0x11, 0x30, 0x08,
    0x2E, 0x83, 0x45, 0x39, 0x13, 0x00, 0x4C, 0x83, 0x8D, 0xB4, 0xE4, 0xC7,
    0x20, 0xD1, 0xA0, 0x35, 0x84, 0xC7, 0x20, 0xD1, 0xA4, 0x54, 0x44, 0x58,
    0x4C, 0x72, 0x0D, 0x1A, 0x01, 0x8E, 0xAC, 0x40, 0x03, 0xC8, 0xE3, 0x04,
    0x4C, 0x83, 0x04, 0x4B, 0x43, 0x43, 0x11, 0x14, 0x93, 0x00, 0xD0, 0xF6,
    0x1C, 0x44, 0xC7, 0x11, 0x1B, 0x40, 0x4D, 0x44, 0x44, 0xCC, 0xE1, 0x84,
    0x4C, 0x71, 0x11, 0x94, 0xE2, 0xCB, 0x39, 0x6B, 0xC0, 0x44, 0x43, 0x53,
    0xC9, 0x33, 0x8F, 0xA0, 0xD0, 0xC4, 0x10, 0x38, 0xC8, 0x14, 0x52, 0x02,
    0x50, 0xB4, 0xEF, 0x50, 0x12, 0xC8, 0x0A, 0x02, 0xD1, 0x10, 0x00, 0xD8,
    0xC8, 0xF1, 0x00, 0x2A, 0xC0, 0x08, 0x35, 0x30, 0x08, 0x37, 0x11, 0x0C,
    0x00, 0x83, 0x67, 0x10, 0x04, 0x60, 0x2C, 0xB3, 0x96, 0xB0, 0x40, 0xC8,
    0x02, 0xE1, 0x45, 0x20, 0x21, 0x21, 0x10, 0xD1, 0x05, 0x21, 0x38, 0xCE,
    0x39, 0x19, 0xD4, 0x1A, 0xF1, 0x11, 0x48, 0xE3, 0x6B, 0x01, 0x31, 0x11,
    0x8D, 0x44, 0x48, 0x34, 0x6D, 0x80, 0x46, 0x72, 0x12, 0x4C, 0xE4, 0x58,
    0x81, 0x11, 0x94, 0x13, 0x62, 0x13, 0x1C, 0x83, 0x72, 0x11, 0x38, 0x11,
    0x4C, 0x80, 0x8B, 0x13, 0x24, 0xC0, 0x4C, 0x83, 0x8D, 0xB0, 0xE4, 0x4D,
    0x20, 0xD1, 0xB6, 0x00, 0xB2, 0xA4, 0x54, 0x43, 0x53, 0xD8, 0x83, 0x62,
    0x1C, 0xE3, 0x92, 0x12, 0x11, 0x07, 0x01, 0x52, 0x0E, 0x47, 0x21, 0xCE,
    0x39, 0x39, 0x48, 0x44, 0x49, 0x4E, 0x38, 0x3C, 0xC8, 0x4C, 0xB1, 0x20,
    0x44, 0xE5, 0x0D, 0x0E, 0x02, 0x11, 0xCC, 0x40, 0x02, 0x1C, 0x44, 0x66,
    0x00, 0xFC, 0x94, 0x04, 0x91, 0x02, 0x4E, 0x43, 0x4E, 0x50, 0x61, 0xEF,
    0x44, 0xE5, 0x44, 0x80, 0x24, 0x4E, 0x49, 0x28, 0x0B, 0x4C, 0x73, 0x94,
    0x18, 0x79, 0xC4, 0x00, 0x39, 0x4E, 0x39, 0x3C, 0x84, 0x08, 0xE3, 0x43,
    0x84, 0xE6, 0x2C, 0x00, 0x83, 0x6B, 0x20, 0x48, 0x01, 0x2C, 0x48, 0x88,
    0x54, 0x82, 0xF3, 0x00, 0x12, 0xC4, 0xAC, 0xE5, 0x44, 0xBD, 0x13, 0x82,
    0x11, 0x24, 0xAE, 0x14, 0x51, 0x11, 0xC9, 0x35, 0x03, 0x10, 0xD4, 0xE2,
    0x38, 0xD4, 0x88, 0x0C, 0x44, 0x60, 0x3C, 0xF1, 0x00, 0x47, 0x24, 0xD4,
    0x0D, 0x88, 0x54, 0x62, 0xD1, 0x00, 0x44, 0xB6, 0x27, 0x50, 0xC0, 0x0D,
    0x91, 0x52, 0x03, 0x10, 0xD0, 0x84, 0xCC, 0x45, 0xD3, 0xB0, 0x44, 0xC7,
    0x38, 0x3A, 0x0D, 0x08, 0xB5, 0x03, 0x20, 0xD1, 0xB2, 0x10, 0xD0, 0xF1,
    0x10, 0x02, 0xC8, 0x64, 0x4C, 0x84, 0x35, 0x21, 0x21, 0x50, 0x82, 0xC3,
    0x88, 0xE3, 0x53, 0x44, 0xE2, 0xE0, 0x50, 0x32, 0x04, 0x34, 0x21, 0x32,
    0x11, 0x51, 0x11, 0x00, 0xB8, 0x94, 0x4E, 0x23, 0x8B, 0x2C, 0x41, 0x84,
    0xA0, 0xD4, 0xC4, 0x44, 0x44, 0x93, 0xC9, 0x40, 0x82, 0x11, 0x24, 0xB2,
    0x3C, 0x40, 0x88, 0x00, 0xBC, 0x48, 0x48, 0xA9, 0x17, 0x3C, 0x44, 0x48,
    0x10, 0xD0, 0x84, 0x84, 0x41, 0xC8, 0x34, 0x38, 0x44, 0x4D, 0x31, 0x11,
    0xC4, 0x44, 0x94, 0x2D, 0x3C, 0xD1, 0x10, 0x04, 0xF2, 0x21, 0x7C, 0x44,
    0x2C, 0x04, 0xC8, 0x38, 0xD4, 0x87, 0x20, 0xF8, 0x0D, 0x20, 0xC0, 0x0B,
    0xA0, 0xC3, 0xD1, 0x39, 0x51, 0x27, 0x00, 0x84, 0x72, 0x4C, 0x06, 0x33,
    0x38, 0xFC, 0x44, 0x0D, 0x40, 0x84, 0xBC, 0x44, 0x47, 0x00, 0xF4, 0xAB,
    0x01, 0x31, 0x36, 0x44, 0x84, 0xC4, 0x46, 0xF2, 0x02, 0x2A, 0x42, 0xD2,
    0x13, 0x22, 0x06, 0x34, 0x81, 0x48, 0x08, 0x03, 0x53, 0x88, 0x70, 0x0D,
    0x08, 0x49, 0xCE, 0x4C, 0x42, 0xE6, 0x10, 0xD1, 0x11, 0x00, 0xBC, 0x4E,
    0x08, 0xAC, 0x44, 0x41, 0x42, 0x11, 0x12, 0x02, 0xCE, 0x34, 0x69, 0x48,
    0x4F, 0x31, 0xC4, 0x31, 0x21, 0x0B, 0x54, 0x44, 0xB1, 0x10, 0xF3, 0x91,
    0x4E, 0x23, 0x8D, 0x0C, 0x84, 0xC8, 0x38, 0xDC, 0x44, 0x00, 0x21, 0xF3,
    0x45, 0x44, 0xC7, 0x90, 0x51, 0x4E, 0x45, 0x38, 0xC4, 0x08, 0x80, 0xC4,
    0xC4, 0x04, 0xC4, 0x90, 0x35, 0x02, 0x01, 0x32, 0x0E, 0x36, 0x53, 0x91,
    0x08, 0x49, 0x80, 0x44, 0x31, 0x0D, 0x8D, 0x15, 0x06, 0xAC, 0x40, 0x03,
    0x11, 0x1D, 0x4E, 0x20, 0x21, 0x30, 0x50, 0x84, 0xC4, 0xD8, 0x73, 0x8B,
    0x13, 0x21, 0x04, 0x32, 0xC2, 0x0D, 0x0E, 0x52, 0x0D, 0x00, 0xB2, 0xD8,
    0xC8, 0x84, 0x71, 0x11, 0x35, 0x11, 0x36, 0x54, 0x44, 0x13, 0x24, 0xCE,
    0x45, 0x8C, 0x44, 0x48, 0xF3, 0x8D, 0x0E, 0xF5, 0x12, 0x1E, 0x00, 0x82,
    0x39, 0x10, 0xC8, 0x34, 0x68, 0x51, 0x39, 0x31, 0xC4, 0x46, 0xB1, 0x00,
    0x44, 0xDC, 0x8E, 0x36, 0x73, 0x8F, 0x12, 0x31, 0x15, 0x10, 0xB3, 0x8F,
    0x94, 0x41, 0x0B, 0x20, 0xD1, 0xB1, 0x10, 0x00, 0xE2, 0x01, 0x14, 0x58,
    0x8C, 0x84, 0x84, 0x01, 0x21, 0x31, 0x38, 0x00, 0xF5, 0x01, 0x12, 0x0E,
    0x51, 0x28, 0x40, 0x2C, 0xB8, 0x80, 0x48, 0x4B, 0x8F, 0x11, 0x10, 0x13,
    0x20, 0xE3, 0x62, 0x2C, 0xE4, 0x84, 0xD4, 0x84, 0x88, 0x4F, 0x11, 0x02,
    0x10, 0x85, 0x44, 0x85, 0x42, 0x0B, 0x0C, 0x83, 0x46, 0xD4, 0x02, 0xD4,
    0x13, 0x11, 0x12, 0x10, 0x04, 0x42, 0x1E, 0x55, 0x0B, 0x2E, 0xC3, 0x83,
    0x10, 0xBA, 0x4E, 0x20, 0xDC, 0x84, 0x01, 0x23, 0x8D, 0xCC, 0x05, 0xE3,
    0x21, 0x11, 0x02, 0x4C, 0xE4, 0x6F, 0x39, 0x22, 0x13, 0x20, 0xE3, 0x6F,
    0x2C, 0x06, 0x04, 0x47, 0x23, 0xCE, 0x45, 0x39, 0x11, 0x44, 0xE4, 0x71,
    0x10, 0x23, 0x91, 0x0F, 0x13, 0x96, 0x8C, 0x04, 0xC0, 0xBC, 0x03, 0xC4,
    0x47, 0x31, 0xC4, 0x39, 0x16, 0x32, 0x3C, 0x00, 0x84, 0x91, 0x51, 0x11,
    0x62, 0x53, 0x91, 0x33, 0x25, 0x0F, 0x3C, 0xE4, 0x53, 0x80, 0x24, 0xC8,
    0x38, 0xDB, 0x85, 0x14, 0x80, 0x88, 0x00, 0xBD, 0x87, 0x39, 0x21, 0x28,
    0x0C, 0x40, 0x27, 0x00, 0xF3, 0xD8, 0x9C, 0x40, 0x11, 0x4E, 0x11, 0x12,
    0x4F, 0x31, 0x00, 0x32, 0xF4, 0x4E, 0x24, 0x40, 0x93, 0x9C, 0x84, 0xE1,
    0x01, 0x21, 0x31, 0x10, 0xF4, 0x44, 0x48, 0x43, 0x53, 0xCC, 0xE5, 0x8D,
    0xBD, 0x42, 0xCB, 0x85, 0x44, 0xAC, 0x00, 0xF8, 0xD1, 0x62, 0xC3, 0x8C,
    0x88, 0x04, 0xE3, 0x00, 0x3C, 0x4E, 0x38, 0xCC, 0x8C, 0x20, 0xB1, 0x25,
    0x20, 0x42, 0xC3, 0xA0, 0xC3, 0xC0, 0x09, 0x39, 0x54, 0x34, 0x3A, 0xC0,
    0x44, 0x61, 0x23, 0x38, 0x69, 0xD4, 0x18, 0x4B, 0xD1, 0x10, 0xF0, 0x11,
    0x12, 0x43, 0x55, 0x21, 0x13, 0x8D, 0x30, 0x43, 0x53, 0x00, 0xBB, 0xD1,
    0x38, 0x35, 0x02, 0x12, 0x71, 0x11, 0x48, 0x42, 0xC5, 0xCC, 0x40, 0x02,
    0x1E, 0xE2, 0x0B, 0xC9, 0x40, 0x87, 0xC8, 0x84, 0xD4, 0x01, 0x32, 0x0E,
    0x37, 0x32, 0x04, 0x88, 0xE4, 0x93, 0xA0, 0xD0, 0xD4, 0x49, 0x34, 0x58,
    0xC8, 0xA2, 0x0D, 0xC9, 0x34, 0x44, 0x11, 0x3A, 0x0C, 0x00, 0x61, 0x28,
    0x4D, 0x21, 0x0B, 0x16, 0xF1, 0xCE, 0x34, 0x4B, 0xD1, 0x20, 0x21, 0x36,
    0x10, 0x04, 0x6C, 0x39, 0x24, 0xF2, 0x50, 0xDC, 0x8E, 0x38, 0xD8, 0x8B,
    0x10, 0x04, 0x6F, 0x44, 0x00, 0x93, 0x20, 0x21, 0x2F, 0x20, 0x40, 0x84,
    0xD8, 0x02, 0x13, 0xC4, 0x40, 0x84, 0x35, 0x3A, 0x0C, 0x3C, 0xE4, 0x53,
    0x00, 0xD4, 0xEF, 0x44, 0xE0, 0xD4, 0x09, 0x3A, 0xC4, 0x15, 0x3D, 0x80,
    0x2C, 0xBC, 0x84, 0x44, 0x81, 0x12, 0xB4, 0x45, 0x92, 0xC8, 0x70, 0x11,
    0x12, 0xC3, 0x95, 0x20, 0x4A, 0x88, 0x0E, 0xD3, 0x91, 0xC8, 0x83, 0x0F,
    0x2D, 0x8D, 0x88, 0x14, 0x4B, 0x8D, 0x4C, 0xE8, 0x80, 0x4C, 0x21, 0xEC,
    0x61, 0x21, 0x0B, 0x16, 0x52, 0x0D, 0x12, 0x23, 0x8C, 0x3D, 0x44, 0xC4,
    0x47, 0x23, 0x8D, 0x1A, 0x04, 0xD3, 0x10, 0xD4, 0xC8, 0x38, 0xD8, 0xD1,
    0x01, 0x69, 0x48, 0x2C, 0xCC, 0x44, 0x3D, 0x40, 0x4B, 0x20, 0x20, 0x0D,
    0xC8, 0x40, 0x94, 0x44, 0x84, 0xD8, 0xC8, 0x23, 0x91, 0x13, 0x31, 0x12,
    0x4F, 0x24, 0xCE, 0x08, 0xAB, 0xCE, 0x48, 0x84, 0xC8, 0x54, 0x48, 0x80,
    0x51, 0x21, 0x22, 0x10, 0xD4, 0xD4, 0x45, 0x8D, 0x88, 0x34, 0x33, 0x96,
    0xB0, 0x43, 0x0E, 0x45, 0x89, 0x17, 0x21, 0x24, 0xEB, 0x21, 0x24, 0xC4,
    0x37, 0x24, 0xD1, 0x00, 0x81, 0x87, 0x4E, 0x25, 0x0B, 0x4D, 0x44, 0x44,
    0x84, 0x82, 0xCB, 0x20, 0xE3, 0x65, 0x39, 0x13, 0x04, 0x46, 0x31, 0x02,
    0x21, 0x22, 0x0E, 0x36, 0x43, 0x44, 0x44, 0x66, 0x2C, 0x39, 0x51, 0x32,
    0x50, 0xC3, 0x04, 0x47, 0x63, 0x8D, 0x0C, 0x44, 0x71, 0x10, 0xB0, 0x13,
    0x12, 0x05, 0x40, 0x20, 0xB0, 0x01, 0x2C, 0x4A, 0xC8, 0x34, 0x4A, 0xC8,
    0x28, 0x42, 0xD8, 0xB9, 0x44, 0xD2, 0x20, 0x31, 0x32, 0x1C, 0xE4, 0xF2,
    0x1C, 0xE4, 0x53, 0x88, 0xE5, 0x0D, 0x4D, 0x16, 0x31, 0x38, 0xB1, 0x20,
    0x44, 0x40, 0x32, 0x20, 0xD1, 0x8B, 0x13, 0x15, 0x0B, 0x12, 0x30, 0x14,
    0x18, 0x74, 0xC4, 0x46, 0xC0, 0x11, 0x28, 0x44, 0xE8, 0x34, 0x32, 0x02,
    0x01, 0x31, 0x2F, 0x44, 0x44, 0x84, 0x35, 0x3A, 0xC0, 0x34, 0x38, 0x80,
    0x30, 0xF0, 0x08, 0x18, 0xDB, 0x00, 0x4C, 0x44, 0x48, 0x00, 0xBB, 0xCE,
    0x3D, 0x42, 0xC0, 0x4C, 0x83, 0x8D, 0x90, 0x23, 0x8D, 0x38, 0xC6, 0x2C,
    0x10, 0x32, 0x02, 0x00, 0xB9, 0xCE, 0x48, 0xF2, 0x13, 0x00, 0xB8, 0x87,
    0x51, 0x10, 0x87, 0x99, 0x13, 0x94, 0x34, 0x3C, 0xC7, 0x39, 0x44, 0x80,
    0x34, 0x38, 0x14, 0x4C, 0x73, 0x91, 0x21, 0x36, 0x28, 0x35, 0x24, 0xC4,
    0x00, 0x3C, 0x44, 0x08, 0x43, 0x53, 0x2D, 0x89, 0x54, 0x4D, 0x44, 0x44,
    0xD9, 0x13, 0x8D, 0x1A, 0x83, 0x55, 0x38, 0xB5, 0x44, 0xAC, 0x81, 0x44,
    0x9C, 0x42, 0x06, 0x1D, 0x3A, 0x0D, 0x09, 0x11, 0x00, 0x48, 0x4C, 0x48,
    0x18, 0x74, 0xE1, 0x00, 0xD2, 0xA2, 0x50, 0xB4, 0xD4, 0x44, 0x02, 0xE2,
    0x11, 0x14, 0xC0, 0x20, 0xD2, 0xD8, 0xD8, 0x44, 0x93, 0x91, 0x71, 0x02,
    0x51, 0x32, 0x15, 0x12, 0x13, 0x80, 0x44, 0x3C, 0x84, 0x10, 0xAA, 0xCE,
    0x34, 0x6B, 0x85, 0x14, 0x80, 0x84, 0x47, 0x24, 0xC0, 0x4C, 0x43, 0x04,
    0x35, 0x3C, 0x44, 0x49, 0x38, 0x40, 0x62, 0x31, 0x00, 0x2F, 0x63, 0x91,
    0x28, 0x44, 0x71, 0x11, 0x23, 0x94, 0x44, 0x21, 0x33, 0x1D, 0x13, 0x96,
    0x94, 0xE4, 0x56, 0x01, 0x10, 0xEF, 0x38, 0xB2, 0x02, 0x63, 0x20, 0x88,
    0x10, 0xD0, 0x84, 0x91, 0x81, 0x12, 0x84, 0x40, 0xE8, 0x4C, 0x43, 0x36,
    0x10, 0x03, 0xCE, 0x36, 0x52, 0x0B, 0x2E, 0xF2, 0xC0, 0x36, 0xC2, 0x0B,
    0x21, 0x30, 0x11, 0x62, 0x65, 0x0D, 0x9C, 0xE4, 0xE7, 0x10, 0x04, 0xE0,
    0x0C, 0x34, 0x44, 0x49, 0x28, 0x8E, 0x2C, 0x39, 0x4E, 0x09, 0x44, 0xA5,
    0x39, 0x11, 0x08, 0x18, 0xDC, 0xD1, 0x10, 0x04, 0xCC, 0x10, 0xD4, 0xE1,
    0x2C, 0xE3, 0x83, 0xD0, 0xF3, 0x8D, 0x88, 0xE5, 0x11, 0x48, 0x4C, 0xC7,
    0x21, 0x10, 0xF6, 0x01, 0x30, 0x87, 0x80, 0x51, 0x44, 0x09, 0x39, 0x00,
    0x44, 0xB6, 0x32, 0x4C, 0xE4, 0x44, 0xCC, 0x75, 0x12, 0xC8, 0xE5, 0x0D,
    0x0E, 0x45, 0x44, 0x45, 0x85, 0x87, 0x11, 0x11, 0x21, 0x00, 0x16, 0x20,
    0x0C, 0xC2, 0x0D, 0x21, 0x24, 0xD1, 0x01, 0x32, 0x0E, 0x36, 0xC3, 0x94,
    0x4C, 0x7B, 0xC0, 0x18, 0x49, 0x0D, 0x4C, 0x44, 0x6F, 0x44, 0xE0, 0x40,
    0x04, 0xB6, 0x2F, 0x38, 0x83, 0x53, 0xC8, 0x40, 0x13, 0xB4, 0x04, 0xD4,
    0x44, 0x02, 0xF1, 0x00, 0x21, 0x25, 0x01, 0x18, 0x87, 0x00, 0xB2, 0xC4,
    0x34, 0x61, 0x2F, 0x01, 0x24, 0xA0, 0x3C, 0xF2, 0xD8, 0xB0, 0x02, 0x0B,
    0xD1, 0x25, 0x00, 0x2C, 0xB6, 0x2C, 0x21, 0x7C, 0xCE, 0x50, 0x61, 0xE2,
    0x2C, 0x40, 0x11, 0x2D, 0x89, 0x91, 0x39, 0x69, 0x40, 0x09, 0x33, 0x91,
    0xC9, 0x30, 0x13, 0x12, 0xB3, 0x82, 0x00, 0xB9, 0x94, 0x62, 0x40, 0x12,
    0x4F, 0x20, 0x15, 0x13, 0x23, 0x94, 0x4C, 0x7C, 0x82, 0x10, 0xD1, 0x2C,
    0x39, 0x31, 0xC4, 0x46, 0x20, 0x11, 0x10, 0x44, 0x70, 0x50, 0x80, 0x8A,
    0x2D, 0x88, 0x84, 0x35, 0x34, 0x40, 0x2E, 0x50, 0x02, 0x12, 0x80, 0x84,
    0x80, 0x13, 0x95, 0x12, 0x11, 0x18, 0x38, 0xD0, 0xEF, 0x20, 0x24, 0xD4,
    0x44, 0x4B, 0x44, 0x4D, 0x63, 0x91, 0x2A, 0xC0, 0x0D, 0x00, 0x61, 0x0C,
    0x10, 0xD4, 0xE8, 0x34, 0x32, 0x15, 0x20, 0x35, 0x00, 0x2E, 0x50, 0x0D,
    0xC8, 0x86, 0x44, 0xC8, 0xF1, 0x04, 0x0E, 0x15, 0x12, 0x63, 0x21, 0x11,
    0x20, 0xE5, 0x12, 0xB8, 0x20, 0x94, 0x46, 0x00, 0xC3, 0xC4, 0x40, 0x03,
    0x63, 0x22, 0x06, 0x36, 0x23, 0x8B, 0x2C, 0x40, 0x93, 0x20, 0xE3, 0x6B,
    0x21, 0x24, 0xE0, 0x3C, 0xF4, 0x4E, 0x00, 0x21, 0xE2, 0x1C, 0x04, 0x46,
    0x13, 0x05, 0x00, 0x2C, 0x84, 0xD8, 0xBD, 0x11, 0x12, 0x49, 0x44, 0x44,
    0xD4, 0xE4, 0xC4, 0xB4, 0xE4, 0xC4, 0xBC, 0x04, 0x53, 0xC4, 0x40, 0x0B,
    0xD8, 0x40, 0x62, 0x51, 0x14, 0x44, 0x35, 0x38, 0xC4, 0x4C, 0x44, 0x4C,
    0x20, 0xD1, 0x33, 0x45, 0x41, 0x32, 0x00, 0x3D, 0x87, 0x01, 0x31, 0x15,
    0x11, 0x18, 0x51, 0x10, 0x02, 0xB6, 0x39, 0x14, 0x58, 0x89, 0x43, 0xEF,
    0x01, 0x14, 0xC8, 0x09, 0x42, 0xC0, 0x44, 0xB6, 0x20, 0x30, 0xE5, 0x0D,
    0x4E, 0x00, 0x48, 0x2C, 0x84, 0xD8, 0x90, 0x04, 0xF1, 0x10, 0x23, 0x86,
    0x34, 0x86, 0x44, 0xC8, 0x84, 0xE2, 0x1C, 0x04, 0x40, 0x09, 0x31, 0x11,
    0xC8, 0xE3, 0x04, 0x04, 0xE0, 0xD8, 0xAC, 0xE4, 0x92, 0x8C, 0x41, 0x91,
    0x10, 0x49, 0x05, 0x14, 0x40, 0x93, 0x81, 0x34, 0xC0, 0x08, 0xAC, 0x93,
    0x00, 0x51, 0x6C, 0x20, 0x30, 0xCB, 0x13, 0x31, 0x0B, 0x11, 0x52, 0x12,
    0x20, 0xE3, 0x76, 0x1D, 0x8A, 0xC4, 0x18, 0x02, 0xE2, 0x00, 0xF2, 0x13,
    0x00, 0xBC, 0xD1, 0x00, 0x31, 0x24, 0x2C, 0x40, 0x93, 0x20, 0xE3, 0x64,
    0x54, 0x44, 0x58, 0x04, 0xE0, 0xD8, 0x8D, 0x13, 0x8F, 0xB0, 0x02, 0x4E,
    0x47, 0x52, 0x04, 0x5B, 0x24, 0xC0, 0x34, 0x30, 0x11, 0x0E, 0x12, 0x0B,
    0x2E, 0x43, 0x0F, 0x2C, 0xE6, 0x04, 0x12, 0x32, 0x12, 0x09, 0x44, 0x92,
    0x20, 0xE3, 0x6E, 0x3C, 0xF3, 0x91, 0x4D, 0x43, 0x48, 0x4D, 0x88, 0x0D,
    0x00, 0xB6, 0x12, 0x21, 0x2C, 0xC4, 0x37, 0x25, 0x06, 0x18, 0x44, 0x93,
    0xAC, 0x05, 0x98, 0x11, 0x19, 0xD4, 0x48, 0x10, 0x0D, 0x0F, 0x21, 0x02,
    0x4C, 0x83, 0x8D, 0x84, 0x40, 0x8E, 0x30, 0x4C, 0x8A, 0x20, 0xB2, 0xF2,
    0x21, 0x24, 0xC4, 0x47, 0x24, 0xD8, 0x2C, 0x48, 0x91, 0x20, 0xC1, 0x2F,
    0x44, 0xE1, 0x91, 0x00, 0xC8, 0x8E, 0x30, 0xF0, 0x11, 0x12, 0x20, 0x0F,
    0xB0, 0x84, 0x92, 0x84, 0x00, 0xF2, 0x39, 0x14, 0xF3, 0x44, 0x02, 0x0D,
    0x20, 0xD1, 0xA4, 0x01, 0x26, 0x2D, 0x10, 0x04, 0x71, 0x10, 0x62, 0x0E,
    0x37, 0x24, 0xD1, 0x01, 0x31, 0x06, 0x62, 0xF5, 0x11, 0x3C, 0xE4, 0x84,
    0xBC, 0x44, 0x45, 0x39, 0x13, 0x33, 0x10, 0x21, 0xCD, 0x38, 0xB3, 0x86,
    0x62, 0x40, 0x8E, 0x34, 0xE3, 0x08, 0x0A, 0x15, 0x03, 0x18, 0x44, 0xE4,
    0x5C, 0x03, 0x0F, 0x2C, 0x48, 0x87, 0x10, 0x22, 0xA4, 0x35, 0x52, 0x11,
    0x38, 0xD3, 0x04, 0x35, 0x3A, 0xC4, 0x1A, 0x30, 0x11, 0x2B, 0x31, 0x11,
    0x33, 0x10, 0x13, 0x1C, 0x44, 0x6B, 0x01, 0x41, 0x87, 0x99, 0x41, 0x12,
    0x4A, 0x20, 0x11, 0xAC, 0xE5, 0x84, 0x46, 0x70, 0x0D, 0x1A, 0xF0, 0x12,
    0x4F, 0x23, 0x82, 0x20, 0x02, 0xE5, 0x39, 0x11, 0x84, 0x4E, 0x75, 0x0D,
    0x0D, 0x11, 0x03, 0xC4, 0x43, 0x0E, 0x54, 0x4B, 0x00, 0x34, 0x01, 0x84,
    0x46, 0x43, 0x49, 0x39, 0x89, 0x17, 0x00, 0x24, 0xCB, 0x62, 0x32, 0x04,
    0x94, 0x83, 0x40, 0x2E, 0xC0, 0x18, 0x04, 0x49, 0xC4, 0x00, 0xB4, 0xC7,
    0x94, 0xB3, 0x8E, 0x46, 0x21, 0xC0, 0x34, 0x61, 0x2B, 0x01, 0x8B, 0xCE,
    0x39, 0x19, 0x54, 0x36, 0x44, 0x93, 0x00, 0x12, 0xC8, 0x48, 0x7C, 0xD1,
    0x20, 0x02, 0xF2, 0x3D, 0x12, 0x0D, 0x1A, 0x32, 0x0D, 0x34, 0x44, 0x61,
    0x20, 0x6C, 0xC7, 0x00, 0xD2, 0xAF, 0x44, 0xE4, 0xC4, 0x09, 0x38, 0x15,
    0x38, 0x80, 0xE8, 0x30, 0x01, 0x88, 0x34, 0x4C, 0xCE, 0x34, 0x81, 0x87,
    0x4F, 0x24, 0xC0, 0x46, 0x04, 0x4C, 0x94, 0x83, 0x48, 0x48, 0x7B, 0x14,
    0x48, 0x80, 0xAE, 0x58, 0xD1, 0x11, 0x89, 0x16, 0x20, 0x45, 0x3B, 0xD1,
    0x21, 0x50, 0x13, 0x12, 0xE4, 0xC7, 0x11, 0x14, 0xB2, 0x20, 0xC3, 0xCB,
    0x12, 0xF3, 0x8F, 0x50, 0xB0, 0x11, 0xC4, 0x41, 0x4B, 0x10, 0x24, 0xE4,
    0x48, 0xF1, 0x02, 0x20, 0x02, 0xCB, 0x63, 0x23, 0x00, 0x2C, 0xBA, 0xC8,
    0x18, 0x74, 0xEC, 0x11, 0x24, 0x80, 0x18, 0x4C, 0x93, 0x10, 0xFA, 0x84,
    0x62, 0xF1, 0x00, 0x08, 0x4B, 0xD1, 0x38, 0x64, 0x44, 0x49, 0x28, 0x40,
    0x37, 0x22, 0x03, 0x12, 0x64, 0x44, 0x01, 0x39, 0x48, 0x5E, 0x83, 0x53,
    0x11, 0x15, 0x48, 0x11, 0x6B, 0x00, 0x34, 0x01, 0x84, 0xB4, 0x04, 0xC8,
    0x38, 0xD0, 0x0B, 0x94, 0x84, 0x87, 0xAC, 0xE4, 0x84, 0x88, 0x03, 0x04,
    0x44, 0x08, 0xC8, 0x48, 0x25, 0x12, 0x4A, 0x44, 0x14, 0x00, 0xBD, 0x84,
    0x20, 0x61, 0xD3, 0xBC, 0x44, 0x45, 0x39, 0x13, 0x00, 0x34, 0x21, 0x32,
    0x11, 0x51, 0x0D, 0xD8, 0x04, 0xC4, 0x46, 0xF4, 0x4E, 0x0D, 0x40, 0x93,
    0x20, 0xE3, 0x6F, 0x11, 0x14, 0x8E, 0x34, 0x02, 0xE2, 0x10, 0xB2, 0xEF,
    0x39, 0x61, 0x11, 0x91, 0x51, 0x0D, 0x20, 0xD1, 0xA2, 0x38, 0xB3, 0x91,
    0xA0, 0xD4, 0x88, 0x0C, 0x48, 0x40, 0x47, 0x43, 0x48, 0x4E, 0xB1, 0x12,
    0x4A, 0x00, 0xD4, 0x2D, 0x3D, 0x88, 0x0C, 0x4C, 0x40, 0x34, 0x61, 0x2C,
    0x10, 0xD4, 0xC8, 0x38, 0xD8, 0xC4, 0x10, 0xF9, 0x03, 0x18, 0x4C, 0x93,
    0x44, 0xE3, 0x46, 0x9C, 0x04, 0x43, 0xCD, 0x13, 0x94, 0x04, 0xB1, 0x2D,
    0x10, 0x21, 0x12, 0x48, 0x04, 0x58, 0xC8, 0x01, 0x44, 0x88, 0xE3, 0x0C,
    0x38, 0xD9, 0x44, 0x01, 0x19, 0x40, 0x30, 0x82, 0xD8, 0xC8, 0x40, 0x23,
    0x44, 0x40, 0x0C, 0x88, 0xE3, 0x45, 0x11, 0x11, 0x0D, 0x08, 0x4C, 0x44,
    0x3C, 0xB6, 0x2F, 0x44, 0xE3, 0xC4, 0x45, 0x36, 0x2C, 0x10, 0x44, 0xC8,
    0x34, 0x68, 0x0B, 0x58, 0x06, 0x12, 0xC9, 0x35, 0x05, 0x16, 0x01, 0x84,
    0x34, 0x26, 0x23, 0x10, 0x04, 0xC7, 0x99, 0x13, 0x96, 0x4C, 0x7C, 0x84,
    0x2C, 0xBC, 0x8E, 0x2C, 0x32, 0x04, 0x46, 0x00, 0x93, 0x9C, 0x40, 0x15,
    0x63, 0x61, 0x13, 0x84, 0x01, 0xAC, 0x01, 0x14, 0x48, 0x00, 0x61, 0x23,
    0x10, 0x00, 0xF2, 0x20, 0xD1, 0xB1, 0x21, 0x21, 0x23, 0x10, 0x20, 0x03,
    0x13, 0x61, 0xCE, 0x32, 0x52, 0x06, 0x51, 0x11, 0x2F, 0x38, 0xB2, 0x02,
    0x12, 0x13, 0x83, 0x62, 0xC0, 0x02, 0x1C, 0x83, 0x44, 0x88, 0x04, 0xC4,
    0x18, 0xE4, 0x58, 0x80, 0x71, 0x00, 0x0E, 0x54, 0x4E, 0x35, 0x38, 0x80,
    0x44, 0x4B, 0x91, 0x0C, 0x44, 0x71, 0x10, 0x02, 0xC8, 0x4D, 0x8B, 0xC0,
    0x45, 0x33, 0x44, 0x47, 0x80, 0x11, 0x0E, 0x11, 0x00, 0x4F, 0x52, 0x0E,
    0x2C, 0x43, 0x42, 0x13, 0x33, 0x93, 0x00, 0xB8, 0xC4, 0x14, 0x43, 0x52,
    0x13, 0x64, 0x48, 0x4C, 0x48, 0x8E, 0x35, 0x25, 0x0C, 0x11, 0x18, 0x84,
    0x35, 0x31, 0x11, 0x99, 0x13, 0x94, 0x3F, 0x31, 0xCE, 0x50, 0x61, 0xD3,
    0xB0, 0xE0, 0xC4, 0x44, 0xDC, 0xC0, 0x48, 0xA8, 0x8E, 0x00, 0x21, 0xF1,
    0x10, 0x04, 0x8E, 0x36, 0x01, 0x84, 0x94, 0x83, 0x46, 0x11, 0x1C, 0x8F,
    0x10, 0x22, 0x05, 0x20, 0x28, 0x8E, 0x34, 0xD1, 0x02, 0x4C, 0x83, 0x8D,
    0xD8, 0x84, 0x87, 0xC4, 0x44, 0x8F, 0x38, 0xD4, 0x84, 0xBD, 0x11, 0x13,
    0x4D, 0x8B, 0x0E, 0x54, 0x43, 0x04, 0x35, 0x38, 0x80, 0x44, 0x3A, 0xCE,
    0x1A, 0xF1, 0x0D, 0xC9, 0x43, 0x33, 0x44, 0x41, 0x24, 0x35, 0x32, 0x11,
    0x12, 0x22, 0x13, 0x21, 0x91, 0x0D, 0xCC, 0x74, 0x4E, 0x50, 0x61, 0xCE,
    0x51, 0x3B, 0xC4, 0x4F, 0x22, 0x0C, 0x20, 0xB0, 0x11, 0xD4, 0x80, 0x93,
    0x20, 0xCB, 0x44, 0x59, 0x23, 0xC0, 0x3C, 0x44, 0x73, 0x1D, 0x11, 0x00,
    0x4E, 0x22, 0xC0, 0x49, 0x2C, 0x87, 0x00, 0xA1, 0x32, 0x39, 0x44, 0x42,
    0x12, 0x00, 0x82, 0x39, 0x43, 0x53, 0xBC, 0x02, 0x0D, 0x94, 0x02, 0xCB,
    0xC4, 0x80, 0x87, 0xBC, 0xE4, 0x92, 0x20, 0x12, 0xC4, 0x80, 0x20, 0x84,
    0x3D, 0x3C, 0x8E, 0x2C, 0x80, 0xF3, 0x44, 0x05, 0x44, 0x2F, 0x30, 0x0B,
    0x2B, 0x22, 0x98, 0x89, 0x11, 0x00, 0x4C, 0x4B, 0x4E, 0x34, 0x4B, 0xCB,
    0x10, 0xD4, 0xD8, 0xBC, 0x44, 0x48, 0x38, 0x38, 0xC4, 0x14, 0x83, 0x44,
    0xB4, 0xE4, 0x4C, 0x00, 0xBC, 0x44, 0x54, 0x40, 0x0B, 0x8D, 0x12, 0x0D,
    0x2A, 0x05, 0x13, 0x1C, 0xE4, 0x72, 0x11, 0x15, 0x44, 0xB4, 0x03, 0x04,
    0xB0, 0xE3, 0x04, 0x35, 0x38, 0x06, 0x10, 0xD4, 0xE3, 0x38, 0x25, 0x0C,
    0x10, 0xD4, 0xE0, 0x09, 0x32, 0x15, 0x21, 0x36, 0x20, 0x35, 0x85, 0x80,
    0x62, 0x01, 0x51, 0x00, 0x80, 0xF3, 0x60, 0xF1, 0x20, 0x09, 0x32, 0x15,
    0x13, 0x34, 0x40, 0x20, 0xDA, 0x0D, 0x4C, 0x44, 0x44, 0x49, 0x32, 0x0D,
    0x1B, 0x10, 0x03, 0x20, 0xE8, 0xC0, 0x34, 0x61, 0x11, 0x98, 0x43, 0x44,
    0x44, 0x04, 0xC8, 0x38, 0xDA, 0xC4, 0x00, 0x58, 0x8E, 0x3D, 0x8B, 0x00,
    0x4C, 0x21, 0xE2, 0x2C, 0x02, 0x0C, 0x80, 0xD6, 0x0E, 0x34, 0x4C, 0x8E,
    0x15, 0x35, 0x80, 0x44, 0x4B, 0xC0, 0x45, 0x36, 0x23, 0x11, 0x52, 0x02,
    0x12, 0x23, 0x83, 0x12, 0xB0, 0x0D, 0x19, 0x40, 0x06, 0x12, 0xB2, 0x0D,
    0x2A, 0x73, 0x96, 0x11, 0x51, 0x11, 0x88, 0xE3, 0x45, 0x21, 0x13, 0x22,
    0x38, 0xC3, 0x04, 0x35, 0x38, 0x88, 0x4D, 0x88, 0x0D, 0x61, 0x61, 0xC4,
    0x44, 0x4C, 0x8E, 0x30, 0x45, 0x87, 0x11, 0x11, 0x23, 0x10, 0x10, 0x13,
    0x12, 0x34, 0x48, 0x54, 0x49, 0xC8, 0x18, 0x71, 0x11, 0x84, 0x40, 0x14,
    0x4C, 0x81, 0x54, 0x2E, 0xE3, 0x4B, 0x20, 0xD1, 0x36, 0x38, 0xC0, 0x0D,
    0xBD, 0x12, 0x0E, 0x44, 0x84, 0xD8, 0xCD, 0x10, 0x03, 0x21, 0x32, 0x0E,
    0x34, 0x02, 0xE5, 0x39, 0x44, 0x65, 0x20, 0xD0, 0x0D, 0x08, 0x80, 0x0B,
    0x79, 0xE7, 0x9E,
];

/// Where the bytes of a dictionary word live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordPtr {
    /// Slot not yet populated.
    Empty,
    /// Offset into the unpacked static word text.
    Text(u32),
    /// Offset into the buffer currently being transformed.
    Input(u32),
    /// A one-byte sentinel standing for an escape token.
    Escape(u8),
}

/// One dictionary slot: full word hash plus packed length and index.
#[derive(Clone, Copy, Debug)]
pub struct DictEntry {
    pub hash: i32,
    /// Word length in the 8 MSB, dictionary index in the 24 LSB.
    pub data: i32,
    pub word: WordPtr,
}

impl DictEntry {
    pub fn vacant(index: i32) -> DictEntry {
        DictEntry {
            hash: 0,
            data: index,
            word: WordPtr::Empty,
        }
    }

    pub fn length(&self) -> i32 {
        self.data >> 24
    }

    pub fn index(&self) -> i32 {
        self.data & 0x00FF_FFFF
    }
}

impl fmt::Display for DictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} (len {})", self.index(), self.length())
    }
}

/// The unpacked static word text plus one `DictEntry` per word.
pub struct StaticDictionary {
    pub text: Vec<u8>,
    pub entries: Vec<DictEntry>,
}

impl StaticDictionary {
    pub fn build() -> StaticDictionary {
        let text = unpack_words(&PACKED_WORDS);
        let entries = create_entries(&text, 1024);
        StaticDictionary { text, entries }
    }
}

/// Unpack 3 packed bytes into 4 six-bit symbols. A symbol >= 32 starts a
/// new word (emits a separating space); padding symbols 27..=31 drop.
fn unpack_words(packed: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; packed.len() * 2];
    let mut d = 0;
    let mut val: i32 = 0;

    for (i, &b) in packed.iter().enumerate() {
        val = (val << 8) | i32::from(b);

        if i % 3 == 2 {
            for shift in [18, 12, 6, 0] {
                let mut c = (val >> shift) & 0x3F;

                if c >= 32 {
                    buf[d] = b' ';
                    d += 1;
                }

                c &= 0x1F;

                if c <= 26 {
                    buf[d] = (c as u8) + b'a';
                    d += 1;
                }
            }

            val = 0;
        }
    }

    buf[d] = b' '; // terminate the last word
    buf[1..=d].to_vec()
}

/// Walk the word text and record an entry for every word of two or more
/// letters, up to `max_words`.
fn create_entries(words: &[u8], max_words: usize) -> Vec<DictEntry> {
    let mut entries = Vec::with_capacity(max_words);
    let mut anchor = 0usize;
    let mut h = HASH1;

    for (i, &cur) in words.iter().enumerate() {
        if entries.len() >= max_words {
            break;
        }

        if is_text(cur) {
            h = h.wrapping_mul(HASH1) ^ i32::from(cur).wrapping_mul(HASH2);
            continue;
        }

        if is_delimiter(cur) && i >= anchor + 1 {
            let nb = entries.len() as i32;
            entries.push(DictEntry {
                hash: h,
                data: (((i - anchor) as i32) << 24) | nb,
                word: WordPtr::Text(anchor as u32),
            });
        }

        anchor = i + 1;
        h = HASH1;
    }

    entries
}

pub fn is_lower_case(val: u8) -> bool {
    val.is_ascii_lowercase()
}

pub fn is_upper_case(val: u8) -> bool {
    val.is_ascii_uppercase()
}

pub fn is_text(val: u8) -> bool {
    val.is_ascii_alphabetic()
}

/// Word boundary characters: ASCII punctuation, whitespace, brackets.
pub fn is_delimiter(val: u8) -> bool {
    matches!(val,
        b' '..=b'/'
        | b':'..=b'?'
        | b'\n' | b'\r' | b'\t'
        | b'_' | b'|' | b'{' | b'}' | b'[' | b']')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_dictionary_holds_1024_words() {
        let dict = StaticDictionary::build();
        assert_eq!(dict.entries.len(), 1024);
    }

    #[test]
    fn first_words_are_the_most_common() {
        let dict = StaticDictionary::build();
        let word = |e: &DictEntry| match e.word {
            WordPtr::Text(off) => {
                dict.text[off as usize..off as usize + e.length() as usize].to_vec()
            }
            _ => unreachable!(),
        };
        assert_eq!(word(&dict.entries[0]), b"the");
        assert_eq!(word(&dict.entries[1]), b"be");
        assert_eq!(word(&dict.entries[2]), b"and");
    }

    #[test]
    fn delimiters_cover_word_breaks() {
        for b in [b' ', b'.', b',', b'<', b'>', b'&', b'\n', b'\r', b'_', b'['] {
            assert!(is_delimiter(b));
        }
        for b in [b'a', b'Z', b'0', b'@', b'`'] {
            assert!(!is_delimiter(b), "{}", b as char);
        }
    }
}
