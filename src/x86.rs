//! Relative jump rewriting for x86 code.
//!
//! CALL and JMP near instructions (0xE8/0xE9) carry 32 bit relative
//! displacements, so repeated jumps to one target all encode differently.
//! Rewriting the displacement to an absolute in-block offset makes them
//! identical and easier to model. Only operands whose sign byte is 0x00
//! or 0xFF are touched; the sign survives as `sign + 1` and the three
//! offset bytes are masked to keep them away from the marker values.

use crate::{error::TransformError, Transform};

const INSTRUCTION_MASK: u8 = 0xFE;
const INSTRUCTION_JUMP: u8 = 0xE8; // also matches 0xE9
const ADDRESS_MASK: u8 = 0xD5;

/// Operand first bytes that would collide with the markers are emitted
/// behind this escape symbol.
pub const ESCAPE: u8 = 0x02;

/// The x86 relative jump transform.
pub struct X86Codec;

impl X86Codec {
    pub fn new() -> X86Codec {
        X86Codec
    }
}

impl Default for X86Codec {
    fn default() -> Self {
        X86Codec::new()
    }
}

impl Transform for X86Codec {
    fn forward(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<(usize, usize), TransformError> {
        let count = src.len();
        let required = self.max_encoded_len(count);

        if dst.len() < required {
            return Err(TransformError::BufferTooSmall {
                size: dst.len(),
                required,
            });
        }

        let end = count.saturating_sub(8);
        let mut jumps = 0usize;

        for i in 0..end {
            if src[i] & INSTRUCTION_MASK == INSTRUCTION_JUMP
                && (src[i + 4] == 0 || src[i + 4] == 255)
                && src[i] != 0
                && src[i] != 1
                && src[i] != ESCAPE
            {
                jumps += 1;
            }
        }

        // Too few jump instructions: either not a binary or not worth
        // the change.
        if jumps < count >> 7 {
            return Err(TransformError::NotBinary);
        }

        let dst_end = dst.len();
        let mut s = 0usize;
        let mut d = 0usize;

        while s < end {
            if d >= dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 1,
                });
            }

            dst[d] = src[s];
            d += 1;
            s += 1;

            if src[s - 1] & INSTRUCTION_MASK != INSTRUCTION_JUMP {
                continue;
            }

            let cur = src[s];

            if cur == 0 || cur == 1 || cur == ESCAPE {
                // Operand collides with the markers: escape it
                if d + 2 > dst_end {
                    return Err(TransformError::BufferTooSmall {
                        size: dst_end,
                        required: d + 2,
                    });
                }

                dst[d] = ESCAPE;
                dst[d + 1] = cur;
                s += 1;
                d += 2;
                continue;
            }

            let sgn = src[s + 3];

            // Not a small displacement: probably a false positive
            if sgn != 0 && sgn != 255 {
                continue;
            }

            if d + 4 > dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 4,
                });
            }

            let addr = i32::from(src[s])
                | (i32::from(src[s + 1]) << 8)
                | (i32::from(src[s + 2]) << 16)
                | (i32::from(sgn) << 24);
            let addr = addr.wrapping_add(s as i32);

            dst[d] = sgn.wrapping_add(1);
            dst[d + 1] = ADDRESS_MASK ^ (addr >> 16) as u8;
            dst[d + 2] = ADDRESS_MASK ^ (addr >> 8) as u8;
            dst[d + 3] = ADDRESS_MASK ^ addr as u8;
            s += 4;
            d += 4;
        }

        while s < count {
            if d >= dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 1,
                });
            }

            dst[d] = src[s];
            d += 1;
            s += 1;
        }

        Ok((s, d))
    }

    fn inverse(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<(usize, usize), TransformError> {
        let count = src.len();
        let dst_end = dst.len();
        let end = count.saturating_sub(8);
        let mut s = 0usize;
        let mut d = 0usize;

        while s < end {
            if d >= dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 1,
                });
            }

            dst[d] = src[s];
            d += 1;
            s += 1;

            if src[s - 1] & INSTRUCTION_MASK != INSTRUCTION_JUMP {
                continue;
            }

            let sgn = src[s];

            if sgn == ESCAPE {
                // Escaped literal operand; next round copies it
                s += 1;
                continue;
            }

            if sgn != 0 && sgn != 1 {
                continue;
            }

            if d + 4 > dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 4,
                });
            }

            let addr = i32::from(ADDRESS_MASK ^ src[s + 3])
                | (i32::from(ADDRESS_MASK ^ src[s + 2]) << 8)
                | (i32::from(ADDRESS_MASK ^ src[s + 1]) << 16)
                | (i32::from(sgn.wrapping_sub(1)) << 24);
            let addr = addr.wrapping_sub(d as i32);

            dst[d] = addr as u8;
            dst[d + 1] = (addr >> 8) as u8;
            dst[d + 2] = (addr >> 16) as u8;
            dst[d + 3] = sgn.wrapping_sub(1);
            s += 4;
            d += 4;
        }

        while s < count {
            if d >= dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: d + 1,
                });
            }

            dst[d] = src[s];
            d += 1;
            s += 1;
        }

        Ok((s, d))
    }

    fn max_encoded_len(&self, src_len: usize) -> usize {
        // The per-byte destination checks are coarse, so leave slack for
        // incompressible data.
        if src_len >= 1 << 30 {
            src_len
        } else if src_len <= 512 {
            src_len + 32
        } else {
            src_len + src_len / 16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0x90 filler with a valid E8 jump every `stride` bytes.
    fn jumpy_block(len: usize, stride: usize) -> Vec<u8> {
        let mut block = vec![0x90u8; len];
        let mut i = 0;
        while i + 5 <= len {
            block[i] = 0xE8;
            block[i + 1] = 0x10;
            block[i + 2] = 0x20;
            block[i + 3] = 0x30;
            block[i + 4] = 0x00;
            i += stride;
        }
        block
    }

    fn round_trip(data: &[u8]) {
        let mut codec = X86Codec::new();
        let mut enc = vec![0u8; codec.max_encoded_len(data.len())];
        let (read, written) = codec.forward(data, &mut enc).unwrap();
        assert_eq!(read, data.len());

        let mut dec = vec![0u8; data.len()];
        let (iread, iwritten) = codec.inverse(&enc[..written], &mut dec).unwrap();
        assert_eq!(iread, written);
        assert_eq!(&dec[..iwritten], data);
    }

    #[test]
    fn jumps_round_trip() {
        round_trip(&jumpy_block(8192, 100));
    }

    #[test]
    fn negative_displacements_round_trip() {
        let mut block = jumpy_block(4096, 50);
        // A jump with sign byte 0xFF
        block[10] = 0xE9;
        block[11] = 0xF0;
        block[12] = 0xFE;
        block[13] = 0xFF;
        block[14] = 0xFF;
        round_trip(&block);
    }

    #[test]
    fn conflicting_operands_are_escaped() {
        let mut block = jumpy_block(4096, 40);
        // Operand first bytes that collide with the marker values
        block[20] = 0xE8;
        block[21] = 0x00;
        block[30] = 0xE8;
        block[31] = 0x01;
        block[40] = 0xE8;
        block[41] = ESCAPE;
        round_trip(&block);
    }

    #[test]
    fn plain_text_is_refused() {
        let data = vec![b'a'; 1024];
        let mut codec = X86Codec::new();
        let mut enc = vec![0u8; codec.max_encoded_len(data.len())];
        assert_eq!(
            codec.forward(&data, &mut enc),
            Err(TransformError::NotBinary)
        );
    }

    #[test]
    fn tiny_blocks_pass_through() {
        let data = b"short buffer";
        let mut codec = X86Codec::new();
        let mut enc = vec![0u8; codec.max_encoded_len(data.len())];
        let (read, written) = codec.forward(data, &mut enc).unwrap();
        assert_eq!((read, written), (data.len(), data.len()));
        assert_eq!(&enc[..written], data);
    }
}
