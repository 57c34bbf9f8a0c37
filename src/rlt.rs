//! Escaped run-length transform.
//!
//! Runs longer than three bytes become `value, escape, length` where the
//! escape symbol is the rarest byte of the block (recorded as the first
//! output byte). The length field grows from one to three bytes:
//!
//! ```text
//! 4    <= run < 228        -> 1 byte
//! 228  <= run < 7172       -> 2 bytes
//! 7172 <= run < 72706      -> 3 bytes
//! ```
//!
//! An occurrence of the escape symbol itself is coded as `escape, 0`.

use crate::{error::TransformError, histogram, Transform};

/// One-byte run lengths stop below this value.
const RUN_LEN_ENCODE1: usize = 224;
/// Two-byte run lengths stop below this value.
const RUN_LEN_ENCODE2: usize = (255 - RUN_LEN_ENCODE1) << 8;
/// Runs must beat this length to be encoded.
const RUN_THRESHOLD: usize = 3;
const MAX_RUN: usize = 0xFFFF + RUN_LEN_ENCODE2 + RUN_THRESHOLD - 1;
const MAX_RUN4: usize = MAX_RUN - 4;

/// Run-length transform with a per-block escape symbol.
pub struct Rlt;

impl Rlt {
    pub fn new() -> Rlt {
        Rlt
    }
}

impl Default for Rlt {
    fn default() -> Self {
        Rlt::new()
    }
}

fn emit_run_length(
    dst: &mut [u8],
    mut run: usize,
    escape: u8,
    val: u8,
) -> Result<usize, TransformError> {
    let too_small = TransformError::BufferTooSmall {
        size: dst.len(),
        required: dst.len() + 4,
    };

    if dst.len() < 2 {
        return Err(too_small);
    }

    dst[0] = val;
    let mut d = 1;

    if val == escape {
        dst[1] = 0;
        d = 2;
    }

    if d >= dst.len() {
        return Err(too_small);
    }

    dst[d] = escape;
    d += 1;
    run -= RUN_THRESHOLD;

    if run >= RUN_LEN_ENCODE1 {
        if run < RUN_LEN_ENCODE2 {
            if d as isize >= dst.len() as isize - 2 {
                return Err(too_small);
            }

            run -= RUN_LEN_ENCODE1;
            dst[d] = (RUN_LEN_ENCODE1 + (run >> 8)) as u8;
            d += 1;
        } else {
            if d as isize >= dst.len() as isize - 3 {
                return Err(too_small);
            }

            run -= RUN_LEN_ENCODE2;
            dst[d] = 0xFF;
            dst[d + 1] = (run >> 8) as u8;
            d += 2;
        }
    }

    if d >= dst.len() {
        return Err(too_small);
    }

    dst[d] = run as u8;
    Ok(d + 1)
}

impl Transform for Rlt {
    fn forward(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<(usize, usize), TransformError> {
        if src.is_empty() {
            return Ok((0, 0));
        }

        let required = self.max_encoded_len(src.len());

        if dst.len() < required {
            return Err(TransformError::BufferTooSmall {
                size: dst.len(),
                required,
            });
        }

        let src_end = src.len();
        let src_end4 = src_end as isize - 4;
        let dst_end = dst.len();

        let mut freqs = [0i32; 256];
        histogram::compute_histogram(src, &mut freqs);
        let escape = histogram::rarest_byte(&freqs);

        let mut src_idx = 0usize;
        let mut dst_idx = 0usize;
        let mut run = 0usize;
        let mut prev = src[src_idx];
        src_idx += 1;
        dst[dst_idx] = escape;
        dst_idx += 1;
        dst[dst_idx] = prev;
        dst_idx += 1;

        if prev == escape {
            dst[dst_idx] = 0;
            dst_idx += 1;
        }

        while (src_idx as isize) < src_end4 {
            if prev == src[src_idx] {
                src_idx += 1;
                run += 1;

                if prev == src[src_idx] {
                    src_idx += 1;
                    run += 1;

                    if prev == src[src_idx] {
                        src_idx += 1;
                        run += 1;

                        if prev == src[src_idx] {
                            src_idx += 1;
                            run += 1;

                            if run < MAX_RUN4 {
                                continue;
                            }
                        }
                    }
                }
            }

            if run > RUN_THRESHOLD {
                dst_idx += emit_run_length(&mut dst[dst_idx..dst_end], run, escape, prev)?;
            } else if prev != escape {
                if dst_idx + run >= dst_end {
                    return Err(TransformError::BufferTooSmall {
                        size: dst_end,
                        required: dst_idx + run + 1,
                    });
                }

                while run > 0 {
                    dst[dst_idx] = prev;
                    dst_idx += 1;
                    run -= 1;
                }
            } else {
                // Escape symbol as a literal
                if dst_idx + 2 * run >= dst_end {
                    return Err(TransformError::BufferTooSmall {
                        size: dst_end,
                        required: dst_idx + 2 * run + 1,
                    });
                }

                while run > 0 {
                    dst[dst_idx] = escape;
                    dst[dst_idx + 1] = 0;
                    dst_idx += 2;
                    run -= 1;
                }
            }

            prev = src[src_idx];
            src_idx += 1;
            run = 1;
        }

        // Leftover run
        if run > RUN_THRESHOLD {
            dst_idx += emit_run_length(&mut dst[dst_idx..dst_end], run, escape, prev)?;
        } else if prev != escape {
            if dst_idx + run < dst_end {
                while run > 0 {
                    dst[dst_idx] = prev;
                    dst_idx += 1;
                    run -= 1;
                }
            }
        } else if dst_idx + 2 * run < dst_end {
            while run > 0 {
                dst[dst_idx] = escape;
                dst[dst_idx + 1] = 0;
                dst_idx += 2;
                run -= 1;
            }
        }

        // Tail bytes
        while src_idx < src_end && dst_idx < dst_end {
            dst[dst_idx] = src[src_idx];
            src_idx += 1;
            dst_idx += 1;
        }

        if src_idx != src_end {
            return Err(TransformError::BufferTooSmall {
                size: dst_end,
                required: dst_end + (src_end - src_idx),
            });
        }

        if dst_idx > src_idx {
            return Err(TransformError::Incompressible);
        }

        Ok((src_idx, dst_idx))
    }

    fn inverse(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<(usize, usize), TransformError> {
        if src.is_empty() {
            return Ok((0, 0));
        }

        let src_end = src.len();
        let dst_end = dst.len();
        let mut src_idx = 0usize;
        let mut dst_idx = 0usize;
        let escape = src[src_idx];
        src_idx += 1;

        if src_idx < src_end && src[src_idx] == escape {
            src_idx += 1;

            // The data cannot start with a run, only an escape literal
            if src_idx < src_end && src[src_idx] != 0 {
                return Err(TransformError::InvalidData {
                    offset: src_idx,
                    reason: "input starts with a run",
                });
            }

            src_idx += 1;

            if dst_idx >= dst_end {
                return Err(TransformError::BufferTooSmall {
                    size: dst_end,
                    required: dst_idx + 1,
                });
            }

            dst[dst_idx] = escape;
            dst_idx += 1;
        }

        while src_idx < src_end {
            if src[src_idx] != escape {
                // Literal
                if dst_idx >= dst_end {
                    return Err(TransformError::InvalidData {
                        offset: src_idx,
                        reason: "output exceeds destination",
                    });
                }

                dst[dst_idx] = src[src_idx];
                src_idx += 1;
                dst_idx += 1;
                continue;
            }

            src_idx += 1;

            if src_idx >= src_end {
                return Err(TransformError::InvalidData {
                    offset: src_idx,
                    reason: "trailing escape",
                });
            }

            if dst_idx == 0 {
                return Err(TransformError::InvalidData {
                    offset: src_idx,
                    reason: "run with no preceding byte",
                });
            }

            let val = dst[dst_idx - 1];
            let mut run = src[src_idx] as usize;
            src_idx += 1;

            if run == 0 {
                // Just the escape symbol, not a run
                if dst_idx >= dst_end {
                    return Err(TransformError::InvalidData {
                        offset: src_idx,
                        reason: "output exceeds destination",
                    });
                }

                dst[dst_idx] = escape;
                dst_idx += 1;
                continue;
            }

            if run == 0xFF {
                if src_idx + 1 >= src_end {
                    return Err(TransformError::InvalidData {
                        offset: src_idx,
                        reason: "truncated run length",
                    });
                }

                run = ((src[src_idx] as usize) << 8) | (src[src_idx + 1] as usize);
                src_idx += 2;
                run += RUN_LEN_ENCODE2;
            } else if run >= RUN_LEN_ENCODE1 {
                if src_idx >= src_end {
                    return Err(TransformError::InvalidData {
                        offset: src_idx,
                        reason: "truncated run length",
                    });
                }

                run = ((run - RUN_LEN_ENCODE1) << 8) | (src[src_idx] as usize);
                run += RUN_LEN_ENCODE1;
                src_idx += 1;
            }

            run += RUN_THRESHOLD - 1;

            if dst_idx + run >= dst_end || run > MAX_RUN {
                return Err(TransformError::InvalidData {
                    offset: src_idx,
                    reason: "invalid run length",
                });
            }

            for slot in dst[dst_idx..dst_idx + run].iter_mut() {
                *slot = val;
            }

            dst_idx += run;
        }

        Ok((src_idx, dst_idx))
    }

    fn max_encoded_len(&self, src_len: usize) -> usize {
        if src_len <= 512 {
            src_len + 32
        } else {
            src_len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(data: &[u8]) -> usize {
        let mut rlt = Rlt::new();
        let mut enc = vec![0u8; rlt.max_encoded_len(data.len())];
        let (read, written) = rlt.forward(data, &mut enc).unwrap();
        assert_eq!(read, data.len());

        let mut dec = vec![0u8; data.len() + 8];
        let (eread, ewritten) = rlt.inverse(&enc[..written], &mut dec).unwrap();
        assert_eq!(eread, written);
        assert_eq!(&dec[..ewritten], data);
        written
    }

    #[test]
    fn three_runs_shrink() {
        let written = round_trip(b"aaaaaaaabbbbbbbbcccccccc");
        assert!(written <= 15, "written = {written}");
    }

    #[test]
    fn long_runs_use_wide_length_fields() {
        let mut data = vec![b'x'; 1000];
        data.push(b'y');
        round_trip(&data);

        let mut data = vec![b'x'; 9000];
        data.extend_from_slice(b"tail");
        round_trip(&data);
    }

    #[test]
    fn escape_byte_literals_survive() {
        // Every byte value occurs, so the escape symbol collides with a
        // real literal.
        let mut data: Vec<u8> = (0u8..=255).collect();
        data.push(0);
        data.extend(std::iter::repeat(7u8).take(200));
        round_trip(&data);
    }

    #[test]
    fn incompressible_input_is_refused() {
        let data: Vec<u8> = (0u8..=255).collect();
        let mut rlt = Rlt::new();
        let mut enc = vec![0u8; rlt.max_encoded_len(data.len())];
        assert_eq!(
            rlt.forward(&data, &mut enc),
            Err(TransformError::Incompressible)
        );
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let mut rlt = Rlt::new();
        let mut dst = vec![0u8; 64];

        // Escape at the very end
        assert!(matches!(
            rlt.inverse(&[1, b'a', 1], &mut dst),
            Err(TransformError::InvalidData { .. })
        ));

        // Wide run length cut short
        assert!(matches!(
            rlt.inverse(&[1, b'a', 1, 0xFF, 0x01], &mut dst),
            Err(TransformError::InvalidData { .. })
        ));

        // Run larger than the destination
        assert!(matches!(
            rlt.inverse(&[1, b'a', 1, 200], &mut dst),
            Err(TransformError::InvalidData { .. })
        ));
    }
}
