/// Longest run the model will track.
pub const MAX_LENGTH: i32 = 88;

const BUFFER_SIZE: usize = 64 * 1024 * 1024;
const HASH_SIZE: usize = 16 * 1024 * 1024;
const BUFFER_MASK: i32 = (BUFFER_SIZE - 1) as i32;
const HASH_MASK: i32 = (HASH_SIZE - 1) as i32;

/// LZ-style long match detector.
///
/// Keeps the last 64 MiB of coded bytes in a ring buffer and a table
/// mapping a 24 bit rolling hash of recent bytes to the position that
/// last produced it. While a match is alive, the byte at the match
/// position predicts the bits being formed. Collisions in either table
/// are tolerated; a wrong match dies on its first disagreement.
pub struct MatchModel {
    buffer: Vec<u8>,
    hashes: Vec<i32>,
    hash: i32,
    match_pos: i32,
    match_len: i32,
}

impl MatchModel {
    pub fn new() -> MatchModel {
        MatchModel {
            buffer: vec![0; BUFFER_SIZE],
            hashes: vec![0; HASH_SIZE],
            hash: 0,
            match_pos: 0,
            match_len: 0,
        }
    }

    /// Fold the byte completed at `pos - 1` into the buffer and the
    /// rolling hash, then extend or re-detect the match and record the
    /// new position for this hash.
    pub fn update(&mut self, pos: i32, c4: i32) {
        self.buffer[((pos - 1) & BUFFER_MASK) as usize] = (c4 & 0xFF) as u8;
        self.hash = (self.hash.wrapping_mul(43707) << 4).wrapping_add(c4) & HASH_MASK;
        self.find(pos);
        self.hashes[self.hash as usize] = pos;
    }

    fn find(&mut self, pos: i32) {
        if self.match_len > 0 {
            if self.match_len < MAX_LENGTH {
                self.match_len += 1;
            }
            self.match_pos += 1;
        } else {
            self.match_pos = self.hashes[self.hash as usize];

            if self.match_pos != 0 && pos - self.match_pos <= BUFFER_MASK {
                let mut r = self.match_len + 1;

                while r <= MAX_LENGTH
                    && self.buffer[((pos - r) & BUFFER_MASK) as usize]
                        == self.buffer[((self.match_pos - r) & BUFFER_MASK) as usize]
                {
                    r += 1;
                }

                self.match_len = r - 1;
            }
        }
    }

    /// Scaled prediction for the bit being formed, or 0 with the match
    /// killed if the partial byte `c0` has diverged from the match byte.
    pub fn prediction(&mut self, c0: i32, bpos: u32) -> i32 {
        let mut p = 0;

        if self.match_len > 0 {
            let expected = i32::from(self.buffer[(self.match_pos & BUFFER_MASK) as usize]);

            if c0 == (expected | 256) >> (8 - bpos) {
                p = if self.match_len <= 24 {
                    self.match_len
                } else {
                    24 + ((self.match_len - 24) >> 3)
                };

                if (expected >> (7 - bpos)) & 1 == 0 {
                    p = -p;
                }

                p <<= 6;
            } else {
                self.match_len = 0;
            }
        }

        p
    }

    pub fn len(&self) -> i32 {
        self.match_len
    }
}

impl Default for MatchModel {
    fn default() -> Self {
        MatchModel::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Drive the model the way the predictor does: one update per byte
    // with a running little-endian context of the last four bytes.
    fn feed(mm: &mut MatchModel, data: &[u8]) -> i32 {
        let mut c4 = 0i32;
        let mut pos = 0i32;
        for &b in data {
            pos += 1;
            c4 = (c4 << 8) | i32::from(b);
            mm.update(pos, c4);
        }
        pos
    }

    #[test]
    fn repeated_pattern_is_matched() {
        let mut mm = MatchModel::new();
        let data: Vec<u8> = b"abcdefgh".iter().cycle().take(256).copied().collect();
        feed(&mut mm, &data);
        assert!(mm.len() > 0);
    }

    #[test]
    fn match_length_is_capped() {
        let mut mm = MatchModel::new();
        let data = vec![0x55u8; 4096];
        feed(&mut mm, &data);
        assert_eq!(mm.len(), MAX_LENGTH);
    }

    #[test]
    fn live_match_predicts_the_next_bits() {
        let mut mm = MatchModel::new();
        let data: Vec<u8> = b"canopy".iter().cycle().take(120).copied().collect();
        feed(&mut mm, &data);
        assert!(mm.len() > 0);

        // Next byte should be data[120 % 6] = 'c' = 0x63 = 0110_0011.
        // Walk its bits and check the sign of each prediction.
        let mut c0 = 1i32;
        for (bpos, bit) in [0, 1, 1, 0, 0, 0, 1, 1].into_iter().enumerate() {
            let p = mm.prediction(c0, bpos as u32);
            assert!(p != 0);
            assert_eq!(p > 0, bit == 1, "bpos = {bpos}");
            c0 = (c0 << 1) | bit;
        }
    }
}
