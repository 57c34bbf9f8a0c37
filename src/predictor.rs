use crate::{
    apm::Apm,
    config::PredictorConfig,
    match_model::MatchModel,
    mixer::Mixer,
    statemap::{STATE_MAPS, STATE_TRANSITIONS},
};

const HASH_CONST: i32 = 200_002_979;
const MASK_80808080: i32 = 0x8080_8080_u32 as i32;
const MASK_F0F0F0F0: i32 = 0xF0F0_F0F0_u32 as i32;

fn hash_mix(x: i32, y: i32) -> i32 {
    let h = x.wrapping_mul(HASH_CONST) ^ y.wrapping_mul(HASH_CONST);
    h >> 1 ^ h >> 9 ^ x >> 2 ^ y >> 3 ^ HASH_CONST
}

fn add_context(ctx_id: i32, cx: i32) -> i32 {
    let cx = cx.wrapping_mul(987_654_323).wrapping_add(ctx_id);
    let cx = cx.rotate_left(16) as i32;
    cx.wrapping_mul(123_456_791).wrapping_add(ctx_id)
}

/// Context-mixing bit predictor.
///
/// Seven context models backed by one shared state store, an LZ-style
/// match model, a pool of per-context mixers and a secondary probability
/// map, all advanced once per coded bit. The coder calls `update` with
/// each observed bit and reads the probability of the next bit being 1
/// from `get`.
///
/// A predictor owns all of its state; it is not meant to be shared
/// between threads. Run one instance per block instead.
pub struct Predictor {
    pr: i32,       // next predicted value (0..4095)
    c0: i32,       // last 0..7 bits of the partial byte, with a leading 1
    c4: i32,       // last 4 whole bytes, last byte in the low 8 bits
    c8: i32,       // previous 4 whole bytes
    bpos: u32,     // number of bits in c0 (0..7)
    pos: i32,      // completed byte count
    bin_count: i32, // bytes seen with the high bit set
    states: Vec<u8>,
    states_mask: i32,
    mixers: Vec<Mixer>,
    mixers_mask: i32,
    cur: usize,    // mixer selected for the current byte
    cp: [usize; 7], // state slots of the seven contexts
    ctx: [i32; 7],  // context bases, recomputed each byte
    mm: MatchModel,
    apm: Apm,
}

impl Predictor {
    pub fn new(cfg: &PredictorConfig) -> Predictor {
        let states_size = cfg.states_size();
        let mixers_size = cfg.mixers_size();

        Predictor {
            pr: 2048,
            c0: 1,
            c4: 0,
            c8: 0,
            bpos: 0,
            pos: 0,
            bin_count: 0,
            states: vec![0; states_size],
            states_mask: (states_size - 1) as i32,
            mixers: vec![Mixer::new(); mixers_size],
            mixers_mask: (mixers_size - 1) as i32,
            cur: 0,
            cp: [0; 7],
            ctx: [0; 7],
            mm: MatchModel::new(),
            apm: Apm::new(65536, 7),
        }
    }

    /// Probability that the next bit is 1, in [0, 4095].
    pub fn get(&self) -> i32 {
        self.pr
    }

    /// Fold the observed bit into every model and form the next
    /// prediction.
    pub fn update(&mut self, bit: i32) {
        assert!(bit >> 1 == 0);

        self.mixers[self.cur].update(bit);
        self.bpos += 1;
        self.c0 = (self.c0 << 1) | bit;

        if self.c0 > 255 {
            // Byte boundary
            self.pos += 1;
            self.c8 = (self.c8 << 8) | ((self.c4 >> 24) & 0xFF);
            self.c4 = (self.c4 << 8) | (self.c0 & 0xFF);
            self.mm.update(self.pos, self.c4);
            self.c0 = 1;
            self.bpos = 0;
            self.bin_count += (self.c4 >> 7) & 1;

            self.cur = (self.c4 & self.mixers_mask) as usize;
            self.update_contexts();
        }

        let c = self.c0;
        let table = &STATE_TRANSITIONS[bit as usize];
        let mut inputs = [0i32; 8];

        for k in 0..7 {
            let state = &mut self.states[self.cp[k]];
            *state = table[*state as usize];
            self.cp[k] = (self.ctx[k].wrapping_add(c) & self.states_mask) as usize;
            inputs[k] = STATE_MAPS[k][self.states[self.cp[k]] as usize];
        }

        inputs[7] = self.mm.prediction(self.c0, self.bpos);

        let mixed = self.mixers[self.cur].mix(&inputs);
        let refined = self.apm.get(bit, mixed, self.c0 | (self.c4 & 0xFF00));

        // Nudge predictions sitting below the midpoint off it, so a
        // fully undecided model still takes a side.
        self.pr = refined + ((refined as u32).wrapping_sub(2048) >> 31) as i32;
    }

    fn update_contexts(&mut self) {
        let (h1, h2, h3);

        if self.bin_count < self.pos >> 2 {
            // Mostly text
            h1 = if self.c4 & MASK_80808080 == 0 { self.c4 } else { self.c4 >> 16 };
            h2 = if self.c8 & MASK_80808080 == 0 { self.c8 } else { self.c8 >> 16 };
            h3 = self.c4 ^ (self.c8 & 0xFFFF);
        } else {
            // Mostly binary
            h1 = self.c4 >> 16;
            h2 = self.c8 >> 16;
            h3 = self.c4 ^ (self.c4 & 0xFFFF);
        }

        self.ctx = [
            add_context(0, h3),
            add_context(1, hash_mix(HASH_CONST, self.c4 << 24)),
            add_context(2, hash_mix(HASH_CONST, self.c4 << 16)),
            add_context(3, hash_mix(HASH_CONST, self.c4 << 8)),
            add_context(4, hash_mix(HASH_CONST, self.c4 & MASK_F0F0F0F0)),
            add_context(5, hash_mix(HASH_CONST, self.c4)),
            add_context(6, hash_mix(h1, h2)),
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> PredictorConfig {
        PredictorConfig::new().block_size(1 << 16).size(1 << 16)
    }

    fn feed_bytes(p: &mut Predictor, data: &[u8]) {
        for &byte in data {
            for i in (0..=7).rev() {
                p.update(i32::from(byte >> i) & 1);
            }
        }
    }

    #[test]
    fn bit_accounting() {
        let mut p = Predictor::new(&small());
        let data = b"accounting check";
        let mut bits = 0u32;

        for &byte in data.iter() {
            for i in (0..=7).rev() {
                p.update(i32::from(byte >> i) & 1);
                bits += 1;
                assert_eq!(p.pos as u32 * 8 + p.bpos, bits);
                assert_eq!(32 - p.c0.leading_zeros() - 1, p.bpos);
            }
        }
    }

    #[test]
    fn last_completed_byte_sits_in_c4() {
        let mut p = Predictor::new(&small());
        feed_bytes(&mut p, b"xyz");
        assert_eq!(p.c4 & 0xFF, i32::from(b'z'));
        assert_eq!(p.pos, 3);
    }

    #[test]
    fn states_stay_in_table_range() {
        let mut p = Predictor::new(&small());
        feed_bytes(&mut p, b"abcabcabc 123123 \x00\xFF\x80 abc");
        for &slot in p.cp.iter() {
            assert!(p.states[slot] <= 252);
        }
    }

    #[test]
    fn repeated_input_engages_the_match_model() {
        let mut p = Predictor::new(&small());
        let data: Vec<u8> = b"0123456789abcdef".iter().cycle().take(512).copied().collect();
        feed_bytes(&mut p, &data);
        assert!(p.mm.len() > 0);
    }
}
