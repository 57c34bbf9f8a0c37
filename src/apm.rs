use std::iter::repeat;

use crate::logistic::{squash, stretch};

/// Adaptive probability map refining a prediction by a secondary context.
///
/// Each context owns a row of 33 bins spanning the stretched probability
/// range; a prediction is stretched, interpolated between the two nearest
/// bins of its context row, and the bins touched by the previous call are
/// nudged toward the observed bit.
pub struct Apm {
    index: usize,  // bin pair used by the last prediction
    rate: i32,     // update rate (higher = slower)
    bins: Vec<u16>, // num_contexts * 33 squashed 16 bit values
}

impl Apm {
    pub fn new(num_contexts: usize, rate: i32) -> Apm {
        assert!(rate > 0 && rate < 32);
        Apm {
            index: 0,
            rate,
            bins: repeat(
                  (0..33).map(|i| (squash((i - 16) * 128) * 16) as u16)
                  .collect::<Vec<u16>>().into_iter())
                  .take(num_contexts)
                  .flatten()
                  .collect::<Vec<u16>>(),
        }
    }

    /// Update the bins of the previous call toward `bit`, then return a
    /// refined prediction for `pr` under context `ctx`.
    pub fn get(&mut self, bit: i32, pr: i32, ctx: i32) -> i32 {
        assert!(bit >> 1 == 0 && pr >= 0 && pr < 4096);
        self.update(bit);

        let sx = stretch(pr);
        let w = sx & 127; // interpolation weight (33 points)
        self.index = (((sx + 2048) >> 7) + ctx * 33) as usize;

        let lo = i32::from(self.bins[self.index]);
        let hi = i32::from(self.bins[self.index + 1]);
        (lo * (128 - w) + hi * w) >> 11
    }

    fn update(&mut self, bit: i32) {
        // bit = 1 pulls both bins up, bit = 0 pulls them down
        let g = (bit << 16) + (bit << self.rate) - bit - bit;
        let lo = i32::from(self.bins[self.index]);
        let hi = i32::from(self.bins[self.index + 1]);
        self.bins[self.index] = (lo + ((g - lo) >> self.rate)) as u16;
        self.bins[self.index + 1] = (hi + ((g - hi) >> self.rate)) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_map_roughly_preserves_input() {
        let mut apm = Apm::new(65536, 7);
        for pr in [100, 1000, 2047, 3000, 4000] {
            let out = apm.get(0, pr, 4660);
            assert!((out - pr).abs() <= 128, "pr = {pr}, out = {out}");
        }
    }

    #[test]
    fn bins_learn_the_observed_bit() {
        let mut apm = Apm::new(256, 7);
        let mut out = 0;
        for _ in 0..2048 {
            out = apm.get(1, 2048, 10);
        }
        assert!(out > 3600, "out = {out}");
    }
}
