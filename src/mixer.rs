use crate::logistic::squash;

/// Learning rate at the start of a block, in 1/128 units.
const BEGIN_LEARN_RATE: i32 = 60 << 7;
/// Floor the learning rate decays toward.
const END_LEARN_RATE: i32 = 14 << 7;

/// Combines eight model predictions into one, using a single layer of
/// online-trained weights plus a skew term. One mixer exists per byte
/// context; the predictor selects among them before every byte.
#[derive(Clone)]
pub struct Mixer {
    weights: [i32; 8],
    inputs: [i32; 8],
    skew: i32,
    learn_rate: i32,
    pr: i32,
}

impl Mixer {
    pub fn new() -> Mixer {
        Mixer {
            weights: [2048; 8],
            inputs: [0; 8],
            skew: 0,
            learn_rate: BEGIN_LEARN_RATE,
            pr: 2048,
        }
    }

    /// Weighted dot product of the inputs, squashed to [0, 4095].
    /// The inputs are cached for the weight update on the next bit.
    pub fn mix(&mut self, inputs: &[i32; 8]) -> i32 {
        self.inputs = *inputs;
        let mut sum = self.skew;
        for (w, p) in self.weights.iter().zip(self.inputs.iter()) {
            sum = sum.wrapping_add(w.wrapping_mul(*p));
        }
        self.pr = squash(sum.wrapping_add(65536) >> 17);
        self.pr
    }

    /// Adjust weights to reduce the coding cost of the last prediction.
    pub fn update(&mut self, bit: i32) {
        let mut err = (bit << 12) - self.pr;
        if err == 0 {
            return;
        }

        err = err.wrapping_mul(self.learn_rate) >> 7;
        // Signed shift yields -1 while above the floor, 0 at it.
        self.learn_rate += (END_LEARN_RATE - self.learn_rate) >> 31;
        self.skew = self.skew.wrapping_add(err);

        for (w, p) in self.weights.iter_mut().zip(self.inputs.iter()) {
            *w = w.wrapping_add(p.wrapping_mul(err) >> 15);
        }
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Mixer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_rate_decays_to_floor() {
        let mut m = Mixer::new();
        // Alternating bits keep the error nonzero on every update.
        for i in 0..8192 {
            m.mix(&[500; 8]);
            m.update(i & 1);
        }
        assert_eq!(m.learn_rate, END_LEARN_RATE);
    }

    #[test]
    fn repeated_bit_converges() {
        let mut m = Mixer::new();
        let inputs = [1000i32; 8];
        let mut pr = 0;
        for _ in 0..512 {
            pr = m.mix(&inputs);
            m.update(1);
        }
        assert!(pr > 3800, "pr = {pr}");

        let mut m = Mixer::new();
        let inputs = [-1000i32; 8];
        for _ in 0..512 {
            pr = m.mix(&inputs);
            m.update(0);
        }
        assert!(pr < 300, "pr = {pr}");
    }
}
