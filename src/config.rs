/// Sizing hints for a [`Predictor`](crate::predictor::Predictor).
///
/// `block_size` is the requested upper bound on block bytes and drives
/// the state store size; `size` is the actual block size and drives the
/// mixer pool size. Too many mixers hurt small blocks, too few hurt big
/// ones. Either hint may be omitted; safe defaults apply.
#[derive(Clone, Copy, Debug, Default)]
pub struct PredictorConfig {
    block_size: Option<usize>,
    size: Option<usize>,
}

impl PredictorConfig {
    pub fn new() -> PredictorConfig {
        PredictorConfig::default()
    }

    /// Requested upper bound on block bytes.
    pub fn block_size(mut self, bytes: usize) -> Self {
        self.block_size = Some(bytes);
        self
    }

    /// Actual size of the current block.
    pub fn size(mut self, bytes: usize) -> Self {
        self.size = Some(bytes);
        self
    }

    pub(crate) fn states_size(&self) -> usize {
        match self.block_size {
            Some(n) if n >= 64 << 20 => 1 << 29,
            Some(n) if n >= 16 << 20 => 1 << 28,
            Some(n) if n >= 1 << 20 => 1 << 27,
            Some(_) => 1 << 26,
            None => 1 << 28,
        }
    }

    pub(crate) fn mixers_size(&self) -> usize {
        match self.size {
            Some(n) if n >= 8 << 20 => 1 << 14,
            Some(n) if n >= 4 << 20 => 1 << 12,
            Some(n) if n >= 1 << 20 => 1 << 10,
            Some(_) => 1 << 9,
            None => 1 << 12,
        }
    }
}

/// Options for the [`TextCodec`](crate::textcodec::TextCodec).
#[derive(Clone, Copy, Debug)]
pub struct TextCodecConfig {
    variant: u8,
    size: Option<usize>,
    extra_memory: bool,
}

impl Default for TextCodecConfig {
    fn default() -> Self {
        TextCodecConfig {
            variant: 1,
            size: None,
            extra_memory: false,
        }
    }
}

impl TextCodecConfig {
    pub fn new() -> TextCodecConfig {
        TextCodecConfig::default()
    }

    /// Select the index coding: variant 2 steals high bits of literal
    /// bytes as the word marker, anything else selects variant 1 with
    /// its two escape tokens.
    pub fn variant(mut self, variant: u8) -> Self {
        self.variant = variant;
        self
    }

    /// Actual size of the current block, used to scale the hash table
    /// and the initial dictionary.
    pub fn size(mut self, bytes: usize) -> Self {
        self.size = Some(bytes);
        self
    }

    /// Spend one extra hash bit of memory for fewer collisions.
    pub fn extra_memory(mut self, extra: bool) -> Self {
        self.extra_memory = extra;
        self
    }

    pub(crate) fn uses_high_bit_marker(&self) -> bool {
        self.variant == 2
    }

    pub(crate) fn log_hash_size(&self) -> u32 {
        let log = match self.size {
            None => 24,
            Some(n) if n >= 1 << 28 => 26,
            Some(n) if n >= 1024 => (n / 4).ilog2(),
            Some(_) => 8,
        };
        log + u32::from(self.extra_memory)
    }

    pub(crate) fn dict_size(&self) -> usize {
        match self.size {
            None => (128 * 128) * 4,
            Some(n) => {
                let mut size = 1 << 12;
                for step in (14..=24).step_by(2) {
                    if n >= 1 << step {
                        size <<= 1;
                    }
                }
                size
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictor_defaults() {
        let cfg = PredictorConfig::new();
        assert_eq!(cfg.states_size(), 1 << 28);
        assert_eq!(cfg.mixers_size(), 1 << 12);
    }

    #[test]
    fn predictor_sizing_follows_the_hints() {
        let cfg = PredictorConfig::new().block_size(64 << 20).size(8 << 20);
        assert_eq!(cfg.states_size(), 1 << 29);
        assert_eq!(cfg.mixers_size(), 1 << 14);

        let cfg = PredictorConfig::new().block_size(1 << 10).size(1 << 10);
        assert_eq!(cfg.states_size(), 1 << 26);
        assert_eq!(cfg.mixers_size(), 1 << 9);
    }

    #[test]
    fn text_codec_sizing() {
        let cfg = TextCodecConfig::new();
        assert_eq!(cfg.log_hash_size(), 24);
        assert_eq!(cfg.dict_size(), 65536);

        let cfg = TextCodecConfig::new().size(1 << 20);
        assert_eq!(cfg.log_hash_size(), 18);
        assert_eq!(cfg.dict_size(), 1 << 16);

        let cfg = TextCodecConfig::new().size(1 << 20).extra_memory(true);
        assert_eq!(cfg.log_hash_size(), 19);
    }
}
