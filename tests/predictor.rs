use canopus::{Predictor, PredictorConfig};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn small_config() -> PredictorConfig {
    PredictorConfig::new().block_size(1 << 16).size(1 << 16)
}

fn byte_bits(data: &[u8]) -> Vec<i32> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for i in (0..=7).rev() {
            bits.push(i32::from(byte >> i) & 1);
        }
    }
    bits
}

/// Run a fresh predictor over `bits`, recording the prediction made
/// before each update.
fn predictions(bits: &[i32]) -> Vec<i32> {
    let mut p = Predictor::new(&small_config());
    let mut out = Vec::with_capacity(bits.len());
    for &bit in bits {
        out.push(p.get());
        p.update(bit);
    }
    out
}

#[test]
fn identical_streams_yield_identical_predictions() {
    let bits = byte_bits(b"determinism, twice over. 0123456789 abcdefgh.");
    assert_eq!(predictions(&bits), predictions(&bits));
}

#[test]
fn predictions_stay_in_range() {
    let data: Vec<u8> = (0u8..=255).cycle().take(2048).collect();
    for pr in predictions(&byte_bits(&data)) {
        assert!((0..4096).contains(&pr), "pr = {pr}");
    }
}

#[test]
fn repeated_text_is_learned() {
    let data: Vec<u8> = b"the the the the "
        .iter()
        .cycle()
        .take(1024)
        .copied()
        .collect();
    let bits = byte_bits(&data);
    let prs = predictions(&bits);

    // Score each prediction in the direction of the observed bit; a
    // model that has learned the loop should be confidently right.
    let window = 1024;
    let start = bits.len() - window;
    let mut total = 0i64;
    for i in start..bits.len() {
        let directed = if bits[i] == 1 { prs[i] } else { 4095 - prs[i] };
        total += i64::from(directed);
    }
    let mean = total / window as i64;
    assert!(mean >= 3000, "mean directed prediction = {mean}");
}

#[test]
fn constant_bytes_converge_hard() {
    let mut p = Predictor::new(&small_config());
    let mut last = 0;
    for _ in 0..512 {
        for i in (0..=7).rev() {
            let bit = i32::from(0xFFu8 >> i) & 1;
            last = p.get();
            p.update(bit);
        }
    }
    assert!(last > 3700, "pr = {last}");

    let mut p = Predictor::new(&small_config());
    for _ in 0..512 {
        for _ in 0..8 {
            last = p.get();
            p.update(0);
        }
    }
    assert!(last < 400, "pr = {last}");
}

#[test]
fn random_bits_keep_the_model_honest() {
    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
    let bits: Vec<i32> = (0..4096).map(|_| rng.gen_range(0..2)).collect();
    let prs = predictions(&bits);

    let mut deviation = 0i64;
    for &pr in prs.iter() {
        assert!(pr > 0 && pr < 4095, "pr = {pr}");
        deviation += i64::from((pr - 2048).abs());
    }

    let mean_deviation = deviation / prs.len() as i64;
    assert!(mean_deviation <= 512, "mean deviation = {mean_deviation}");
}

#[test]
fn fresh_predictor_starts_undecided() {
    let p = Predictor::new(&small_config());
    assert_eq!(p.get(), 2048);
}
