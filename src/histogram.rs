//! Byte frequency utilities shared by the block transforms.

/// Count occurrences of each byte value in `block`.
pub fn compute_histogram(block: &[u8], freqs: &mut [i32; 256]) {
    for &b in block {
        freqs[b as usize] += 1;
    }
}

/// Index of the least frequent byte value, preferring the lowest value
/// on ties. A zero count wins immediately.
pub fn rarest_byte(freqs: &[i32; 256]) -> u8 {
    let mut min_idx = 0usize;

    if freqs[min_idx] > 0 {
        for (i, &f) in freqs.iter().enumerate() {
            if f < freqs[min_idx] {
                min_idx = i;

                if f == 0 {
                    break;
                }
            }
        }
    }

    min_idx as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_byte() {
        let mut freqs = [0i32; 256];
        compute_histogram(b"abacus", &mut freqs);
        assert_eq!(freqs[b'a' as usize], 3);
        assert_eq!(freqs[b'b' as usize], 1);
        assert_eq!(freqs.iter().sum::<i32>(), 6);
    }

    #[test]
    fn rarest_byte_prefers_missing_values() {
        let mut freqs = [0i32; 256];
        compute_histogram(&[5u8; 100], &mut freqs);
        assert_eq!(rarest_byte(&freqs), 0);

        let mut freqs = [1i32; 256];
        freqs[200] = 0;
        assert_eq!(rarest_byte(&freqs), 200);
    }
}
