//! Dictionary-based text transform.
//!
//! One-pass codec replacing words with short variable-length dictionary
//! indices. The dictionary starts from 1024 common English words and
//! grows dynamically as the block is walked; the inverse rebuilds the
//! same dynamic dictionary from the words it decodes, so no dictionary
//! data travels with the block.
//!
//! Two index codings exist. Variant 1 spends two escape tokens (0x0F for
//! exact case, 0x0E for a flipped first letter). Variant 2 instead uses
//! the high bit of the first index byte as the word marker and escapes
//! literal bytes with the high bit set.

pub mod dictionary;

use crate::{config::TextCodecConfig, error::TransformError, Transform};

use self::dictionary::{
    is_delimiter, is_text, is_upper_case, DictEntry, StaticDictionary, WordPtr, HASH1, HASH2,
    MAX_WORD_LENGTH,
};

/// Word indices below this fit one byte (variant 1).
const THRESHOLD1: i32 = 128;
/// Word indices below this fit two bytes (variant 1); also caps the
/// period during which 3 letter words may still enter the dictionary.
const THRESHOLD2: i32 = THRESHOLD1 * THRESHOLD1;
/// Word indices below this fit one byte (variant 2).
const THRESHOLD3: i32 = 32;
/// Word indices below this fit two bytes (variant 2).
const THRESHOLD4: i32 = THRESHOLD3 * 128;

/// The dictionary stops doubling at this entry count.
const MAX_DICT_SIZE: usize = 1 << 19;
/// Largest block the transform accepts.
pub const MAX_BLOCK_SIZE: usize = 1 << 30;

/// Marks a dictionary word kept in its stored case (variant 1), and any
/// escaped literal (variant 2).
pub const ESCAPE_TOKEN1: u8 = 0x0F;
/// Marks a dictionary word with the case of its first letter flipped.
pub const ESCAPE_TOKEN2: u8 = 0x0E;

const LF: u8 = 0x0A;
const CR: u8 = 0x0D;

/// Status byte flags.
pub const MASK_NOT_TEXT: u8 = 0x80;
pub const MASK_ALMOST_FULL_ASCII: u8 = 0x08;
pub const MASK_FULL_ASCII: u8 = 0x04;
pub const MASK_XML_HTML: u8 = 0x02;
pub const MASK_CRLF: u8 = 0x01;

const TOKEN1_WORD: &[u8] = &[ESCAPE_TOKEN1];
const TOKEN2_WORD: &[u8] = &[ESCAPE_TOKEN2];

/// Classify a block with order-0 and order-1 byte statistics.
///
/// Returns the status byte: `MASK_NOT_TEXT` alone, or any combination of
/// the full/almost-full ASCII, XML/HTML and CRLF flags.
pub fn compute_stats(block: &[u8], freqs0: &mut [i32; 256]) -> u8 {
    let mut freqs1 = vec![[0i32; 256]; 256];
    let mut prv = 0usize;

    for &b in block {
        let cur = b as usize;
        freqs0[cur] += 1;
        freqs1[prv][cur] += 1;
        prv = cur;
    }

    let length = block.len() as i64;
    let mut nb_text_chars = 0i64;

    for i in 32..128usize {
        if is_text(i as u8) {
            nb_text_chars += i64::from(freqs0[i]);
        }
    }

    // Crude threshold
    if 2 * nb_text_chars < length {
        return MASK_NOT_TEXT;
    }

    let mut nb_bin_chars = 0i64;

    for i in 128..256usize {
        nb_bin_chars += i64::from(freqs0[i]);
    }

    if 4 * nb_bin_chars > length {
        return MASK_NOT_TEXT;
    }

    let mut res = 0u8;

    if nb_bin_chars == 0 {
        res |= MASK_FULL_ASCII;
    } else if nb_bin_chars <= length / 100 {
        res |= MASK_ALMOST_FULL_ASCII;
    }

    if nb_bin_chars <= length - length / 10 {
        // Likely XML/HTML when < and > appear often and about equally,
        // and at least one ampersand entity is worth replacing.
        let f1 = i64::from(freqs0[b'<' as usize]);
        let f2 = i64::from(freqs0[b'>' as usize]);
        let f3 = i64::from(freqs1[b'&' as usize][b'a' as usize])
            + i64::from(freqs1[b'&' as usize][b'g' as usize])
            + i64::from(freqs1[b'&' as usize][b'l' as usize])
            + i64::from(freqs1[b'&' as usize][b'q' as usize]);
        let min_freq = ((length - nb_bin_chars) >> 9).max(2);

        if f1 >= min_freq && f2 >= min_freq && f3 > 0 {
            let close = if f1 < f2 {
                f1 >= f2 - f2 / 100
            } else if f2 < f1 {
                f2 >= f1 - f1 / 100
            } else {
                true
            };

            if close {
                res |= MASK_XML_HTML;
            }
        }
    }

    // CR+LF line endings, with no stray CR
    if freqs0[CR as usize] != 0 && freqs0[CR as usize] == freqs0[LF as usize] {
        let stray = (0..256).any(|i| i != LF as usize && freqs1[CR as usize][i] != 0);

        if !stray {
            res |= MASK_CRLF;
        }
    }

    res
}

fn should_insert(length: i32, words: usize) -> bool {
    (length > 3 || (length > 2 && (words as i32) < THRESHOLD2)) && length < MAX_WORD_LENGTH
}

fn emit_word_index1(dst: &mut [u8], val: i32) -> usize {
    // Varint: 7 bits, or 6 + 7 bits, or 5 + 7 + 7 bits
    if val >= THRESHOLD1 {
        if val >= THRESHOLD2 {
            dst[0] = (0xE0 | (val >> 14)) as u8;
            dst[1] = (0x80 | (val >> 7)) as u8;
            dst[2] = (0x7F & val) as u8;
            return 3;
        }

        dst[0] = (0x80 | (val >> 7)) as u8;
        dst[1] = (0x7F & val) as u8;
        return 2;
    }

    dst[0] = val as u8;
    1
}

fn emit_word_index2(dst: &mut [u8], val: i32, mask: i32) -> usize {
    // 1st byte: 0x80 => word, 0x40 => more bytes, 0x20 => flip case
    // 2nd byte: 0x80 => one more byte
    if val >= THRESHOLD3 {
        if val >= THRESHOLD4 {
            dst[0] = (0xC0 | mask | ((val >> 14) & 0x1F)) as u8;
            dst[1] = (0x80 | ((val >> 7) & 0x7F)) as u8;
            dst[2] = (val & 0x7F) as u8;
            return 3;
        }

        dst[0] = (0xC0 | mask | ((val >> 7) & 0x1F)) as u8;
        dst[1] = (val & 0x7F) as u8;
        return 2;
    }

    dst[0] = (0x80 | mask | val) as u8;
    1
}

/// The text transform. Construct once per block stream; every `forward`
/// or `inverse` call starts from the static dictionary again.
pub struct TextCodec {
    map: Vec<i32>, // word hash -> entry index, -1 when vacant
    list: Vec<DictEntry>,
    statics: StaticDictionary,
    static_size: usize,
    dict_size: usize,
    hash_mask: i32,
    is_crlf: bool,
    high_bit_marker: bool, // variant 2
}

impl TextCodec {
    pub fn new(cfg: &TextCodecConfig) -> TextCodec {
        let statics = StaticDictionary::build();
        let dict_size = cfg.dict_size();
        let high_bit_marker = cfg.uses_high_bit_marker();

        let mut list: Vec<DictEntry> =
            statics.entries.iter().copied().take(dict_size).collect();
        let nb_words = list.len();

        let static_size = if high_bit_marker {
            nb_words
        } else {
            // The escape tokens themselves are the last two static words
            list.push(DictEntry {
                hash: 0,
                data: (1 << 24) | nb_words as i32,
                word: WordPtr::Escape(ESCAPE_TOKEN2),
            });
            list.push(DictEntry {
                hash: 0,
                data: (1 << 24) | (nb_words as i32 + 1),
                word: WordPtr::Escape(ESCAPE_TOKEN1),
            });
            nb_words + 2
        };

        list.resize(dict_size, DictEntry::vacant(0));

        let mut codec = TextCodec {
            map: vec![-1; 1usize << cfg.log_hash_size()],
            list,
            statics,
            static_size,
            dict_size,
            hash_mask: ((1u32 << cfg.log_hash_size()) - 1) as i32,
            is_crlf: false,
            high_bit_marker,
        };
        codec.reset();
        codec
    }

    fn reset(&mut self) {
        for slot in self.map.iter_mut() {
            *slot = -1;
        }

        for i in 0..self.static_size {
            self.map[(self.list[i].hash & self.hash_mask) as usize] = i as i32;
        }

        for i in self.static_size..self.dict_size {
            self.list[i] = DictEntry::vacant(i as i32);
        }
    }

    fn word_bytes<'a>(&'a self, entry: &DictEntry, input: &'a [u8]) -> &'a [u8] {
        let len = entry.length() as usize;

        match entry.word {
            WordPtr::Text(off) => &self.statics.text[off as usize..off as usize + len],
            WordPtr::Input(off) => &input[off as usize..off as usize + len],
            WordPtr::Escape(ESCAPE_TOKEN1) => TOKEN1_WORD,
            WordPtr::Escape(_) => TOKEN2_WORD,
            WordPtr::Empty => &[],
        }
    }

    /// Find the entry for a word of `length` bytes hashing to `h`, where
    /// `tail` holds the word bytes past the first (the first letter may
    /// differ in case).
    fn lookup(&self, h: i32, length: i32, tail: &[u8], input: &[u8]) -> Option<usize> {
        let slot = self.map[(h & self.hash_mask) as usize];

        if slot < 0 {
            return None;
        }

        let e = &self.list[slot as usize];

        if e.hash != h || e.length() != length {
            return None;
        }

        if &self.word_bytes(e, input)[1..] != tail {
            return None;
        }

        Some(slot as usize)
    }

    /// Add or replace a word at the current insertion point.
    fn insert_word(&mut self, h: i32, length: i32, anchor: usize, words: &mut usize) {
        let w = *words;
        let old = self.list[w];

        if old.index() >= self.static_size as i32 {
            // Evict and reuse the old entry
            self.map[(old.hash & self.hash_mask) as usize] = -1;
            self.list[w] = DictEntry {
                hash: h,
                data: (length << 24) | w as i32,
                word: WordPtr::Input(anchor as u32),
            };
        }

        self.map[(h & self.hash_mask) as usize] = w as i32;
        *words += 1;

        // Dictionary full? Expand, or wrap back over the dynamic region
        if *words >= self.dict_size && !self.expand_dictionary() {
            *words = self.static_size;
        }
    }

    fn expand_dictionary(&mut self) -> bool {
        if self.dict_size >= MAX_DICT_SIZE {
            return false;
        }

        self.list
            .extend((self.dict_size..self.dict_size * 2).map(|i| DictEntry::vacant(i as i32)));
        self.dict_size <<= 1;
        true
    }

    /// Copy literals, escaping bytes that collide with the token space
    /// and dropping CR when the block is CRLF-folded. `None` when `dst`
    /// runs out.
    fn emit_symbols(&self, src: &[u8], dst: &mut [u8]) -> Option<usize> {
        let mut d = 0;

        if self.high_bit_marker {
            for &cur in src {
                match cur {
                    ESCAPE_TOKEN1 => {
                        if d + 1 >= dst.len() {
                            return None;
                        }
                        dst[d] = ESCAPE_TOKEN1;
                        dst[d + 1] = ESCAPE_TOKEN1;
                        d += 2;
                    }
                    CR if self.is_crlf => {}
                    _ => {
                        if cur & 0x80 != 0 {
                            if d >= dst.len() {
                                return None;
                            }
                            dst[d] = ESCAPE_TOKEN1;
                            d += 1;
                        }
                        if d >= dst.len() {
                            return None;
                        }
                        dst[d] = cur;
                        d += 1;
                    }
                }
            }
        } else {
            for &cur in src {
                if d >= dst.len() {
                    return None;
                }

                match cur {
                    ESCAPE_TOKEN1 | ESCAPE_TOKEN2 => {
                        // The token byte itself is coded as a word
                        dst[d] = ESCAPE_TOKEN1;
                        d += 1;

                        let idx = if cur == ESCAPE_TOKEN1 {
                            self.static_size as i32 - 1
                        } else {
                            self.static_size as i32 - 2
                        };
                        let len_idx = if idx >= THRESHOLD2 {
                            3
                        } else if idx < THRESHOLD1 {
                            1
                        } else {
                            2
                        };

                        if d + len_idx >= dst.len() {
                            return None;
                        }

                        d += emit_word_index1(&mut dst[d..], idx);
                    }
                    CR if self.is_crlf => {}
                    _ => {
                        dst[d] = cur;
                        d += 1;
                    }
                }
            }
        }

        Some(d)
    }
}

impl Transform for TextCodec {
    fn forward(
        &mut self,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<(usize, usize), TransformError> {
        if src.is_empty() {
            return Ok((0, 0));
        }

        assert!(
            src.len() <= MAX_BLOCK_SIZE,
            "text transform block limit is {MAX_BLOCK_SIZE} bytes, got {}",
            src.len()
        );

        let count = src.len();
        let required = self.max_encoded_len(count);

        if dst.len() < required {
            return Err(TransformError::BufferTooSmall {
                size: dst.len(),
                required,
            });
        }

        let mut freqs0 = [0i32; 256];
        let mode = compute_stats(src, &mut freqs0);

        if mode & MASK_NOT_TEXT != 0 {
            return Err(TransformError::NotText);
        }

        self.reset();
        let src_end = count;
        let dst_end = required;
        // Room for one escape token plus the longest word index
        let dst_guard = dst_end as isize - if self.high_bit_marker { 3 } else { 4 };
        let mut words = self.static_size;
        let too_small = TransformError::BufferTooSmall {
            size: dst.len(),
            required: count + 1,
        };

        self.is_crlf = mode & MASK_CRLF != 0;
        let mut src_idx = 0usize;
        let mut dst_idx = 0usize;
        dst[dst_idx] = mode;
        dst_idx += 1;

        while src_idx < src_end && src[src_idx] == b' ' {
            dst[dst_idx] = b' ';
            src_idx += 1;
            dst_idx += 1;
        }

        let mut emit_anchor = src_idx;
        let mut delim_anchor: isize = if src_idx < src_end && is_text(src[src_idx]) {
            src_idx as isize - 1
        } else {
            src_idx as isize
        };

        while src_idx < src_end {
            let cur = src[src_idx];

            if is_text(cur) {
                src_idx += 1;
                continue;
            }

            if src_idx as isize > delim_anchor + 2 && is_delimiter(cur) {
                // A word of two or more letters just ended.
                // h1: exact case, h2: first letter case flipped
                let anchor = (delim_anchor + 1) as usize;
                let first = src[anchor];
                let case_flag: i32 = if is_upper_case(first) { 32 } else { -32 };
                let mut h1 =
                    HASH1.wrapping_mul(HASH1) ^ i32::from(first).wrapping_mul(HASH2);
                let mut h2 = HASH1.wrapping_mul(HASH1)
                    ^ (i32::from(first) + case_flag).wrapping_mul(HASH2);

                for &b in &src[anchor + 1..src_idx] {
                    let h = i32::from(b).wrapping_mul(HASH2);
                    h1 = h1.wrapping_mul(HASH1) ^ h;
                    h2 = h2.wrapping_mul(HASH1) ^ h;
                }

                let length = (src_idx - anchor) as i32;
                let tail = &src[anchor + 1..src_idx];
                let pe1 = self.lookup(h1, length, tail, src);
                let pe = pe1.or_else(|| self.lookup(h2, length, tail, src));

                match pe {
                    None => {
                        if should_insert(length, words) {
                            self.insert_word(h1, length, anchor, &mut words);
                        }
                    }
                    Some(idx) => {
                        // A space standing alone between two word
                        // references is dropped; the inverse restores it.
                        if emit_anchor as isize != delim_anchor
                            || src[delim_anchor as usize] != b' '
                        {
                            let seg = &src[emit_anchor..(delim_anchor + 1) as usize];
                            let n = self
                                .emit_symbols(seg, &mut dst[dst_idx..dst_end])
                                .ok_or(too_small)?;
                            dst_idx += n;
                        }

                        if dst_idx as isize >= dst_guard {
                            return Err(too_small);
                        }

                        let entry = self.list[idx];

                        if self.high_bit_marker {
                            let mask = if pe1.is_none() { 32 } else { 0 };
                            dst_idx +=
                                emit_word_index2(&mut dst[dst_idx..], entry.index(), mask);
                        } else {
                            dst[dst_idx] = if pe1.is_some() {
                                ESCAPE_TOKEN1
                            } else {
                                ESCAPE_TOKEN2
                            };
                            dst_idx += 1;
                            dst_idx += emit_word_index1(&mut dst[dst_idx..], entry.index());
                        }

                        emit_anchor = (delim_anchor + 1) as usize + entry.length() as usize;
                    }
                }
            }

            delim_anchor = src_idx as isize;
            src_idx += 1;
        }

        let n = self
            .emit_symbols(&src[emit_anchor..src_end], &mut dst[dst_idx..dst_end])
            .ok_or(too_small)?;
        dst_idx += n;

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

        assert!(
            src.len() <= MAX_BLOCK_SIZE,
            "text transform block limit is {MAX_BLOCK_SIZE} bytes, got {}",
            src.len()
        );

        self.reset();
        let src_end = src.len();
        let dst_end = dst.len();
        // The status byte is never a letter, so the first word can only
        // start at index 1.
        let mut delim_anchor: isize = 0;
        let mut words = self.static_size;
        let mut word_run = false;

        self.is_crlf = src[0] & MASK_CRLF != 0;
        let mut src_idx = 1usize;
        let mut dst_idx = 0usize;

        while src_idx < src_end && dst_idx < dst_end {
            let cur = src[src_idx];

            if is_text(cur) {
                dst[dst_idx] = cur;
                src_idx += 1;
                dst_idx += 1;
                continue;
            }

            if src_idx as isize > delim_anchor + 2 && is_delimiter(cur) {
                // Mirror the forward pass: every decoded word feeds the
                // dynamic dictionary.
                let anchor = (delim_anchor + 1) as usize;
                let mut h1 = HASH1;

                for &b in &src[anchor..src_idx] {
                    h1 = h1.wrapping_mul(HASH1) ^ i32::from(b).wrapping_mul(HASH2);
                }

                let length = (src_idx - anchor) as i32;

                if self
                    .lookup(h1, length, &src[anchor + 1..src_idx], src)
                    .is_none()
                    && should_insert(length, words)
                {
                    self.insert_word(h1, length, anchor, &mut words);
                }
            }

            src_idx += 1;

            let is_word_ref = if self.high_bit_marker {
                cur & 0x80 != 0
            } else {
                cur == ESCAPE_TOKEN1 || cur == ESCAPE_TOKEN2
            };

            if is_word_ref {
                let (idx, flip) = if self.high_bit_marker {
                    let mut idx = i32::from(cur & 0x1F);

                    if cur & 0x40 != 0 {
                        if src_idx >= src_end {
                            return Err(TransformError::InvalidData {
                                offset: src_idx,
                                reason: "truncated word index",
                            });
                        }
                        let mut idx2 = i32::from(src[src_idx]);
                        src_idx += 1;

                        if idx2 & 0x80 != 0 {
                            idx = (idx << 7) | (idx2 & 0x7F);
                            if src_idx >= src_end {
                                return Err(TransformError::InvalidData {
                                    offset: src_idx,
                                    reason: "truncated word index",
                                });
                            }
                            idx2 = i32::from(src[src_idx]);
                            src_idx += 1;
                        }

                        idx = (idx << 7) | (idx2 & 0x7F);

                        if idx as usize >= self.dict_size {
                            return Err(TransformError::InvalidData {
                                offset: src_idx,
                                reason: "word index out of range",
                            });
                        }
                    }

                    (idx, cur & 0x20 != 0)
                } else {
                    if src_idx >= src_end {
                        return Err(TransformError::InvalidData {
                            offset: src_idx,
                            reason: "escape without word index",
                        });
                    }
                    let mut idx = i32::from(src[src_idx]);
                    src_idx += 1;

                    if idx >= 0x80 {
                        idx &= 0x7F;
                        if src_idx >= src_end {
                            return Err(TransformError::InvalidData {
                                offset: src_idx,
                                reason: "truncated word index",
                            });
                        }
                        let mut idx2 = i32::from(src[src_idx]);
                        src_idx += 1;

                        if idx2 >= 0x80 {
                            idx = ((idx & 0x1F) << 7) | (idx2 & 0x7F);
                            if src_idx >= src_end {
                                return Err(TransformError::InvalidData {
                                    offset: src_idx,
                                    reason: "truncated word index",
                                });
                            }
                            idx2 = i32::from(src[src_idx]);
                            src_idx += 1;
                        }

                        idx = (idx << 7) | (idx2 & 0x7F);

                        if idx as usize >= self.dict_size {
                            return Err(TransformError::InvalidData {
                                offset: src_idx,
                                reason: "word index out of range",
                            });
                        }
                    }

                    (idx, cur == ESCAPE_TOKEN2)
                };

                let entry = self.list[idx as usize];
                let length = entry.length() as usize;

                if entry.word == WordPtr::Empty || dst_idx + length >= dst_end {
                    return Err(TransformError::InvalidData {
                        offset: src_idx,
                        reason: "dictionary reference is invalid",
                    });
                }

                // Restore the space the forward pass dropped between two
                // word references
                if word_run && length > 1 {
                    dst[dst_idx] = b' ';
                    dst_idx += 1;
                }

                let word = self.word_bytes(&entry, src);

                if flip {
                    dst[dst_idx] = if is_upper_case(word[0]) {
                        word[0].wrapping_add(32)
                    } else {
                        word[0].wrapping_sub(32)
                    };
                    dst[dst_idx + 1..dst_idx + length].copy_from_slice(&word[1..]);
                } else {
                    dst[dst_idx..dst_idx + length].copy_from_slice(word);
                }

                dst_idx += length;

                if length > 1 {
                    word_run = true;
                    delim_anchor = src_idx as isize;
                } else {
                    // Escape entry
                    word_run = false;
                    delim_anchor = src_idx as isize - 1;
                }
            } else {
                if self.high_bit_marker && cur == ESCAPE_TOKEN1 {
                    // Escaped literal
                    if src_idx >= src_end {
                        return Err(TransformError::InvalidData {
                            offset: src_idx,
                            reason: "escape without literal",
                        });
                    }
                    dst[dst_idx] = src[src_idx];
                    src_idx += 1;
                    dst_idx += 1;
                } else {
                    if self.is_crlf && cur == LF {
                        dst[dst_idx] = CR;
                        dst_idx += 1;

                        if dst_idx >= dst_end {
                            return Err(TransformError::BufferTooSmall {
                                size: dst_end,
                                required: dst_idx + 1,
                            });
                        }
                    }

                    dst[dst_idx] = cur;
                    dst_idx += 1;
                }

                word_run = false;
                delim_anchor = src_idx as isize - 1;
            }
        }

        if src_idx != src_end {
            return Err(TransformError::InvalidData {
                offset: src_idx,
                reason: "truncated input",
            });
        }

        Ok((src_idx, dst_idx))
    }

    fn max_encoded_len(&self, src_len: usize) -> usize {
        // Worst case equals the input; the caller handles a failure when
        // the output would grow instead.
        src_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextCodecConfig;

    #[test]
    fn stats_flags() {
        let mut freqs = [0i32; 256];
        let mode = compute_stats(b"plain ascii words only", &mut freqs);
        assert_eq!(mode, MASK_FULL_ASCII);

        let mut freqs = [0i32; 256];
        let mode = compute_stats(&[0u8, 1, 2, 3, 200, 210, 220, 230], &mut freqs);
        assert_eq!(mode, MASK_NOT_TEXT);

        let mut freqs = [0i32; 256];
        let mode = compute_stats(b"first line\r\nsecond line\r\n", &mut freqs);
        assert_eq!(mode & MASK_CRLF, MASK_CRLF);

        // A CR without its LF disables the flag
        let mut freqs = [0i32; 256];
        let mode = compute_stats(b"first line\r\nbroken\rline\n\n", &mut freqs);
        assert_eq!(mode & MASK_CRLF, 0);
    }

    #[test]
    fn common_words_compress() {
        let input = b"the house and the man of the people";
        let mut codec = TextCodec::new(&TextCodecConfig::new());
        let mut dst = vec![0u8; input.len()];
        let (read, written) = codec.forward(input, &mut dst).unwrap();
        assert_eq!(read, input.len());
        assert!(written < input.len());
    }

    #[test]
    fn word_index_codings_round_trip() {
        let mut buf = [0u8; 3];

        assert_eq!(emit_word_index1(&mut buf, 100), 1);
        assert_eq!(buf[0], 100);

        assert_eq!(emit_word_index1(&mut buf, 1000), 2);
        assert_eq!(buf[0], 0x80 | (1000u32 >> 7) as u8);
        assert_eq!(buf[1], (1000 & 0x7F) as u8);

        assert_eq!(emit_word_index1(&mut buf, 100_000), 3);
        assert_eq!(emit_word_index2(&mut buf, 10, 32), 1);
        assert_eq!(buf[0], 0x80 | 32 | 10);
        assert_eq!(emit_word_index2(&mut buf, 1000, 0), 2);
        assert_eq!(emit_word_index2(&mut buf, 100_000, 0), 3);
    }
}
