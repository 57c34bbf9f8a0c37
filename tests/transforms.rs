use canopus::textcodec::{MASK_CRLF, MASK_FULL_ASCII, MASK_NOT_TEXT, MASK_XML_HTML};
use canopus::{Rlt, TextCodec, TextCodecConfig, Transform, TransformError, X86Codec};

fn text_round_trip(codec: &mut TextCodec, input: &[u8]) -> Vec<u8> {
    let mut enc = vec![0u8; codec.max_encoded_len(input.len())];
    let (read, written) = codec.forward(input, &mut enc).unwrap();
    assert_eq!(read, input.len());

    let mut dec = vec![0u8; input.len() + 16];
    let (iread, iwritten) = codec.inverse(&enc[..written], &mut dec).unwrap();
    assert_eq!(iread, written);
    assert_eq!(&dec[..iwritten], input);
    enc.truncate(written);
    enc
}

#[test]
fn ascii_sentence_round_trips_with_full_ascii_flag() {
    let input = b"the quick brown fox jumps over the lazy dog\n";
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let enc = text_round_trip(&mut codec, input);
    assert_eq!(enc[0], MASK_FULL_ASCII);
}

#[test]
fn markup_block_sets_the_xml_flag() {
    // The entity heuristic wants at least one &a/&g/&l/&q bigram, so the
    // ampersand is written as an entity.
    let input = b"<html><body>hello &amp; goodbye</body></html>";
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let enc = text_round_trip(&mut codec, input);
    assert_eq!(enc[0] & MASK_XML_HTML, MASK_XML_HTML);
}

#[test]
fn crlf_line_endings_are_folded_and_restored() {
    let input = b"first line\r\nsecond line\r\nthird line\r\n";
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let enc = text_round_trip(&mut codec, input);
    assert_eq!(enc[0] & MASK_CRLF, MASK_CRLF);
    // Folding the CRs must shorten the payload.
    assert!(enc.len() < input.len());
}

#[test]
fn variant_two_round_trips() {
    let input = b"it was the best of times, it was the worst of times; \
                  Wisdom and Foolishness marched together.\n";
    let mut codec = TextCodec::new(&TextCodecConfig::new().variant(2));
    text_round_trip(&mut codec, input);
}

#[test]
fn variant_two_escapes_the_token_byte() {
    let input = b"mixed text with a token byte \x0F and words the and of\n";
    let mut codec = TextCodec::new(&TextCodecConfig::new().variant(2));
    text_round_trip(&mut codec, input);
}

#[test]
fn repeated_new_words_round_trip_through_the_dynamic_dictionary() {
    let mut input = Vec::new();
    for i in 0..200 {
        input.extend_from_slice(b"zyzzyva quokka xylophage ");
        if i % 7 == 0 {
            input.extend_from_slice(b"Zyzzyva! ");
        }
    }
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let enc = text_round_trip(&mut codec, &input);
    // Second and later occurrences come from the dictionary.
    assert!(enc.len() < input.len() / 2);
}

#[test]
fn binary_block_is_refused_by_the_text_codec() {
    let input: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let mut freqs = [0i32; 256];
    assert_eq!(
        canopus::textcodec::compute_stats(&input, &mut freqs) & MASK_NOT_TEXT,
        MASK_NOT_TEXT
    );

    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let mut enc = vec![0u8; input.len()];
    assert_eq!(
        codec.forward(&input, &mut enc),
        Err(TransformError::NotText)
    );
}

#[test]
fn out_of_range_word_index_is_rejected() {
    // status byte, escape token, then a three byte index far past the
    // dictionary
    let bogus = [MASK_FULL_ASCII, 0x0F, 0xFF, 0xFF, 0x7F];
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let mut dec = vec![0u8; 64];
    assert!(matches!(
        codec.inverse(&bogus, &mut dec),
        Err(TransformError::InvalidData { .. })
    ));
}

#[test]
fn escape_without_index_is_rejected() {
    let bogus = [MASK_FULL_ASCII, 0x0F];
    let mut codec = TextCodec::new(&TextCodecConfig::new());
    let mut dec = vec![0u8; 64];
    assert!(matches!(
        codec.inverse(&bogus, &mut dec),
        Err(TransformError::InvalidData { .. })
    ));
}

#[test]
fn x86_block_with_many_jumps_round_trips() {
    let mut block = vec![0x90u8; 8192];
    let mut placed = 0;
    let mut i = 0;
    while i + 5 <= block.len() && placed < 80 {
        block[i] = 0xE8;
        block[i + 1] = (7 + placed as u8) | 0x04;
        block[i + 2] = 0x20;
        block[i + 3] = 0x30;
        block[i + 4] = 0x00;
        placed += 1;
        i += 100;
    }
    assert!(placed >= 65);

    let mut codec = X86Codec::new();
    let mut enc = vec![0u8; codec.max_encoded_len(block.len())];
    let (read, written) = codec.forward(&block, &mut enc).unwrap();
    assert_eq!(read, block.len());

    let mut dec = vec![0u8; block.len()];
    let (iread, iwritten) = codec.inverse(&enc[..written], &mut dec).unwrap();
    assert_eq!(iread, written);
    assert_eq!(&dec[..iwritten], &block[..]);
}

#[test]
fn rlt_shrinks_short_runs() {
    let input = b"aaaaaaaabbbbbbbbcccccccc";
    let mut rlt = Rlt::new();
    let mut enc = vec![0u8; rlt.max_encoded_len(input.len())];
    let (read, written) = rlt.forward(input, &mut enc).unwrap();
    assert_eq!(read, input.len());
    assert!(written < input.len());

    let mut dec = vec![0u8; input.len() + 8];
    let (iread, iwritten) = rlt.inverse(&enc[..written], &mut dec).unwrap();
    assert_eq!(iread, written);
    assert_eq!(&dec[..iwritten], input);
}

#[test]
fn transforms_share_one_contract() {
    // The pipeline treats every stage through the same trait object.
    let mut stages: Vec<Box<dyn Transform>> = vec![
        Box::new(Rlt::new()),
        Box::new(X86Codec::new()),
        Box::new(TextCodec::new(&TextCodecConfig::new())),
    ];

    for stage in stages.iter_mut() {
        assert!(stage.max_encoded_len(1000) >= 1000);
    }
}
