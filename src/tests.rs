use crate::{
    AlphabetTable, DecodeError, DecodeOptions, ESCAPE, Encoding, decode, decode_with,
    detect_encoding, encode, encode_as, encode_wide,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn codepoints(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

#[test]
fn test_encode_decode_empty() {
    let encoded = encode(b"", false);
    assert_eq!(codepoints(&encoded), vec![0x625C]);
    assert_eq!(decode(&encoded).unwrap(), b"");
}

#[test]
fn test_encode_decode_empty_base64() {
    assert_eq!(encode(b"", true), "");
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn test_known_vectors() {
    let vectors: [(&[u8], &[u32]); 6] = [
        (&[0x00], &[0xAC40]),
        (&[0x12, 0x34], &[0xB51A, 0xCC00]),
        (&[0x3F, 0xFF], &[0xCBFF, 0x825C]),
        (
            &[0xFF, 0xEE, 0xFF, 0xFF, 0xFF, 0xDC, 0xFF, 0xFF],
            &[0x2E, 0xAE53, 0x625B, 0x2E, 0xAE57, 0x725B, 0x9E5C],
        ),
        (
            &[0xFF, 0x00, 0x00, 0x01, 0xFF, 0x00, 0x00, 0x01, 0x10],
            &[0x2E, 0xADDC, 0xAC00, 0x623C, 0xAC00, 0xB484],
        ),
        (
            b"hello world",
            &[0x568E, 0x7D77, 0xB9E4, 0xB376, 0x9DEF, 0x53EE],
        ),
    ];

    for (data, expected) in vectors {
        let encoded = encode(data, false);
        assert_eq!(codepoints(&encoded), expected, "encoding {:02x?}", data);
        assert_eq!(decode(&encoded).unwrap(), data);
    }
}

#[test]
fn test_encode_decode_unicode_text() {
    let data = "안녕하세요, 카투사 프로그래밍 클럽 라이브러리 테스트입니다. Hello, world!".as_bytes();

    let wide = encode(data, false);
    assert_eq!(decode(&wide).unwrap(), data);

    let b64 = encode(data, true);
    assert!(b64.is_ascii());
    assert_eq!(decode(&b64).unwrap(), data);

    // 15 bits per symbol against 6
    assert!(wide.chars().count() * 2 < b64.len());
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let len = rng.random_range(0..300);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);

        assert_eq!(decode(&encode(&data, false)).unwrap(), data);
        assert_eq!(decode(&encode(&data, true)).unwrap(), data);
    }
}

#[test]
fn test_length_is_bounded() {
    // ceil((8n + 1) / 15) symbols, plus one per escape
    for len in 0..100usize {
        let data = vec![0x11u8; len];
        let symbols = encode_wide(&data).chars().count();
        assert_eq!(symbols, (8 * len + 1).div_ceil(15), "length {}", len);
    }
}

#[test]
fn test_detect_base64() {
    assert_eq!(detect_encoding("aGVsbG8="), Some(Encoding::Base64));
    assert_eq!(detect_encoding("  \r\n0AAA"), Some(Encoding::Base64));
    assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
}

#[test]
fn test_detect_wide() {
    let table = AlphabetTable::global();
    let hangul = table.symbol(0).unwrap().to_string();
    let cjk = table.symbol(20_000).unwrap().to_string();
    assert_eq!(detect_encoding(&hangul), Some(Encoding::Wide));
    assert_eq!(detect_encoding(&cjk), Some(Encoding::Wide));
    assert_eq!(detect_encoding(&ESCAPE.to_string()), Some(Encoding::Wide));
    assert_eq!(detect_encoding(" \n\r "), None);
}

#[test]
fn test_escape_first_takes_wide_path() {
    let data = [0xFF, 0xFE];
    let encoded = encode(&data, false);
    assert!(encoded.starts_with(ESCAPE));
    assert_eq!(decode(&encoded).unwrap(), data);
}

#[test]
fn test_whitespace_is_stripped() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let encoded = encode(data, false);

    let mut wrapped = String::new();
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            wrapped.push_str("\r\n");
        }
        wrapped.push(c);
        wrapped.push(' ');
    }
    assert_eq!(decode(&wrapped).unwrap(), data);

    let b64 = encode(data, true);
    let b64_wrapped = format!("{}\n{}\n", &b64[..20], &b64[20..]);
    assert_eq!(decode(&b64_wrapped).unwrap(), data);
}

#[test]
fn test_tab_is_not_stripped() {
    let encoded = format!("\t{}", encode(b"abc", false));
    // A tab is ASCII, so this is taken as base64 and fails there
    assert!(matches!(
        decode(&encoded),
        Err(DecodeError::InvalidLength { .. }) | Err(DecodeError::InvalidCharacter { .. })
    ));
}

#[test]
fn test_dangling_escape() {
    let encoded = format!("{}{}", encode(b"xyz", false), ESCAPE);
    assert!(matches!(
        decode(&encoded),
        Err(DecodeError::DanglingEscape { .. })
    ));
    assert_eq!(
        decode(". \n").unwrap_err(),
        DecodeError::DanglingEscape { position: 0 }
    );
}

#[test]
fn test_error_positions_skip_stripped_characters() {
    let table = AlphabetTable::global();
    let (a, b) = (table.symbol(1).unwrap(), table.symbol(2).unwrap());

    // The escape is the fourth character typed, the third one decoded
    let text = format!("{} {}{}", a, b, ESCAPE);
    assert_eq!(
        decode(&text).unwrap_err(),
        DecodeError::DanglingEscape { position: 2 }
    );

    let text = format!("{}\r\n{}\u{3042}", a, b);
    assert_eq!(
        decode(&text).unwrap_err(),
        DecodeError::UnknownSymbol {
            char: '\u{3042}',
            position: 2
        }
    );
}

#[test]
fn test_unknown_symbol_policy() {
    // U+3042 is neither Hangul nor CJK, but it is above 127
    let text = "\u{3042}";
    assert_eq!(
        decode(text).unwrap_err(),
        DecodeError::UnknownSymbol {
            char: '\u{3042}',
            position: 0
        }
    );
    // Lenient: same as symbols[0] on its own
    let zero = AlphabetTable::global().symbol(0).unwrap().to_string();
    assert_eq!(
        decode_with(text, &DecodeOptions::lenient()).unwrap(),
        decode(&zero).unwrap()
    );
}

#[test]
fn test_malformed_base64() {
    assert!(matches!(
        decode("abc"),
        Err(DecodeError::InvalidLength { .. })
    ));
    assert!(matches!(
        decode("ab$d"),
        Err(DecodeError::InvalidCharacter { .. })
    ));
}

#[test]
fn test_encode_as() {
    assert_eq!(encode_as(b"hi", Encoding::Base64), "aGk=");
    assert_eq!(encode_as(b"hi", Encoding::Wide), encode(b"hi", false));
}
