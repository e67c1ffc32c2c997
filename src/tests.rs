use crate::{DecodeError, MAIN_V1, MAIN_V2, PAD, TAIL_V1, TAIL_V2, Variant, decode, encode};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn v1(ordinals: &[usize]) -> Vec<char> {
    ordinals.iter().map(|&i| MAIN_V1[i]).collect()
}

fn v2(ordinals: &[usize]) -> Vec<char> {
    ordinals.iter().map(|&i| MAIN_V2[i]).collect()
}

fn with(mut symbols: Vec<char>, rest: &[char]) -> Vec<char> {
    symbols.extend_from_slice(rest);
    symbols
}

fn check(expected_v1: &[char], expected_v2: &[char], input: &[u8], wrap: usize) {
    let expected_v1: String = expected_v1.iter().collect();
    let expected_v2: String = expected_v2.iter().collect();

    let actual = encode(input, Variant::V2, wrap);
    assert_eq!(actual, expected_v2, "v2 encoding of {:?}", input);
    assert_eq!(decode(&expected_v2).unwrap(), input);

    let actual = encode(input, Variant::V1, wrap);
    assert_eq!(actual, expected_v1, "v1 encoding of {:?}", input);
    assert_eq!(decode(&expected_v1).unwrap(), input);
}

fn check_str(expected_v1: &str, expected_v2: &str, input: &[u8], wrap: usize) {
    let v1: Vec<char> = expected_v1.chars().collect();
    let v2: Vec<char> = expected_v2.chars().collect();
    check(&v1, &v2, input, wrap);
}

#[test]
fn test_zero_byte_encode() {
    check(&[], &[], &[], 0);
}

#[test]
fn test_one_byte_encode() {
    let k = (b'k' as usize) << 2;
    check(
        &with(v1(&[k]), &[PAD, PAD, PAD]),
        &with(v2(&[k]), &[PAD]),
        b"k",
        0,
    );
}

#[test]
fn test_two_byte_encode() {
    check(
        &with(v1(&[0, 16]), &[PAD, PAD]),
        &with(v2(&[0, 16]), &[PAD]),
        &[0x00, 0x01],
        0,
    );
}

#[test]
fn test_three_byte_encode() {
    check(
        &with(v1(&[0, 16, 128]), &[PAD]),
        &with(v2(&[0, 16, 128]), &[PAD]),
        &[0x00, 0x01, 0x02],
        0,
    );
}

#[test]
fn test_four_byte_encode() {
    for i in 0..4 {
        check(
            &with(v1(&[0, 16, 128]), &[TAIL_V1[i]]),
            &with(v2(&[0, 16, 128]), &[TAIL_V2[i]]),
            &[0x00, 0x01, 0x02, i as u8],
            0,
        );
    }
}

#[test]
fn test_five_byte_encode() {
    check(
        &v1(&[687, 222, 960, 291]),
        &v2(&[687, 222, 960, 291]),
        &[0xab, 0xcd, 0xef, 0x01, 0x23],
        0,
    );
}

#[test]
fn test_six_byte_encode() {
    let scratch: u64 = 123 << 38 | 456 << 28 | 789 << 18 | 909 << 8 | 55;
    let data = scratch.to_be_bytes();

    check(
        &with(v1(&[123, 456, 789, 909, 55 << 2]), &[PAD, PAD, PAD]),
        &with(v2(&[123, 456, 789, 909, 55 << 2]), &[PAD]),
        &data[2..8],
        0,
    );
}

#[test]
fn test_seven_byte_encode() {
    let scratch: u64 = 237 << 46 | 77 << 36 | 257 << 26 | 513 << 16 | 809 << 6 | 7;
    let data = scratch.to_be_bytes();

    check(
        &with(v1(&[237, 77, 257, 513, 809, 7 << 4]), &[PAD, PAD]),
        &with(v2(&[237, 77, 257, 513, 809, 7 << 4]), &[PAD]),
        &data[1..8],
        0,
    );
}

#[test]
fn test_eight_byte_encode() {
    let scratch: u64 = 3 << 54 | 206 << 44 | 368 << 34 | 617 << 24 | 650 << 14 | 1005 << 4 | 3;
    let data = scratch.to_be_bytes();

    check(
        &with(v1(&[3, 206, 368, 617, 650, 1005, 3 << 6]), &[PAD]),
        &with(v2(&[3, 206, 368, 617, 650, 1005, 3 << 6]), &[PAD]),
        &data,
        0,
    );
}

#[test]
fn test_nine_byte_encode() {
    for i in 0..4u64 {
        let mut data = [0u8; 13];
        let scratch: u64 = (855 << 30 | 298 << 20 | 1007 << 10 | 97) << 24;
        data[0..8].copy_from_slice(&scratch.to_be_bytes());
        let scratch: u64 = (611 << 30 | 291 << 20 | 856 << 10 | i << 8) << 24;
        data[5..13].copy_from_slice(&scratch.to_be_bytes());

        check(
            &with(v1(&[855, 298, 1007, 97, 611, 291, 856]), &[TAIL_V1[i as usize]]),
            &with(v2(&[855, 298, 1007, 97, 611, 291, 856]), &[TAIL_V2[i as usize]]),
            &data[0..9],
            0,
        );
    }
}

#[test]
fn test_exhaustive() {
    // 10-bit ordinals behind a leading 1 bit so leading zeros survive
    let mut biggy = BigUint::from(1u32);

    let mut rng = StdRng::seed_from_u64(42);
    let mut ordinals: Vec<usize> = (0..1024).collect();
    ordinals.shuffle(&mut rng);

    for &ordinal in &ordinals {
        biggy <<= 10usize;
        biggy += ordinal as u32;
    }

    // Drop the byte holding the leading 1
    let bytes = biggy.to_bytes_be();
    assert_eq!(bytes.len(), 1281);

    check(&v1(&ordinals), &v2(&ordinals), &bytes[1..], 0);
}

#[test]
fn test_phrase() {
    check_str(
        "🏗📩🎦🐇🎛📘🔯🚜💞😽🆖🐊🎱🥁🚄🌱💞😭💮🇵💢🕥🐭🔸🍉🚲🦑🐶💢🕥🔮🔺🍉📸🐮🌼👦🚟🥴📑",
        "🧏📩🧈🐇🧅📘🔯🚜💞😽♏🐊🎱🥁🚄🌱💞😭💮✊💢🪠🐭🩴🍉🚲🦑🐶💢🪠🔮🩹🍉📸🐮🌼👦🚟🥴📑",
        b"Base64 is so 1999, isn't there something better?\n",
        0,
    );
}

#[test]
fn test_wrap() {
    let input = b"1234567890abc";

    check_str("🎌🚟🎗🈸🎥🤠📠🐁👖📸🎈☕", "🎌🚟🦿🦣🎥🤠📠🐁👖📸🎈☕", input, 0);
    check_str(
        "🎌\n🚟\n🎗\n🈸\n🎥\n🤠\n📠\n🐁\n👖\n📸\n🎈\n☕\n",
        "🎌\n🚟\n🦿\n🦣\n🎥\n🤠\n📠\n🐁\n👖\n📸\n🎈\n☕\n",
        input,
        1,
    );
    check_str(
        "🎌🚟\n🎗🈸\n🎥🤠\n📠🐁\n👖📸\n🎈☕\n",
        "🎌🚟\n🦿🦣\n🎥🤠\n📠🐁\n👖📸\n🎈☕\n",
        input,
        2,
    );
    check_str(
        "🎌🚟🎗\n🈸🎥🤠\n📠🐁👖\n📸🎈☕\n",
        "🎌🚟🦿\n🦣🎥🤠\n📠🐁👖\n📸🎈☕\n",
        input,
        3,
    );
    check_str(
        "🎌🚟🎗🈸\n🎥🤠📠🐁\n👖📸🎈☕\n",
        "🎌🚟🦿🦣\n🎥🤠📠🐁\n👖📸🎈☕\n",
        input,
        4,
    );
    check_str(
        "🎌🚟🎗🈸🎥\n🤠📠🐁👖📸\n🎈☕\n",
        "🎌🚟🦿🦣🎥\n🤠📠🐁👖📸\n🎈☕\n",
        input,
        5,
    );
    check_str(
        "🎌🚟🎗🈸🎥🤠📠🐁👖📸🎈☕\n",
        "🎌🚟🦿🦣🎥🤠📠🐁👖📸🎈☕\n",
        input,
        20,
    );
}

#[test]
fn test_decode_concatenated() {
    // V2, then V1, each two messages
    assert_eq!(decode("👖📸🧈🌭👩☕💲🥇🪚☕").unwrap(), b"abcdefxyz");
    assert_eq!(decode("👖📸🎈☕🎥🤠📠🏍🐲👡🕟☕").unwrap(), b"abc6789XY\n");

    // enc("A") + enc("BC") + enc("DEF") + ... + enc("jklmnopqrs")
    let expected = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrs";
    assert_eq!(
        decode("🏒☕☕☕🏗🈳☕☕🏟🌚👑☕🏫🍌🔥📑🏾🎌🛡🔢🐒🏣🍜🛢🐥☕☕☕🐪👆📨🐫🎈🚌☕☕🎐🚯🏛🐇🎩🤰🔓☕👖📸🎦🌭👪🕕📬🏍👺😁🚗🐿💎🚃🌤🕒").unwrap(),
        expected
    );
    assert_eq!(
        decode("🏒☕🧏🥱☕🧝🌚👑☕🏫🍌🔥📑🧦🎌🫣🧽🐒🏣🍜🫤🐥☕🐪👆📨🐫🎈🚌☕🎐🚯🧙🐇🎩🤰🔓☕👖📸🧈🌭👪🪐📬🛼👺😁🚗🧨💎🚃🦩🪄").unwrap(),
        expected
    );
}

#[test]
fn test_concatenation_of_every_length_pair() {
    let data: Vec<u8> = (0..12u8).map(|b| b.wrapping_mul(97).wrapping_add(5)).collect();
    for variant in [Variant::V1, Variant::V2] {
        for a in 0..data.len() {
            for b in 0..data.len() {
                let (b1, b2) = (&data[..a], &data[data.len() - b..]);
                let joined = encode(b1, variant, 0) + &encode(b2, variant, 0);
                let mut expected = b1.to_vec();
                expected.extend_from_slice(b2);
                assert_eq!(decode(&joined).unwrap(), expected, "{} + {}", a, b);
            }
        }
    }
}

#[test]
fn test_garbage() {
    let err = decode("not emojisV2").unwrap_err();
    assert_eq!(
        err,
        DecodeError::NonAlphabetCharacter {
            char: 'n',
            position: 0
        }
    );
    assert!(err.to_string().contains("Non Ecoji character seen"));
}

#[test]
fn test_decode_mixed() {
    // 🀄 and 🤾 are in both generations, 🅰 only in V1 and 🤿 only in V2
    let mixed: String = ['\u{1f004}', '\u{1f170}', '\u{1f93f}', '\u{1f93e}'].iter().collect();
    let err = decode(&mixed).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MixedVersions {
            position: 2,
            locked: Variant::V1,
            ..
        }
    ));
    assert!(err.to_string().contains("Emojis from different ecoji versions seen"));

    let mixed: String = ['\u{1f004}', '\u{1f93f}', '\u{1f170}', '\u{1f93e}'].iter().collect();
    assert!(matches!(
        decode(&mixed),
        Err(DecodeError::MixedVersions {
            position: 2,
            locked: Variant::V2,
            ..
        })
    ));

    // Conflicting symbols more than a group apart
    let mixed: String = [
        '\u{1f004}', '\u{1f170}', '\u{1f170}', '\u{1f93e}', '\u{1f004}', '\u{1f170}',
        '\u{1f170}', '\u{1f93e}', '\u{1f004}', '\u{1f170}', '\u{1f93f}', '\u{1f93e}',
    ]
    .iter()
    .collect();
    assert!(matches!(
        decode(&mixed),
        Err(DecodeError::MixedVersions { position: 10, .. })
    ));
}

#[test]
fn test_mixed_across_messages() {
    let mut joined = encode(b"Base64 is so 1999", Variant::V1, 0);
    joined.push_str(&encode(b"Base64 is so 1999", Variant::V2, 0));
    assert!(matches!(
        decode(&joined),
        Err(DecodeError::MixedVersions { .. })
    ));
}

#[test]
fn test_output_stays_within_its_generation() {
    use crate::{Alphabet, Membership};

    let alphabet = Alphabet::global();
    let data: Vec<u8> = (0..=255).chain([0x00, 0x80]).collect();
    for variant in [Variant::V1, Variant::V2] {
        for start in 0..data.len() {
            let end = (start + 7).min(data.len());
            for c in encode(&data[start..end], variant, 0).chars() {
                let membership = alphabet.classify(c).map(|s| s.membership);
                assert!(
                    membership == Some(Membership::Both)
                        || membership == Some(Membership::Only(variant)),
                    "{:?} output contains {} from the other generation",
                    variant,
                    c
                );
            }
        }
    }
    assert_eq!(encode(&[0x00, 0x80], Variant::V2, 0), "\u{231b}\u{1f004}\u{2615}");
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let data: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let wrap = rng.random_range(0..90);
        for variant in [Variant::V1, Variant::V2] {
            let encoded = encode(&data, variant, wrap);
            assert_eq!(decode(&encoded).unwrap(), data);
            assert_eq!(encoded.replace('\n', ""), encode(&data, variant, 0));
        }
        assert_eq!(
            encode(&data, Variant::V1, 0).chars().count(),
            4 * data.len().div_ceil(5)
        );
    }
}

#[test]
fn test_leading_and_trailing_whitespace() {
    let encoded = format!("  \n{}\r\n\t", encode(b"hello world", Variant::V2, 5));
    assert_eq!(decode(&encoded).unwrap(), b"hello world");
}
