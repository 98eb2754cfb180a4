use growvec::{BitVec, Bits, FloatVec, IntVec, Radix, Traverse};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// Bit vectors.

#[test]
fn bit_vec_is_initially_empty() {
    let bits: BitVec = BitVec::new();
    assert_eq!(0, bits.len());
    assert!(!bits.get(0));
    assert!(!bits.get(1000));
}

#[test]
fn bit_vec_set_keeps_intervening_values_false() {
    let mut bits: BitVec = BitVec::new();
    assert!(bits.set(120, true));
    assert!(bits.len() >= 120);
    assert!(!bits.get(0));
    assert!(!bits.get(119));
    assert!(bits.get(120));
}

#[test]
fn bit_vec_with_len() {
    let bits: BitVec = BitVec::with_len(100);
    assert!(bits.len() >= 100);
    assert_eq!(0, bits.len() % 32);
    assert!(!bits.get(0));
    assert!(!bits.get(1000));
}

#[test]
fn bit_vec_from_base64_strings() {
    for &payload in &["1000AFG", "jba87uygb890jhg+/kjAHJGGJHGgsh"] {
        let encoded = format!("/{}", payload);
        let bits: BitVec = encoded.parse().unwrap();
        assert!(bits.len() >= payload.len() as u64 * 6);
        assert!(bits.to_string().starts_with(&encoded));
    }
}

#[test]
fn hex_example() {
    let mut bits: BitVec = BitVec::with_len(8);
    bits.set(1, true);
    bits.set(3, true);
    bits.set(4, true);
    let encoded = bits.to_string_radix(Radix::Hex);
    assert!(encoded.starts_with("0xa1"));
    assert_eq!("0xa1000000", encoded);
}

#[test]
fn cross_word_base64_symbol() {
    let mut bits: BitVec = BitVec::with_len(40);
    assert_eq!(64, bits.len());
    for &index in &[30, 31, 32, 34] {
        bits.set(index, true);
    }

    let encoded = bits.to_string_radix(Radix::Base64);
    let symbol5 = encoded.chars().nth(1 + 5).unwrap();
    assert_eq!(Some(0b010111), Radix::Base64.value_of(symbol5));
    assert_eq!(0b010111, bits.read_bits(30, 6));

    let decoded: BitVec = encoded.parse().unwrap();
    for index in 0..64 {
        assert_eq!(bits.get(index), decoded.get(index), "bit {}", index);
    }
}

#[test]
fn unrecognized_prefix_is_a_format_error() {
    let err = "q123".parse::<BitVec>().unwrap_err();
    assert!(err.is_format());
}

#[test]
fn negative_length_is_an_invalid_argument() {
    assert!(BitVec::<u32>::try_with_len(-5).unwrap_err().is_invalid_argument());
    assert!(IntVec::try_with_len(-5).unwrap_err().is_invalid_argument());
    assert!(FloatVec::try_with_len(-5).unwrap_err().is_invalid_argument());
}

#[test]
fn bit_vec_map_is_in_order() {
    let mut bits: BitVec = BitVec::new();
    bits.set(1, true);
    bits.set(4, true);

    let mapped = bits.map(|bit| bit);
    assert_eq!(bits.len() as usize, mapped.len());
    assert_eq!(
        vec![bits.get(0), bits.get(1), bits.get(2), bits.get(3), bits.get(4)],
        mapped[..5].to_vec()
    );
    assert_eq!(vec![false, true, false, false, true], mapped[..5].to_vec());
}

#[test]
fn bit_vec_reduce_counts_ones() {
    let bits: BitVec = "0b1101".parse().unwrap();
    assert_eq!(3, bits.reduce(0, |acc, bit| acc + bit as u32));

    let mut last = None;
    bits.for_each(|bit, index| {
        if bit {
            last = Some(index);
        }
    });
    assert_eq!(Some(3), last);
}

#[test]
fn tagged_forms() {
    let bits: BitVec = "BitVec[0x0f]".parse().unwrap();
    assert_eq!(4, bits.count_ones());
    assert_eq!("BitVec[0x0f000000]", bits.to_tagged_radix(Radix::Hex));
    assert!(bits.to_tagged().starts_with("BitVec[/"));
    assert!(bits.to_tagged().ends_with(']'));
}

#[quickcheck]
fn round_trip_every_radix(indices: Vec<u8>, words: u8) -> TestResult {
    // 96 bits per unit keeps the length a multiple of 1, 3, 4 and 6.
    let len = (words % 4) as u64 * 96;
    let mut bits: BitVec = BitVec::with_len(len);
    for &index in &indices {
        if (index as u64) < len {
            bits.set(index as u64, true);
        }
    }

    for &radix in &Radix::ALL {
        let decoded: BitVec = match bits.to_string_radix(radix).parse() {
            Ok(decoded) => decoded,
            Err(_) => return TestResult::failed(),
        };
        if decoded != bits {
            return TestResult::failed();
        }

        let decoded: BitVec = match bits.to_tagged_radix(radix).parse() {
            Ok(decoded) => decoded,
            Err(_) => return TestResult::failed(),
        };
        if decoded != bits {
            return TestResult::failed();
        }
    }

    TestResult::passed()
}

#[quickcheck]
fn set_then_get(ops: Vec<(u16, bool)>) -> bool {
    let mut bits: BitVec = BitVec::new();
    for &(index, value) in &ops {
        let index = index as u64;
        let len_before = bits.len();
        bits.set(index, value);

        let ok = if value {
            bits.get(index)
        } else if index >= len_before {
            bits.len() == len_before && !bits.get(index)
        } else {
            !bits.get(index)
        };

        if !ok {
            return false;
        }
    }
    true
}

// Integer vectors.

#[test]
fn int_vec_set_extends_exactly() {
    let mut v = IntVec::new();
    assert_eq!(0, v.len());
    assert_eq!(12, v.set(120, 12));
    assert_eq!(121, v.len());
    assert_eq!(12, v.get(120));
    assert_eq!(0, v.get(0));
    assert_eq!(0, v.get(119));
}

#[test]
fn int_vec_with_len() {
    let v = IntVec::with_len(100);
    assert_eq!(100, v.len());
    assert_eq!(0, v.get(0));
    assert_eq!(0, v.get(1000));
}

#[test]
fn int_vec_strings() {
    for &text in &["1,2,3", "1", "-15,-17"] {
        let v: IntVec = text.parse().unwrap();
        assert_eq!(text, v.to_string());
        assert_eq!(0, v.get(1000));
    }

    let mut v = IntVec::new();
    v.set(2, 3);
    assert_eq!("0,0,3", v.to_string());
    assert_eq!("IntVec[0,0,3]", v.to_tagged());
}

#[test]
fn int_vec_reduce() {
    let v: IntVec = "1,2,3,4".parse().unwrap();
    assert_eq!(10, v.reduce(0, |acc, x| acc + x));
    assert_eq!(Ok(10), v.try_reduce(Some(0), |acc, x| acc + x));
    assert!(v
        .try_reduce(None, |acc: i32, x| acc + x)
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn int_vec_bad_field_fails_whole_decode() {
    assert!("1,2,three".parse::<IntVec>().unwrap_err().is_format());
}

// Float vectors.

#[test]
fn float_vec_sequence() {
    let mut v = FloatVec::with_len(20);
    for i in 0..20 {
        v.set(i, (i + 1) as f32);
    }
    assert_eq!(
        "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20",
        v.to_string()
    );

    let doubled = v.map(|x| x * 2.0);
    assert_eq!(20, doubled.len());
    assert_eq!(40.0, doubled[19]);

    assert_eq!(210.0, v.reduce(0.0, |acc, x| acc + x));

    let mut visited = 0;
    let same = v.for_each(|x, index| {
        assert_eq!((index + 1) as f32, x);
        visited += 1;
    });
    assert_eq!(20, visited);
    assert_eq!(20, same.len());
}

#[test]
fn float_vec_tagged_round_trip() {
    let v: FloatVec = "FloatVec[0.1,2.5,-3]".parse().unwrap();
    assert_eq!(&[0.1, 2.5, -3.0], v.as_slice());
    assert_eq!("FloatVec[0.1,2.5,-3]", v.to_tagged());
    assert_eq!(v, v.to_tagged().parse::<FloatVec>().unwrap());
}

#[test]
fn float_vec_set_extends_exactly() {
    let mut v = FloatVec::new();
    assert_eq!(12.0, v.set(120, 12.0));
    assert_eq!(121, v.len());
    assert_eq!(12.0, v.get(120));
    assert_eq!(0.0, v.get(119));
}
