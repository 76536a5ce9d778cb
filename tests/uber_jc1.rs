use jc1::cipher::{Jc1, KeyStream, LANES, UberJc1};

use std::io::Read;

const KEY: &[u8] = b"NowIsNotTheTimeToRunForFun";

const KEY_STREAM: [u8; 32] = [
    0xa5, 0xd2, 0xff, 0x12, 0xdc, 0xa1, 0x32, 0x28, 0x3a, 0xde, 0x47, 0xb2, 0x07, 0x7f, 0xec, 0x10,
    0x7c, 0x3a, 0x98, 0x56, 0xe5, 0xc4, 0x04, 0xa6, 0xe4, 0xc1, 0x8c, 0x4b, 0x30, 0x10, 0xfb, 0x67,
];

/// Builds the four lanes by hand, following the key derivation chain.
fn manual_lanes(key: &[u8]) -> [Jc1; LANES] {
    let mut l0 = Jc1::new(key);
    let mut l1 = Jc1::new(&l0.xor_keystream(key));
    let mut l2 = Jc1::new(&l1.xor_keystream(key));
    let l3 = Jc1::new(&l2.xor_keystream(key));

    [l0, l1, l2, l3]
}

#[test]
fn test_uber_known_answer() {
    let mut uber = UberJc1::new(KEY);
    let mut buf = [0u8; 32];

    assert_eq!(uber.fill(&mut buf), 32);
    assert_eq!(buf, KEY_STREAM);
}

#[test]
fn test_uber_io_read_known_answer() {
    let mut uber = UberJc1::new(KEY);
    let mut buf = [0u8; 32];

    assert_eq!(uber.read(&mut buf).unwrap(), 32);
    assert_eq!(buf, KEY_STREAM);
}

#[test]
fn test_uber_lane_derivation() {
    let uber = UberJc1::new(KEY);

    assert_eq!(uber.lanes(), &manual_lanes(KEY));
}

#[test]
fn test_uber_lanes_are_distinct() {
    let uber = UberJc1::new(KEY);
    let lanes = uber.lanes();

    for i in 0..LANES {
        for j in (i + 1)..LANES {
            assert_ne!(lanes[i], lanes[j], "lanes {i} and {j} coincide");
        }
    }
}

#[test]
fn test_uber_step_chains_all_lanes() {
    let mut uber = UberJc1::new(KEY);
    let mut lanes = manual_lanes(KEY);

    for input in [0u8, 1, 0x7f, 0xff, 42] {
        let expected = lanes
            .iter_mut()
            .fold(input, |byte, lane| lane.step(byte));

        assert_eq!(uber.step(input), expected);
    }

    assert_eq!(uber.lanes(), &lanes);
}

#[test]
fn test_uber_differs_from_single_lane() {
    let single = Jc1::new(KEY).xor_keystream(&[0u8; 32]);
    let uber = UberJc1::new(KEY).xor_keystream(&[0u8; 32]);

    assert_ne!(single, uber);
}

#[test]
fn test_uber_encrypt_decrypt_roundtrip() {
    let plaintext = b"four lanes, one keystream";

    let ciphertext = UberJc1::new(KEY).xor_keystream(plaintext);
    assert_ne!(&ciphertext[..], &plaintext[..]);

    let recovered = UberJc1::new(KEY).xor_keystream(&ciphertext);
    assert_eq!(&recovered[..], &plaintext[..]);
}

#[test]
fn test_uber_reset_and_empty_key() {
    let mut uber = UberJc1::new(KEY);
    uber.reset();

    assert_eq!(uber, UberJc1::default());
    assert!(uber.lanes().iter().all(|lane| *lane == Jc1::default()));

    let empty = UberJc1::new(b"");
    assert_eq!(empty.lanes()[0], Jc1::new(b""));
    assert_eq!(empty.lanes()[1], Jc1::new(b""));
}
