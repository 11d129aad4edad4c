use proptest::prelude::*;
use wire::{
    failing_groups, indices_from_str, open, scramble, seal, string_from_indices,
    unscramble, validate_checksums, ChecksumGroup, PasswordSize, WireError, GROUP_LEN,
};

fn size_strategy() -> impl Strategy<Value = PasswordSize> {
    prop_oneof![
        Just(PasswordSize::Gold),
        Just(PasswordSize::Silver),
        Just(PasswordSize::Bronze),
    ]
}

fn frame_strategy() -> impl Strategy<Value = (PasswordSize, Vec<u8>)> {
    size_strategy().prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec(any::<u8>(), size.data_bytes()),
        )
    })
}

fn unoffset(indices: &[u8]) -> Vec<u8> {
    indices
        .iter()
        .enumerate()
        .map(|(i, &v)| v.wrapping_sub(i as u8) & 0x3F)
        .collect()
}

proptest! {
    #[test]
    fn prop_scramble_roundtrip((size, data) in frame_strategy()) {
        let frame = seal(&data);
        let indices = scramble(&frame);
        prop_assert_eq!(indices.len(), size.char_count());
        prop_assert!(failing_groups(&unoffset(&indices)).is_empty());

        let back = unscramble(&indices, size.total_bytes()).unwrap();
        prop_assert_eq!(&back, &frame);
        prop_assert_eq!(open(&back).unwrap(), data.as_slice());
    }

    #[test]
    fn prop_single_corruption_is_localized(
        (size, data) in frame_strategy(),
        position in any::<prop::sample::Index>(),
        delta in 1u8..64,
    ) {
        let mut indices = scramble(&seal(&data));
        let position = position.index(indices.len());
        indices[position] = (indices[position] + delta) & 0x3F;

        let complete = indices.len() / GROUP_LEN * GROUP_LEN;
        match unscramble(&indices, size.total_bytes()) {
            Err(WireError::ChecksumMismatch { groups }) => {
                prop_assert!(position < complete);
                prop_assert_eq!(groups, vec![ChecksumGroup::new(position / GROUP_LEN)]);
            }
            Ok(_) => {
                // Only the trailing partial group has no check symbol.
                prop_assert!(position >= complete);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn prop_live_validation_matches_unscramble((_size, data) in frame_strategy()) {
        let password = string_from_indices(&scramble(&seal(&data)));
        prop_assert!(validate_checksums(&password).is_empty());
        for cut in [0, 5, 10, 23] {
            let prefix: String = password.chars().take(cut).collect();
            prop_assert!(validate_checksums(&prefix).is_empty());
        }
        prop_assert_eq!(indices_from_str(&password).unwrap().len(), password.len());
    }

    #[test]
    fn prop_unscramble_never_panics(
        indices in prop::collection::vec(0u8..64, 0..300),
        total in 0usize..200,
    ) {
        let _ = unscramble(&indices, total);
    }
}
