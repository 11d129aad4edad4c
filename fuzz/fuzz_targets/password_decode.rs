#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(decoded) = codec::decode(input, None) {
        // Anything that decodes must re-encode to a password of the same size.
        let password = codec::encode(&decoded.snapshot, decoded.size).unwrap();
        assert_eq!(password.len(), decoded.size.char_count());
    }
    let _ = wire::validate_checksums(input);
});
