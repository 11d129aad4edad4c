#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&total, rest)) = data.split_first() else {
        return;
    };
    let indices: Vec<u8> = rest.iter().map(|b| b & 0x3F).collect();
    if let Ok(frame) = wire::unscramble(&indices, usize::from(total)) {
        assert_eq!(frame.len(), usize::from(total));
        assert_eq!(wire::scramble(&frame).len(), indices.len());
        let _ = wire::open(&frame);
    }
});
