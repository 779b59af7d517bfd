#![no_main]
use image_convert::directive::parse_directive_with;
use image_convert::Operation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(directive) = std::str::from_utf8(data) else {
        return;
    };

    // Any directive either parses or maps to one of the documented exit codes.
    match parse_directive_with(directive, &mut || {}) {
        Ok(ops) => {
            for op in ops {
                assert_ne!(op, Operation::Help, "help is never listed");
                if let Operation::Resize(ratio) = op {
                    assert!(ratio > 0.0, "non-positive ratio {} accepted", ratio);
                }
            }
        }
        Err(e) => {
            let code = e.exit_code();
            assert!((1..=7).contains(&code), "unexpected exit code {} for {:?}", code, e);
        }
    }
});
