#![no_main]

use gowords::extract;
use gowords_core::NormalizePolicy;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(file) = gowords_syntax::parse_source(s) {
            if let Ok(idents) = extract::exported_identifiers(&file) {
                for ident in idents {
                    // Strict output is always a non-empty lowercase ASCII word
                    if let Some(word) = gowords_core::normalize_one(&ident.node, NormalizePolicy::strict()) {
                        assert!(!word.is_empty());
                        assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
                    }
                }
            }
        }
    }
});
