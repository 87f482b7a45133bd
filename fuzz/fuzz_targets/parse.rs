#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Go source is UTF-8; skip anything else
    if let Ok(s) = std::str::from_utf8(data) {
        // A clean tree must lower; a tree with error nodes must be rejected
        if let Ok(tree) = gowords_syntax::parse_tree(s) {
            let lowered = gowords_syntax::parse_source(s);
            if tree.root_node().has_error() {
                assert!(lowered.is_err());
            }
        }
    }
});
