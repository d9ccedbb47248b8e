#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = ujson::decode(data) {
        let encoded = value.to_json().expect("decoded trees always encode");
        let reparsed = ujson::decode(&encoded).expect("re-encoded JSON parses");
        assert_eq!(value, reparsed);

        let canonical = ujson::decode_canonical(data).expect("already parsed once");
        let first = canonical.to_json().expect("decoded trees always encode");
        let again = ujson::decode_canonical(&first).expect("re-encoded JSON parses");
        assert_eq!(first, again.to_json().expect("decoded trees always encode"));
    }
});
