#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = kson::json::from_slice(data) {
        let text = kson::json::to_string(&value).expect("Serialization never fails");
        let reparsed = kson::json::from_str(&text).expect("Printed JSON is valid");
        // NaN cannot come out of the parser, so equality is reflexive here
        assert_eq!(value, reparsed);
    }
});
