#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (document, pointer) = data;
    if let Ok(value) = kson::json::from_str(document) {
        let _ = value.pointer(pointer);
    }
});
