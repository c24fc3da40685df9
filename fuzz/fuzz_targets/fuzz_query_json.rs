#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(query) = serde_json::from_slice::<zipcode::ZipCodeQuery>(data) {
        let _ = query.is_valid();
    }
});
