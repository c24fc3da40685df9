#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the country code, the rest the zip code.
        let (country, zip) = s.split_once('\n').unwrap_or((s, ""));
        // Must not panic; errors are fine.
        let _ = zipcode::is_valid_zip_code(country, zip);
        let _ = zipcode::zip_code_regex_text(country);
    }
});
