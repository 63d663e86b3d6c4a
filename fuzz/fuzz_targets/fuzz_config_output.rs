#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(config) = prodpack::parse_config_output(raw) {
            let _ = prodpack::module_store_dir(&config, std::path::Path::new("/workspace"));
        }
    }
});
