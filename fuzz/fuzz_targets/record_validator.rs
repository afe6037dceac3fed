#![no_main]

use libfuzzer_sys::fuzz_target;
use winners::ingest::Tournament;
use winners::validator::validate_line;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither validation nor a full ingest may panic on any input
        let _ = validate_line(input);
        let tournament = Tournament::from_lines(input.lines());
        let _ = tournament.podium();
    }
});
