// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use timetable_events_engine::PositionedToken;

const CELLS: [&[&str]; 3] = [
    &["Algorithms.", "Smith.", "лекции.", "Room 101.", "[12.03", "]"],
    &[
        "Physics.",
        "Ivanov.",
        "лабораторные",
        "занятия.",
        "(1 п/г).",
        "Lab 2.",
        "[4ч 01.10-15.12 ч.н.",
        "]",
    ],
    &["History.", "Petrova.", "семинар.", "305.", "[05.02-26.05, 19.06", "]"],
];

#[allow(dead_code)]
pub fn generate_timetable_tokens(cells: usize) -> Vec<PositionedToken> {
    let mut tokens = vec![];
    let mut y = 0.0;
    for i in 0..cells {
        for line in CELLS[i % CELLS.len()] {
            // Terminators sit on the same line as the date group.
            if *line != "]" {
                y += 12.0;
            }
            tokens.push(PositionedToken::new(*line, 40.0, y));
        }
    }
    tokens
}
