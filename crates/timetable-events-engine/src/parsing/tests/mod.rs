//! End-to-end tests for the parsing module.
//!
//! Token fixtures are written line by line; each line gets its own `y`, and
//! lines are further split into same-line fragments to exercise both joins.


use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::models::{Event, EventType, PositionedToken, RawEvent};
use crate::parsing::{
    DateError, EventParser, IndexedParseError, NoopObserver, ParseError, ParseObserver,
    TypePhrases, assemble, parse_event, parse_events, parse_events_with,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One token per `|`-separated fragment; a new line of the slice is a new `y`.
fn tokens(lines: &[&str]) -> Vec<PositionedToken> {
    lines
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            let y = 800.0 - 12.0 * row as f64;
            line.split('|')
                .enumerate()
                .map(move |(col, fragment)| PositionedToken::new(fragment, 40.0 + col as f64, y))
        })
        .collect()
}

fn raw(data: &str, date: NaiveDate) -> RawEvent {
    RawEvent::new(data, Default::default(), date)
}

#[test]
fn lecture_from_fragmented_tokens() {
    let tokens = tokens(&["Algorithms.", "Smith.", "лек|ции.", "Room 101.", "[12.03|]"]);

    let blocks = assemble(&tokens, ymd(2024, 1, 1));
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].data(), "Algorithms. Smith. лекции. Room 101. [12.03]");

    let events = parse_events(blocks).unwrap();
    assert_eq!(
        events,
        vec![Event {
            title: "Algorithms".to_string(),
            teacher: "Smith".to_string(),
            kind: EventType::Lecture,
            subgroup: String::new(),
            location: "Room 101".to_string(),
            dates: vec![ymd(2024, 3, 12)],
        }]
    );
}

#[test]
fn whole_timetable_snapshot() {
    let tokens = tokens(&[
        "Algorithms.",
        "Smith.",
        "лекции.",
        "Room 101.",
        "[12.03|]",
        "Physics.",
        "Ivanov.",
        "лабораторные",
        "занятия.",
        "(1 п/г).",
        "Lab 2.",
        "[4ч 01.10-15.10 |ч.н.|]",
        "History.",
        "Petrova.",
        "семинар.",
        "305.",
        "[05.02-26.02,|19.03.2025|]",
        "trailing text without terminator",
    ]);

    let events = parse_events(assemble(&tokens, ymd(2024, 9, 1))).unwrap();

    insta::assert_snapshot!(render::events(&events), @r"
    lecture | Algorithms | Smith | - | Room 101 | 2025-03-12
    lab | Physics | Ivanov | 1 п/г | Lab 2 | 2024-10-01, 2024-10-15
    seminar | History | Petrova | - | 305 | 2025-02-05, 2025-02-12, 2025-02-19, 2025-02-26, 2025-03-19
    ");
}

#[test]
fn missing_type_fails_without_event() {
    let result = parse_event(&raw("Algorithms. Smith. Room 101. [12.03]", ymd(2024, 1, 1)));
    assert_eq!(result, Err(ParseError::TypeNotFound));
}

#[test]
fn lab_skips_one_more_date_token_than_lecture() {
    let reference = ymd(2024, 9, 1);
    let lecture = parse_event(&raw("A. B. лекции. 101. [01.10 08.10]", reference)).unwrap();
    let lab = parse_event(&raw("A. B. лабораторные занятия. 101. [01.10 08.10]", reference)).unwrap();

    assert_eq!(lecture.dates, vec![ymd(2024, 10, 1), ymd(2024, 10, 8)]);
    assert_eq!(lab.dates, vec![ymd(2024, 10, 8)]);
    assert_eq!(lab.location, lecture.location);
}

#[test]
fn title_without_teacher_keeps_every_letter() {
    let event = parse_event(&raw("Philosophy. семинар. 305. [05.02]", ymd(2024, 1, 1))).unwrap();
    assert_eq!(event.title, "Philosophy");
    assert_eq!(event.teacher, "");
    assert_eq!(event.location, "305");
}

#[test]
fn title_without_closing_period_loses_last_character() {
    let event = parse_event(&raw("Philosophy семинар. 305. [05.02]", ymd(2024, 1, 1))).unwrap();
    assert_eq!(event.title, "Philosoph");
}

#[test]
fn subgroup_parentheses_are_stripped() {
    let event = parse_event(&raw(
        "Chemistry. Ivanova. семинар. (2 п/г). Room 5. [12.03]",
        ymd(2024, 1, 1),
    ))
    .unwrap();
    assert_eq!(event.subgroup, "2 п/г");
    assert_eq!(event.location, "Room 5");
}

#[test]
fn malformed_dates_are_wrapped() {
    let result = parse_event(&raw("A. B. лекции. 101. [31.02]", ymd(2024, 1, 1)));
    assert_eq!(
        result,
        Err(ParseError::DateParse(DateError::InvalidDate {
            text: "31.02".to_string()
        }))
    );
}

#[test]
fn missing_location_is_an_error() {
    let result = parse_event(&raw("A. B. лекции. [12.03]", ymd(2024, 1, 1)));
    assert_eq!(result, Err(ParseError::MissingLocation));
}

#[test]
fn batch_reports_index_of_first_failure() {
    let reference = ymd(2024, 1, 1);
    let blocks = vec![
        raw("A. B. лекции. 101. [12.03]", reference),
        raw("C. D. семинар. 102. [13.03]", reference),
        raw("E. F. practice. 103. [14.03]", reference),
        raw("G. H. nothing here either", reference),
    ];

    let err = parse_events(blocks).unwrap_err();

    assert_eq!(
        err,
        IndexedParseError {
            index: 2,
            source: ParseError::TypeNotFound
        }
    );
    assert_eq!(err.to_string(), "parse events[2]");
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string),
        Some("schedule event type is not found".to_string())
    );
}

#[test]
fn batch_preserves_input_order() {
    let reference = ymd(2024, 1, 1);
    let blocks: Vec<_> = ["Z", "A", "M"]
        .iter()
        .map(|t| raw(&format!("{t}. T. лекции. 101. [12.03]"), reference))
        .collect();

    let titles: Vec<_> = parse_events_with(blocks, &mut NoopObserver)
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();

    assert_eq!(titles, vec!["Z", "A", "M"]);
}

#[derive(Default)]
struct Recorder {
    blocks: Vec<usize>,
    events: Vec<(usize, String)>,
}

impl ParseObserver for Recorder {
    fn on_block(&mut self, index: usize, _raw: &RawEvent) {
        self.blocks.push(index);
    }

    fn on_event(&mut self, index: usize, _raw: &RawEvent, event: &Event) {
        self.events.push((index, event.title.clone()));
    }
}

#[test]
fn observer_sees_every_block_and_each_success() {
    let reference = ymd(2024, 1, 1);
    let blocks = vec![
        raw("A. B. лекции. 101. [12.03]", reference),
        raw("no type. [12.03]", reference),
        raw("C. D. лекции. 101. [12.03]", reference),
    ];
    let mut recorder = Recorder::default();

    let result = parse_events_with(blocks, &mut recorder);

    assert!(result.is_err());
    assert_eq!(recorder.blocks, vec![0, 1]);
    assert_eq!(recorder.events, vec![(0, "A".to_string())]);
}

#[test]
fn custom_phrase_table() {
    let parser = EventParser::new(
        TypePhrases::default()
            .with("практика", EventType::Seminar)
            .unwrap(),
    );
    let event = parser
        .parse(&raw("Математика. Сидоров. практика. 214. [03.04]", ymd(2024, 1, 1)))
        .unwrap();

    assert_eq!(event.kind, EventType::Seminar);
    assert_eq!(event.title, "Математика");
    assert_eq!(event.teacher, "Сидоров");
    assert_eq!(event.location, "214");

    let events = parser
        .parse_all(vec![raw("X. Y. лекции. 1. [03.04]", ymd(2024, 1, 1))], &mut NoopObserver)
        .unwrap();
    assert_eq!(events[0].kind, EventType::Lecture);
}

#[test]
fn empty_batch_is_ok() {
    assert_eq!(parse_events(Vec::<RawEvent>::new()), Ok(vec![]));
}
