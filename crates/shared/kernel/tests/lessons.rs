use std::io::{self, Write};
use tour_kernel::{Lesson, LessonsConfig, TourConfig, TourError, run_all};
use tour_kernel::domain::{EnumCount, IntoEnumIterator};

const TRANSCRIPT: &str = "\
Heading west
Move to east
Where the sun rises
Mostly harmless
Not a safe place for humans
3 beverages available
coffee
tea
juice
UPC value: 8-85909 51226-3
QRCode: ABCDEFGHIJKLMNOP
tab raw value: '\\t'
lineFeed raw value: '\\n'
carriageReturn raw value: '\\r'
earth raw value: 3
west raw value: west
Planet at position 7: uranus
No planet at position 11
(5 + 4) * 2 = 18
";

fn render(lesson: Lesson) -> String {
    let mut out = Vec::new();
    lesson.run(&mut out).expect("lesson should write to a Vec");
    String::from_utf8(out).expect("lesson output is utf-8")
}

#[test]
fn full_tour_matches_transcript() {
    let mut out = Vec::new();
    let ran = run_all(&mut out, &TourConfig::default()).expect("tour should run");

    assert_eq!(ran, Lesson::COUNT);
    assert_eq!(String::from_utf8(out).unwrap(), TRANSCRIPT);
}

#[test]
fn basics_reassigns_the_direction() {
    assert_eq!(render(Lesson::Basics), "Heading west\nMove to east\n");
}

#[test]
fn iteration_counts_then_lists() {
    assert_eq!(render(Lesson::Iteration), "3 beverages available\ncoffee\ntea\njuice\n");
}

#[test]
fn associated_values_use_message_templates() {
    assert_eq!(
        render(Lesson::AssociatedValues),
        "UPC value: 8-85909 51226-3\nQRCode: ABCDEFGHIJKLMNOP\n"
    );
}

#[test]
fn lookup_distinguishes_present_from_absent() {
    let output = render(Lesson::RawValueLookup);
    assert!(output.contains("Planet at position 7: uranus"));
    assert!(output.contains("No planet at position 11"));
}

#[test]
fn skipped_lessons_do_not_run() {
    let config = TourConfig {
        lessons: LessonsConfig { skip: vec![Lesson::Basics, Lesson::Recursion] },
        ..TourConfig::default()
    };

    let mut out = Vec::new();
    let ran = run_all(&mut out, &config).expect("tour should run");
    let output = String::from_utf8(out).unwrap();

    assert_eq!(ran, Lesson::COUNT - 2);
    assert!(!output.contains("Move to east"));
    assert!(!output.contains("= 18"));
    assert!(output.starts_with("Where the sun rises\n"));
}

#[test]
fn lessons_run_in_declaration_order() {
    let names: Vec<String> = Lesson::iter().map(|lesson| lesson.to_string()).collect();
    assert_eq!(
        names,
        [
            "basics",
            "matching",
            "iteration",
            "associated-values",
            "raw-values",
            "implicit-raw-values",
            "raw-value-lookup",
            "recursion",
        ]
    );
}

struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_surface_with_lesson_context() {
    let err = run_all(&mut ClosedSink, &TourConfig::default()).expect_err("sink is closed");

    assert!(matches!(err, TourError::Io { .. }));
    assert_eq!(err.to_string(), "Output error (lesson basics): sink closed");
}
