use chrono::NaiveTime;
use minilog::{debugf, errorf, infof, successf, ColorChoice, Level, Logger, MemorySink};
use nu_ansi_term::Color;

fn plain_logger(debug: bool) -> (Logger<MemorySink>, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .debug(debug)
        .color(ColorChoice::Never)
        .sink(sink.clone())
        .build();
    (logger, sink)
}

/// Splits `[HH:MM:SS.mmm] rest` and checks the timestamp parses.
fn split_timestamp(line: &str) -> (&str, &str) {
    assert!(line.starts_with('['), "line should open with a bracket: {line}");
    let (ts, rest) = line[1..].split_at(12);
    assert!(rest.starts_with("] "), "timestamp should be 12 chars: {line}");
    NaiveTime::parse_from_str(ts, "%H:%M:%S%.3f").expect("timestamp should parse");
    (ts, &rest[2..])
}

#[test]
fn test_non_debug_levels_always_emit_one_line() {
    for debug in [false, true] {
        let (log, sink) = plain_logger(debug);

        log.success("a");
        log.error("b");
        log.info("c");

        assert_eq!(sink.lines().len(), 3, "debug = {debug}");
    }
}

#[test]
fn test_debug_emitted_only_when_enabled() {
    let (quiet, quiet_sink) = plain_logger(false);
    quiet.debug("hidden");
    debugf!(quiet, "hidden {}", 42);
    quiet.log(Level::Debug, "hidden");
    quiet.log_with_context(Level::Debug, "Auth", "login", "sess-42", "");
    assert!(quiet_sink.is_empty());

    let (verbose, verbose_sink) = plain_logger(true);
    verbose.debug("shown");
    let lines = verbose_sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[~] [DEBUG] shown"));
}

#[test]
fn test_exact_line_format() {
    let (log, sink) = plain_logger(false);
    log.info("ready");

    let contents = sink.contents();
    assert!(contents.ends_with('\n'));
    assert_eq!(contents.matches('\n').count(), 1);

    let lines = sink.lines();
    let (_, rest) = split_timestamp(&lines[0]);
    assert_eq!(rest, "[!] [INFO] ready");
}

#[test]
fn test_prefix_and_name_per_level() {
    let (log, sink) = plain_logger(true);
    log.success("m");
    log.error("m");
    log.info("m");
    log.debug("m");

    let bodies: Vec<String> = sink
        .lines()
        .iter()
        .map(|l| split_timestamp(l).1.to_string())
        .collect();
    assert_eq!(
        bodies,
        vec![
            "[+] [SUCCESS] m",
            "[-] [ERROR] m",
            "[!] [INFO] m",
            "[~] [DEBUG] m",
        ]
    );
}

#[test]
fn test_context_body_without_extra() {
    let (log, sink) = plain_logger(false);
    log.log_with_context(Level::Info, "Auth", "login", "sess-42", "");

    let lines = sink.lines();
    assert_eq!(
        split_timestamp(&lines[0]).1,
        "[!] [INFO] Auth | login | Session: sess-42"
    );
}

#[test]
fn test_context_body_with_extra() {
    let (log, sink) = plain_logger(false);
    log.log_with_context(Level::Error, "Auth", "login", "sess-42", "bad password");

    let lines = sink.lines();
    assert_eq!(
        split_timestamp(&lines[0]).1,
        "[-] [ERROR] Auth | login | Session: sess-42 | bad password"
    );
}

#[test]
fn test_formatted_variants_interpolate() {
    let (log, sink) = plain_logger(false);
    errorf!(log, "failed: {} ({})", "timeout", 3);
    successf!(log, "{} of {} done", 2, 2);
    infof!(log, "{:>4}|{:.2}", 7, 1.5);

    let bodies: Vec<String> = sink
        .lines()
        .iter()
        .map(|l| split_timestamp(l).1.to_string())
        .collect();
    assert_eq!(bodies[0], "[-] [ERROR] failed: timeout (3)");
    assert_eq!(bodies[1], "[+] [SUCCESS] 2 of 2 done");
    assert_eq!(bodies[2], "[!] [INFO]    7|1.50");
}

#[test]
fn test_repeated_calls_differ_only_in_timestamp() {
    let (log, sink) = plain_logger(false);
    log.success("same");
    log.success("same");

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(split_timestamp(&lines[0]).1, split_timestamp(&lines[1]).1);
}

#[test]
fn test_colored_output_wraps_line() {
    let sink = MemorySink::new();
    let log = Logger::builder()
        .debug(true)
        .color(ColorChoice::Always)
        .sink(sink.clone())
        .build();

    log.success("s");
    log.error("e");
    log.info("i");
    log.debug("d");

    let expected = [Color::Green, Color::Red, Color::Yellow, Color::Cyan];
    for (line, color) in sink.lines().iter().zip(expected) {
        assert!(line.starts_with(&color.prefix().to_string()), "{line:?}");
        assert!(line.ends_with("\x1b[0m"), "{line:?}");
    }
}

#[test]
fn test_never_writes_no_escape_codes() {
    let (log, sink) = plain_logger(true);
    log.success("s");
    log.debug("d");

    assert!(!sink.contents().contains('\x1b'));
}

#[test]
fn test_shared_across_threads() {
    let (log, sink) = plain_logger(false);

    std::thread::scope(|s| {
        for worker in 0..4 {
            let log = &log;
            s.spawn(move || {
                for i in 0..25 {
                    infof!(log, "worker {} line {}", worker, i);
                }
            });
        }
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), 100);
    for line in &lines {
        let (_, rest) = split_timestamp(line);
        assert!(rest.starts_with("[!] [INFO] worker "));
    }
}
