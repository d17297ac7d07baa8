//! End-to-end runs of `showdown compare` through the library entry point.

use serde_json::Value;
use serial_test::serial;
use showdown_cli::run;

fn compare(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["showdown", "compare"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn verdict_line(stdout: &str) -> &str {
    stdout.lines().last().unwrap_or_default()
}

#[test]
#[serial]
fn quads_beat_lower_quads() {
    let (code, out, err) = compare(&["AH AD AC AS 2H", "KH KD KC KS 2H"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(verdict_line(&out), "Hand 1 is stronger");
    assert!(out.contains("Hand 1: AH AD AC AS 2H (Four of a Kind)"));
}

#[test]
#[serial]
fn two_pair_compares_higher_pair_first() {
    let (code, out, _) = compare(&["2H 2D 3H 3D 4H", "2S 2C 5H 5D 4S"]);
    assert_eq!(code, 0);
    assert_eq!(verdict_line(&out), "Hand 2 is stronger");
}

#[test]
#[serial]
fn high_cards_always_tie() {
    let (code, out, _) = compare(&["2H 3D 5S 9C KD", "2C 3H 4S 8C AH"]);
    assert_eq!(code, 0);
    assert_eq!(verdict_line(&out), "It's a tie!");
}

#[test]
#[serial]
fn straight_flush_with_higher_top_card_wins() {
    let (code, out, _) = compare(&["2H 3H 4H 5H 6H", "3S 4S 5S 6S 7S"]);
    assert_eq!(code, 0);
    assert_eq!(verdict_line(&out), "Hand 2 is stronger");
}

#[test]
#[serial]
fn lowercase_input_is_accepted() {
    let (code, out, _) = compare(&["ah ad ac as 2h", "kh kd kc ks 2h"]);
    assert_eq!(code, 0);
    assert!(out.contains("AH AD AC AS 2H"));
}

#[test]
#[serial]
fn json_report_has_both_hands_and_verdict() {
    let (code, out, _) = compare(&["--format", "json", "9H 9D 2S 3C 4D", "8H 8D AS KC QD"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json["verdict"], "first_wins");
    assert_eq!(json["message"], "Hand 1 is stronger");
    assert_eq!(json["hand1"]["category"], "one_pair");
    assert_eq!(json["hand1"]["category_code"], 2);
    assert_eq!(json["hand2"]["cards"], "8H 8D AS KC QD");
    assert_eq!(json["hand2"]["category_name"], "One Pair");
}

#[test]
#[serial]
fn invalid_card_reports_token_on_stderr() {
    let (code, out, err) = compare(&["2H 4D 6S 8C 1D", "2C 3H 4S 8C AH"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Error: Invalid card: 1D"));
    assert!(err.contains("'2H 4D 6S 8C AD'"));
}

#[test]
#[serial]
fn duplicates_allowed_unless_strict() {
    let (code, _, _) = compare(&["2H 4D 6S 8C TD", "2H 4D 6S 8C TD"]);
    assert_eq!(code, 0);

    let (code, _, err) = compare(&["--strict", "2H 4D 6S 8C TD", "2H 4D 6S 8C TD"]);
    assert_eq!(code, 2);
    assert!(err.contains("appears more than once"));
}

#[test]
#[serial]
fn json_shorthand_matches_format_flag() {
    let (_, long, _) = compare(&["--format", "json", "AH AD AC AS 2H", "KH KD KC KS 2H"]);
    let (code, short, _) = compare(&["--json", "AH AD AC AS 2H", "KH KD KC KS 2H"]);
    assert_eq!(code, 0);
    assert_eq!(long, short);

    let (code, _, _) = compare(&["--json", "--format", "text", "AH AD AC AS 2H", "KH KD KC KS 2H"]);
    assert_eq!(code, 2);
}
