//! Option loading tests for sqlshape

use pretty_assertions::assert_eq;
use sqlshape::{format, FormatOptions, KeywordCase};

#[test]
fn empty_object_gives_defaults() {
    let options: FormatOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FormatOptions::default());
}

#[test]
fn partial_settings() {
    let options: FormatOptions = serde_json::from_str(
        r#"{
            "dialect": "spark",
            "keyword_case": "lower",
            "indent": "    ",
            "params": { "named": { "v": "1" } }
        }"#,
    )
    .unwrap();

    assert_eq!(options.dialect, "spark");
    assert_eq!(options.keyword_case, KeywordCase::Lower);
    assert_eq!(options.line_width, 50);
    assert_eq!(options.params.named.get("v").map(String::as_str), Some("1"));
    assert_eq!(
        format("SELECT $v FROM t", &options).unwrap(),
        "select\n    1\nfrom\n    t"
    );
}

#[test]
fn round_trips_through_json() {
    let options = FormatOptions::default()
        .with_dialect("spark")
        .with_keyword_case(KeywordCase::Upper)
        .with_line_width(80);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""keyword_case":"upper""#));
    let back: FormatOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn unknown_keyword_case_is_rejected() {
    let result: Result<FormatOptions, _> = serde_json::from_str(r#"{ "keyword_case": "title" }"#);
    assert!(result.is_err());
}
