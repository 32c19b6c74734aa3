//! Static NDJSON corpora used across harnesses.

/// One example value per known suffix, keyed `prop_<suffix>`.
pub const CORPUS_SUFFIXED: &[&str] = &[
    r#"{"prop_str":"some string","prop_bool":true,"prop_real":1.23,"prop_int":1}"#,
    r#"{"prop_date":"2024-01-15T10:00:00.000Z","prop_obj":{}}"#,
    r#"{"prop_strs":["a"],"prop_bools":[false],"prop_reals":[1.23],"prop_ints":[1]}"#,
    r#"{"prop_dates":["2024-01-15T10:00:00.000Z"],"prop_objs":[{}]}"#,
];

/// Untyped property bags as a customer would send them.
pub const CORPUS_UNTYPED: &[&str] = &[
    r#"{"plan":"pro","seats":3,"trial":false,"mrr":99.5}"#,
    r#"{"tags":["beta","early"],"scores":[1,2,3],"flags":[true,false]}"#,
    r#"{"address":{"city":"Lisbon"},"orders":[{"id":1},{"id":2}]}"#,
    r#"{"empty":[],"mixed":[1,"a"],"nothing":null}"#,
];

/// Keys exercising every camel-case separator.
pub const CORPUS_CAMEL: &[&str] = &[
    r#"{"string_str":"some string","moreStrings":["more","strings"],"last_string_str":"last string"}"#,
    r#"{"hyphenated-bool":true,"dotted.real":4.5,"spaced real":1.23}"#,
];

/// A mixed event stream: track, identify, delete, and one malformed line.
pub const CORPUS_EVENTS: &[&str] = &[
    r#"{"type":"track","event":"Order Completed","userId":"u-1","properties":{"total":42.5,"items":["sku-1","sku-2"]}}"#,
    r#"{"type":"identify","userId":"u-1","traits":{"email":"ada@example.com","name":"Ada","plan-tier":"pro"}}"#,
    r#"{"type":"delete","userId":"u-1"}"#,
    r#"{"type":"identify","traits":{}}"#,
];

/// Join a corpus into NDJSON text.
pub fn ndjson(corpus: &[&str]) -> String {
    let mut out = corpus.join("\n");
    out.push('\n');
    out
}
