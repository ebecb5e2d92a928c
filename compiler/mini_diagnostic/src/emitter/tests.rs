use super::*;
use pretty_assertions::assert_eq;

#[test]
fn escape_json_plain() {
    assert_eq!(escape_json("expecting factor"), "expecting factor");
}

#[test]
fn escape_json_specials() {
    assert_eq!(escape_json("\"q\""), "\\\"q\\\"");
    assert_eq!(escape_json("a\\b"), "a\\\\b");
    assert_eq!(escape_json("\n"), "\\n");
    assert_eq!(escape_json("\r\t"), "\\r\\t");
    assert_eq!(escape_json("\u{1}"), "\\u0001");
}
