//! SELECT-list splitting tests

use sql2asciidoc::parser::{split_projection, ProjectionItem};

fn pairs(text: &str) -> Vec<(String, String)> {
    split_projection(text)
        .into_iter()
        .map(|ProjectionItem { alias, expression }| (alias, expression))
        .collect()
}

fn pair(alias: &str, expression: &str) -> (String, String) {
    (alias.to_string(), expression.to_string())
}

#[test]
fn test_two_bare_columns() {
    assert_eq!(pairs("a, b"), vec![pair("a", "a"), pair("b", "b")]);
}

#[test]
fn test_inferred_alias() {
    assert_eq!(pairs("a x, b"), vec![pair("x", "a"), pair("b", "b")]);
}

#[test]
fn test_nested_call_is_one_column() {
    assert_eq!(pairs("NVL(a,b) c"), vec![pair("c", "NVL(a,b)")]);
}

#[test]
fn test_string_literal_is_one_column() {
    assert_eq!(pairs("'a,b' c"), vec![pair("c", "'a,b'")]);
}

#[test]
fn test_qualified_without_alias() {
    assert_eq!(pairs("t.col"), vec![pair("col", "t.col")]);
    assert_eq!(pairs("s.t.col"), vec![pair("col", "s.t.col")]);
}

#[test]
fn test_deeply_nested_expression() {
    let items = pairs("DECODE(NVL(a, 0), 1, SUBSTR(b, 1, 3), 'x,y') code, c");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], pair("code", "DECODE(NVL(a, 0), 1, SUBSTR(b, 1, 3), 'x,y')"));
    assert_eq!(items[1], pair("c", "c"));
}

#[test]
fn test_subselect_in_list() {
    let items = pairs("(SELECT MAX(x) FROM t2 WHERE t2.id = t1.id) max_x, t1.id");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].0, "max_x");
    assert_eq!(items[1], pair("id", "t1.id"));
}

#[test]
fn test_as_keyword_dropped_from_alias() {
    assert_eq!(pairs("a AS x"), vec![pair("x", "a")]);
    assert_eq!(pairs("SUM(b) as total"), vec![pair("total", "SUM(b)")]);
}

#[test]
fn test_newline_starts_alias() {
    assert_eq!(pairs("amount\nnet_amount"), vec![pair("net_amount", "amount")]);
}

#[test]
fn test_tab_does_not_start_alias() {
    assert_eq!(pairs("a\tb"), vec![pair("a\tb", "a\tb")]);
}

#[test]
fn test_unterminated_string_swallows_rest() {
    let items = pairs("'abc, d, e");
    assert_eq!(items.len(), 1);
}

#[test]
fn test_empty_projection() {
    assert_eq!(pairs(""), vec![pair("", "")]);
}
