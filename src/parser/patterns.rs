//! Statement-level recognizers
//!
//! Regexes only frame whole statements and pull out their raw parts. Anything
//! that needs nesting awareness (the SELECT list) is handed to a scanner.
//!
//! All patterns are case-insensitive and let `.` cross newlines.

use std::sync::LazyLock;

use regex::Regex;

/// Optionally schema-qualified, optionally double-quoted object name.
/// Captured as `tablename`, exactly as written.
const QUALIFIED_NAME: &str = r#"(?P<tablename>(?:[\w$]+\.|"[\w$]+"\.)?(?:[\w$]+|"[\w$]+"))"#;

/// `CREATE TABLE name ( columns ) [tablespace ...];`
pub static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?si)\bCREATE\s+TABLE\s+{QUALIFIED_NAME}\s*\((?P<columns>.*?)\)\s*(?:;|tablespace .*?;)"
    ))
    .expect("Invalid CREATE TABLE regex")
});

/// One column definition inside a CREATE TABLE body, terminated by `,` or end of body.
///
/// Type arguments are numeric only (`NUMBER(10,2)`, `VARCHAR2(100 CHAR)`), so
/// out-of-line constraints such as `PRIMARY KEY (id)` never read as columns.
pub static COLUMN_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?si)(?P<colname>[\w$]+|"[\w$ ]+")\s+"#,
        r#"(?P<coltype>(?:\w+|"[^"]+")(?:\s*\(\s*\d+(?:\s*,\s*\d+)?(?:\s+(?:CHAR|BYTE))?\s*\))?)\s*"#,
        r"(?:\bdefault\s+(?P<default>\S+))?\s*",
        r"(?P<primarykey>\bprimary\s+key)?\s*",
        r"(?P<notnull>\bnot\s+null)?\s*",
        r"(?:\benable)?\s*",
        r"(?:\z|,)",
    ))
    .expect("Invalid column definition regex")
});

/// `CREATE [OR REPLACE] VIEW name [(aliases)] AS SELECT cols FROM sources [UNION ...] <boundary>`
pub static CREATE_VIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?si)\bCREATE\s+(?:OR\s+REPLACE\s+)?VIEW\s(?P<tablename>[\w$]*\.?[\w$]+)\b",
        r"\s*(?:\((?P<aliases>[\s\w$,]*)\))?",
        r"\s*\bAS\s+SELECT\s+",
        r"(?P<columns>.*?)",
        r"\bFROM\s+(?P<sources>.*?)(?P<isunion>\bUNION\b(?:\s+ALL\b)?.*?)?",
        r"(?:\bWHERE\b|\bORDER\s+BY\b|\bGROUP\s+BY\b|;)",
    ))
    .expect("Invalid CREATE VIEW regex")
});

/// `COMMENT ON TABLE name IS '...';`
pub static TABLE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?si)\bCOMMENT\s+ON\s+TABLE\s+{QUALIFIED_NAME}\s+is\s+'(?P<comment>.*?)'\s*;"
    ))
    .expect("Invalid table comment regex")
});

/// `COMMENT ON COLUMN name.column IS '...';`
pub static COLUMN_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?si)\bCOMMENT\s+ON\s+COLUMN\s+{QUALIFIED_NAME}\.(?P<colname>[\w$]+)\s+is\s+'(?P<comment>.*?)'\s*;"
    ))
    .expect("Invalid column comment regex")
});

/// `GRANT|REVOKE permission ON name TO schema;`
pub static PRIVILEGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?si)\b(?P<action>GRANT|REVOKE)\s+(?P<permission>SELECT|INSERT|UPDATE|DELETE)\s+ON\s+{QUALIFIED_NAME}\s+TO\s+(?P<schema>[\w&$]+)\s*;"
    ))
    .expect("Invalid privilege regex")
});

/// Block comments, non-greedy across lines
pub static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment regex"));
