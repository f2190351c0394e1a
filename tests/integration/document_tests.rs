//! End-to-end document rendering and file conversion

use tempfile::TempDir;

use sql2asciidoc::render::{TABLE_SEP, TOP_COMMENT};
use sql2asciidoc::{
    convert, render_document, resolve_output_path, ConvertOptions, OutputMode, RenderOptions,
    Sql2DocError,
};

use crate::common::{create_sql_file, fixture_path, load_fixture};

fn with_views() -> RenderOptions {
    RenderOptions::default().with_title_chars("=~").unwrap()
}

#[test]
fn test_tables_only_document() {
    let doc = render_document(&load_fixture("hr_schema.sql"), &RenderOptions::default());

    assert!(doc.starts_with(TOP_COMMENT));
    assert!(doc.contains("\nEMPLOYEES\n~~~~~~~~~\n"));
    assert!(doc.contains("\nHR.DEPARTMENTS\n~~~~~~~~~~~~~~\n"));
    assert!(doc.contains("|LOCATION  |VARCHAR2(100)|\n\n*Default: `HQ'*\n"));
    assert!(doc.contains("|EMPLOYEE_ID  |NUMBER(6)|Employee's unique id\n"));
    assert!(!doc.contains("\nTables\n"));
    assert!(!doc.contains("V_PAYROLL"));
    assert_eq!(doc.matches(TABLE_SEP).count(), 4);
}

#[test]
fn test_document_with_views() {
    let sql = load_fixture("hr_schema.sql");
    let doc = render_document(&sql, &with_views());

    assert!(doc.contains("\n\nTables\n======\n"));
    assert!(doc.contains("\n\nViews\n=====\n"));
    assert!(doc.contains("\nV_PAYROLL\n~~~~~~~~~\n"));
    assert!(doc.contains("|salary  |+++NVL(e.salary, 0)+++|Salary or zero\n"));
    assert!(doc.contains("|tag  |+++`a,b'+++|\n"));
    assert!(doc.contains("|Table/View |Alias\n"));
}

#[test]
fn test_document_links_titles() {
    let doc = render_document(&load_fixture("hr_schema.sql"), &with_views());

    // Source references become links to the table sections
    assert!(doc.contains("|<<_employees,EMPLOYEES>> |e\n"));
    assert!(doc.contains("<<_hr_departments,HR.DEPARTMENTS>>"));
    // Headings themselves stay plain
    assert!(doc.contains("\nEMPLOYEES\n~~~~~~~~~\n"));
}

#[test]
fn test_document_union_view_inclusion() {
    let sql = load_fixture("hr_schema.sql");
    let doc = render_document(&sql, &with_views());

    assert!(!doc.contains("INCLUSION_"));
    assert!(doc.contains(
        "[source,sql]\n------------------------------------------------------------\nCREATE VIEW V_ALL_PEOPLE AS\nSELECT employee_id id FROM employees\nUNION ALL\nSELECT department_id id FROM hr.departments;\n"
    ));
}

#[test]
fn test_document_wildcard_view_has_no_column_table() {
    let doc = render_document(
        "CREATE VIEW v_star AS SELECT * FROM t;",
        &with_views(),
    );
    assert!(doc.contains("\nv_star\n~~~~~~\n"));
    assert!(!doc.contains(".Columns of the view"));
    assert!(doc.contains(".Sources of the view"));
}

#[test]
fn test_comments_mode() {
    let options = RenderOptions {
        mode: OutputMode::Comments,
        ..RenderOptions::default()
    };
    let out = render_document(&load_fixture("hr_schema.sql"), &options);

    assert!(out.contains("------ TABLE: EMPLOYEES ------"));
    assert!(out.contains("comment on column EMPLOYEES.EMPLOYEE_ID\n  is 'Employee''s unique id';"));
    assert!(out.contains("------ VIEW: V_PAYROLL ------"));
    assert!(!out.contains("comment on column V_EVERYTHING."));
}

#[test]
fn test_title_chars_validation() {
    let one = RenderOptions::default().with_title_chars("-").unwrap();
    assert_eq!(one.title_char, '-');
    assert_eq!(one.caption_char, None);

    let two = RenderOptions::default().with_title_chars("=^+").unwrap();
    assert_eq!(two.caption_char, Some('='));
    assert_eq!(two.title_char, '^');

    let err = RenderOptions::default().with_title_chars("  ").unwrap_err();
    assert!(matches!(err, Sql2DocError::InvalidTitleChars { .. }));
}

#[test]
fn test_resolve_output_path() {
    use std::path::{Path, PathBuf};

    let input = Path::new("/data/schema.sql");
    assert_eq!(
        resolve_output_path(Some(input), None),
        Some(PathBuf::from("schema.asciidoc"))
    );
    assert_eq!(resolve_output_path(Some(input), Some(Path::new("-"))), None);
    assert_eq!(resolve_output_path(None, None), None);
    assert_eq!(
        resolve_output_path(None, Some(Path::new("out.adoc"))),
        Some(PathBuf::from("out.adoc"))
    );
    assert_eq!(
        resolve_output_path(Some(Path::new("dumps/hr.v2.sql")), None),
        Some(PathBuf::from("hr.v2.asciidoc"))
    );
}

#[cfg(unix)]
#[test]
fn test_resolve_output_path_non_utf8_stem() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::path::{Path, PathBuf};

    // "sch\xe9ma.sql" in Latin-1
    let input = Path::new(OsStr::from_bytes(b"sch\xe9ma.sql"));
    let expected = PathBuf::from(OsStr::from_bytes(b"sch\xe9ma.asciidoc"));
    assert_eq!(resolve_output_path(Some(input), None), Some(expected));
}

#[test]
fn test_convert_writes_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("hr.asciidoc");

    let written = convert(ConvertOptions {
        input_path: Some(fixture_path("hr_schema.sql")),
        output_path: Some(output.clone()),
        render: with_views(),
    })
    .unwrap();

    assert_eq!(written, Some(output.clone()));
    let doc = std::fs::read_to_string(&output).unwrap();
    // The "Tables" caption is a title, so the banner mention gets linked too
    assert!(doc.contains("// <<_tables,Tables>> parsed from SQL"));
    assert!(doc.contains("V_ALL_PEOPLE"));
}

#[test]
fn test_convert_missing_input() {
    let dir = TempDir::new().unwrap();
    let result = convert(ConvertOptions {
        input_path: Some(dir.path().join("missing.sql")),
        output_path: Some(dir.path().join("out.asciidoc")),
        render: RenderOptions::default(),
    });

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Sql2DocError>(),
        Some(Sql2DocError::InputReadError { .. })
    ));
}

#[test]
fn test_convert_temp_sql_file() {
    let file = create_sql_file("CREATE TABLE t (id NUMBER NOT NULL);\nCOMMENT ON TABLE t IS 'Tiny';");
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("t.asciidoc");

    convert(ConvertOptions {
        input_path: Some(file.path().to_path_buf()),
        output_path: Some(output.clone()),
        render: RenderOptions::default(),
    })
    .unwrap();

    let doc = std::fs::read_to_string(&output).unwrap();
    assert!(doc.contains("\nt\n~\n\nTiny\n"));
    assert!(doc.contains("|id  |NUMBER|\n"));
}
