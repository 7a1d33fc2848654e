//! End-to-end tests of the load, render and write pipeline.

mod common;

use std::fs;

use common::SnippetFixture;
use snippet_docs::cli::output::EventLog;
use snippet_docs::discovery::SkipReason;
use snippet_docs::{generate, GeneratorConfig, Rejection, SnippetError};

fn table_titles(readme: &str) -> Vec<String> {
    readme
        .lines()
        .skip_while(|line| !line.starts_with("|-------|"))
        .skip(1)
        .take_while(|line| line.starts_with("| "))
        .map(|line| line.split(" | ").next().unwrap().trim_start_matches("| ").to_string())
        .collect()
}

#[test]
fn index_rows_are_sorted_by_title_bytes() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("beta", "b()").write_to(dir.path(), "1.codesnippet");
    SnippetFixture::new("Alpha", "a()").write_to(dir.path(), "2.codesnippet");
    SnippetFixture::new("Zulu", "z()").write_to(dir.path(), "3.codesnippet");
    SnippetFixture::new("alpha", "a()").write_to(dir.path(), "4.codesnippet");

    let report = generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());
    assert!(report.is_clean());
    assert_eq!(report.documented, 4);

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert_eq!(table_titles(&readme), vec!["Alpha", "Zulu", "alpha", "beta"]);

    let snippets = fs::read_to_string(dir.path().join("SNIPPETS.md")).unwrap();
    let headings: Vec<_> = snippets
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .collect();
    assert_eq!(headings, vec!["Alpha", "Zulu", "alpha", "beta"]);
}

#[test]
fn placeholder_and_empty_snippets_never_reach_output() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("Real", "real()").write_to(dir.path(), "real.codesnippet");
    SnippetFixture::new("My Code Snippet", "template()").write_to(dir.path(), "template.codesnippet");
    SnippetFixture::new("Blank", "  \n\t ").write_to(dir.path(), "blank.codesnippet");
    SnippetFixture::new("", "untitled()").write_to(dir.path(), "untitled.codesnippet");

    let report = generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());
    assert_eq!(report.discovered, 4);
    assert_eq!(report.documented, 1);

    let reasons: Vec<_> = report
        .skipped
        .iter()
        .map(|s| match &s.reason {
            SkipReason::Rejected(rejection) => (s.file_name.as_str(), *rejection),
            other => panic!("unexpected skip reason: {other:?}"),
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("blank.codesnippet", Rejection::EmptyContents),
            ("template.codesnippet", Rejection::PlaceholderTitle),
            ("untitled.codesnippet", Rejection::EmptyTitle),
        ]
    );

    for name in ["README.md", "SNIPPETS.md"] {
        let doc = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(doc.contains("Real"));
        assert!(!doc.contains("My Code Snippet"));
        assert!(!doc.contains("Blank"));
        assert!(!doc.contains("untitled.codesnippet"));
    }
}

#[test]
fn contents_round_trip_into_detail_fence() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "\n    func greet() {\n\t\tprint(\"a < b && c\")\n    }\n\n";
    SnippetFixture::new("Greeter", contents)
        .shortcut("greet")
        .summary("Says hello")
        .write_to(dir.path(), "greeter.codesnippet");

    generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());

    let detail = fs::read_to_string(dir.path().join("SNIPPETS.md")).unwrap();
    let expected_block = format!("```swift\n{contents}\n```\n");
    assert!(detail.contains(&expected_block));
    assert!(detail.contains("**Completion Shortcut:** `greet`  \n"));
    assert!(detail.contains("**Description:** Says hello  \n"));
    assert!(detail.contains("**File:** `greeter.codesnippet`  \n"));
}

#[test]
fn shortcut_column_uses_dash_or_inline_code() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("With", "w()").shortcut("sc").write_to(dir.path(), "with.codesnippet");
    SnippetFixture::new("Without", "wo()").write_to(dir.path(), "without.codesnippet");

    generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("| With | - | `sc` | Swift | [Link](./with.codesnippet) |\n"));
    assert!(readme.contains("| Without | - | - | Swift | [Link](./without.codesnippet) |\n"));
}

#[test]
fn zero_valid_snippets_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("My Code Snippet", "x").write_to(dir.path(), "template.codesnippet");
    fs::write(dir.path().join("README.md"), "hand written").unwrap();

    let mut log = EventLog::default();
    let report = generate(&GeneratorConfig::in_dir(dir.path()), &mut log);

    assert!(report.is_clean());
    assert!(report.written.is_empty());
    assert_eq!(report.exit_code(true), 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "hand written"
    );
    assert!(!dir.path().join("SNIPPETS.md").exists());
    assert_eq!(log.lines().last().unwrap(), "nothing to generate");
}

#[test]
fn malformed_file_is_skipped_and_valid_file_documented() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("Survivor", "ok()").write_to(dir.path(), "good.codesnippet");
    fs::write(
        dir.path().join("bad.codesnippet"),
        "<plist><dict><key>IDECodeSnippetTitle</key><string>Broken</dict></plist>",
    )
    .unwrap();

    let mut log = EventLog::default();
    let report = generate(&GeneratorConfig::in_dir(dir.path()), &mut log);

    assert!(report.is_clean());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file_name, "bad.codesnippet");
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::Malformed(SnippetError::MalformedSource { .. })
    ));

    for name in ["README.md", "SNIPPETS.md"] {
        let doc = fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(doc.contains("Survivor"));
        assert!(!doc.contains("Broken"));
    }
    assert_eq!(
        log.lines(),
        vec![
            "discovered 2",
            "skipped bad.codesnippet",
            "loaded 1",
            "generating",
            "wrote README.md",
            "wrote SNIPPETS.md",
            "finished 2/0",
        ]
    );
}

#[test]
fn separate_output_directory_receives_documents() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    SnippetFixture::new("Moved", "m()").write_to(input.path(), "m.codesnippet");

    let config = GeneratorConfig::in_dir(input.path()).with_output_dir(output.path());
    let report = generate(&config, &mut EventLog::default());

    assert_eq!(
        report.written,
        vec![output.path().join("README.md"), output.path().join("SNIPPETS.md")]
    );
    assert!(!input.path().join("README.md").exists());
}

#[test]
fn failed_index_write_still_writes_detail() {
    let dir = tempfile::tempdir().unwrap();
    SnippetFixture::new("Kept", "k()").write_to(dir.path(), "k.codesnippet");
    // A directory where the index should go makes the rename fail.
    fs::create_dir(dir.path().join("README.md")).unwrap();
    fs::write(dir.path().join("README.md").join("occupant"), "x").unwrap();

    let report = generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());

    assert_eq!(report.write_failures.len(), 1);
    assert!(matches!(
        &report.write_failures[0],
        SnippetError::WriteFailed { target, .. } if target.ends_with("README.md")
    ));
    assert_eq!(report.written, vec![dir.path().join("SNIPPETS.md")]);
    assert!(fs::read_to_string(dir.path().join("SNIPPETS.md"))
        .unwrap()
        .contains("## Kept"));
    assert_eq!(report.exit_code(false), 0);
    assert_eq!(report.exit_code(true), 1);
}

#[test]
fn windows_line_endings_do_not_reach_detail_document() {
    let dir = tempfile::tempdir().unwrap();
    let plist = SnippetFixture::new("Crlf", "first\nsecond\n")
        .to_plist()
        .replace('\n', "\r\n");
    fs::write(dir.path().join("crlf.codesnippet"), plist).unwrap();

    generate(&GeneratorConfig::in_dir(dir.path()), &mut EventLog::default());

    let detail = fs::read_to_string(dir.path().join("SNIPPETS.md")).unwrap();
    assert!(detail.contains("```swift\nfirst\nsecond\n\n```\n"));
    assert!(!detail.contains('\r'));
}
