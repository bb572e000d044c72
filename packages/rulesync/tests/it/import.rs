//! `rulesync import`

use pretty_assertions::assert_eq as pretty_assert_eq;
use rulesync::rules::{self, Rule};
use simple_test_case::test_case;

use crate::{SAMPLE_CLAUDE_MD, Workspace};

fn sample_rules() -> Vec<Rule> {
    vec![
        Rule::builder().name("Rule One").content("Do the thing.").build(),
        Rule::builder()
            .name("Rule Two")
            .content("Do another thing.\nMulti-line.")
            .build(),
    ]
}

#[test]
fn test_import_prints_yaml() {
    let ws = Workspace::new();
    ws.write("CLAUDE.md", SAMPLE_CLAUDE_MD);

    let run = ws.run(&["import", "CLAUDE.md"]);

    pretty_assert_eq!(run.exit_code, 0, "import should exit 0: {run:?}");
    let rules = serde_yaml::from_str::<Vec<Rule>>(&run.stdout).expect("parse yaml output");
    pretty_assert_eq!(rules, sample_rules());
}

#[test]
fn test_import_prints_json() {
    let ws = Workspace::new();
    ws.write("CLAUDE.md", SAMPLE_CLAUDE_MD);

    let run = ws.run(&["import", "CLAUDE.md", "--format", "json"]);

    pretty_assert_eq!(run.exit_code, 0, "import should exit 0: {run:?}");
    let rules = serde_json::from_str::<Vec<Rule>>(&run.stdout).expect("parse json output");
    pretty_assert_eq!(rules, sample_rules());
}

#[test_case("", "[]"; "empty document")]
#[test_case("# Title\n\nJust prose.\n", "[]"; "no rule headings")]
#[test_case("### Lonely\n### Also lonely\n", "[]"; "headings without content")]
#[test]
fn test_import_without_rules(document: &str, expected: &str) {
    let ws = Workspace::new();
    ws.write("CLAUDE.md", document);

    let run = ws.run(&["import", "CLAUDE.md"]);

    pretty_assert_eq!(run.exit_code, 0, "import should exit 0: {run:?}");
    pretty_assert_eq!(run.stdout.trim(), expected);
}

#[test]
fn test_import_missing_file_fails() {
    let ws = Workspace::new();

    let run = ws.run(&["import", "missing.md"]);

    assert!(run.exit_code != 0, "import should fail: {run:?}");
    assert!(
        run.stderr.contains("read CLAUDE.md"),
        "error should name the failed read, got: {}",
        run.stderr
    );
}

#[test]
fn test_import_invalid_utf8_fails() {
    let ws = Workspace::new();
    std::fs::write(ws.path("CLAUDE.md"), b"### One\n\xff\n").expect("write file");

    let run = ws.run(&["import", "CLAUDE.md"]);

    assert!(run.exit_code != 0, "import should fail: {run:?}");
}

#[test]
fn test_import_writes_rule_set() {
    let ws = Workspace::new();
    ws.write("CLAUDE.md", SAMPLE_CLAUDE_MD);

    let run = ws.run(&["import", "CLAUDE.md", "--write", ".rulesync/imported.yaml"]);

    pretty_assert_eq!(run.exit_code, 0, "import should exit 0: {run:?}");
    assert!(
        run.stdout.contains("Imported 2 rules"),
        "import should summarize, got: {}",
        run.stdout
    );
    let saved = rules::load_from(&ws.path(".rulesync/imported.yaml")).expect("load rule set");
    pretty_assert_eq!(saved, sample_rules());
}

#[test]
fn test_import_write_rejects_non_yaml() {
    let ws = Workspace::new();
    ws.write("CLAUDE.md", SAMPLE_CLAUDE_MD);

    let run = ws.run(&["import", "CLAUDE.md", "--write", "rules.yml"]);

    assert!(run.exit_code != 0, "import should fail: {run:?}");
    assert!(
        run.stderr.contains(".yaml extension"),
        "error should name the required extension, got: {}",
        run.stderr
    );
    assert!(!ws.path("rules.yml").exists());
}
