//! `rulesync validate`

use pretty_assertions::assert_eq as pretty_assert_eq;

use crate::{SAMPLE_RULE_SET, Workspace};

#[test]
fn test_validate_specific_file() {
    let ws = Workspace::new();
    ws.write("rules.yaml", SAMPLE_RULE_SET);

    let run = ws.run(&["validate", "rules.yaml"]);

    pretty_assert_eq!(run.exit_code, 0, "validate should exit 0: {run:?}");
    assert!(
        run.stdout.contains("Rule One") && run.stdout.contains("Rule Two"),
        "validate should list rule names, got: {}",
        run.stdout
    );
    assert!(
        run.stdout.contains("Validated 2 rules"),
        "validate should summarize, got: {}",
        run.stdout
    );
}

#[test]
fn test_validate_discovers_rule_sets() {
    let ws = Workspace::new();
    ws.write(".rulesync.yaml", SAMPLE_RULE_SET);
    ws.write(
        ".rulesync/team/style.yaml",
        "version: 1\nrules:\n  - name: Team Style\n    content: Use tabs.\n",
    );

    let run = ws.run(&["validate"]);

    pretty_assert_eq!(run.exit_code, 0, "validate should exit 0: {run:?}");
    assert!(
        run.stdout.contains(".rulesync.yaml") && run.stdout.contains("style.yaml"),
        "validate should report each rule set, got: {}",
        run.stdout
    );
    assert!(
        run.stdout.contains("Validated 3 rules"),
        "validate should count every rule, got: {}",
        run.stdout
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_validate_includes_user_rule_set() {
    let ws = Workspace::new();
    ws.write(
        "config/rulesync/rules.yaml",
        "version: 1\nrules:\n  - name: Personal\n    content: Be brief.\n",
    );

    let run = ws.run(&["validate"]);

    pretty_assert_eq!(run.exit_code, 0, "validate should exit 0: {run:?}");
    assert!(
        run.stdout.contains("Personal"),
        "validate should include user rules, got: {}",
        run.stdout
    );
}

#[test]
fn test_validate_nonexistent_file_fails() {
    let ws = Workspace::new();

    let run = ws.run(&["validate", "nonexistent.yaml"]);

    assert!(run.exit_code != 0, "validate should fail: {run:?}");
    assert!(
        run.stderr.contains("does not exist"),
        "error should say the rule set is missing, got: {}",
        run.stderr
    );
}

#[test]
fn test_validate_non_yaml_file_fails() {
    let ws = Workspace::new();
    ws.write("rules.yml", "version: 1\nrules: []\n");

    let run = ws.run(&["validate", "rules.yml"]);

    assert!(run.exit_code != 0, "validate should fail: {run:?}");
}

#[test]
fn test_validate_reports_problems() {
    let ws = Workspace::new();
    ws.write(
        "rules.yaml",
        "version: 1\nrules:\n  - name: Fine\n    content: ok\n  - name: Broken\n    content: \"intro\\n## Not a rule\"\n",
    );

    let run = ws.run(&["validate", "rules.yaml"]);

    pretty_assert_eq!(run.exit_code, 1, "validate should fail: {run:?}");
    assert!(
        run.stdout.contains("rule #2 [Broken]"),
        "validate should identify the rule, got: {}",
        run.stdout
    );
    assert!(
        run.stdout.contains("would be read as a heading"),
        "validate should explain the problem, got: {}",
        run.stdout
    );
}

#[test]
fn test_validate_invalid_version_fails() {
    let ws = Workspace::new();
    ws.write("rules.yaml", "version: 3\nrules: []\n");

    let run = ws.run(&["validate", "rules.yaml"]);

    assert!(run.exit_code != 0, "validate should fail: {run:?}");
}
