//! Rule data types and rule-set loading operations.

use std::ffi::OsStr;
use std::fs::{self, read_to_string};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::{
    SectionExt,
    eyre::{Context, Result, bail},
};
use directories::ProjectDirs;
use tap::{Pipe, Tap};
use walkdir::WalkDir;

pub use schema::*;

mod schema;

/// Name of the rule-set file in the project root.
pub const PROJECT_RULE_SET: &str = ".rulesync.yaml";

/// Name of the rule-set directory in the project root.
pub const PROJECT_RULE_SET_DIR: &str = ".rulesync";

/// Name of the rule-set file in the user config directory.
pub const USER_RULE_SET: &str = "rules.yaml";

/// Get the project directories for the application.
#[tracing::instrument]
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "rulesync", "rulesync")
}

/// Load all rules from all rule sets.
///
/// Loading order (all additive):
/// 1. User-level rules from `ProjectDirs::config_dir()/rules.yaml` if it exists
/// 2. `.rulesync.yaml` if it exists
/// 3. `.rulesync/` directory walked recursively, loading all `*.yaml` files
#[tracing::instrument]
pub fn load_all() -> Result<Vec<Rule>> {
    load_all_attributed()?
        .into_iter()
        .flat_map(|(_, rules)| rules)
        .collect::<Vec<_>>()
        .pipe(Ok)
}

/// Load all rules from all rule sets, returning each set of rules with the
/// path to the file that contained them.
///
/// Loading order matches [`load_all`].
#[tracing::instrument]
pub fn load_all_attributed() -> Result<Vec<(PathBuf, Vec<Rule>)>> {
    let mut rules = vec![];

    if let Some(dirs) = project_dirs() {
        let user_config = dirs.config_dir().join(USER_RULE_SET);
        let user_rules = load_from(&user_config)
            .with_context(|| format!("load rules from user config: {user_config:?}"))?;
        rules.push((user_config, user_rules));
    }

    let project_root_config = PathBuf::from(PROJECT_RULE_SET);
    let project_root_rules = load_from(&project_root_config)
        .with_context(|| format!("load rules from project root: {project_root_config:?}"))?;
    rules.push((project_root_config, project_root_rules));

    let root = Path::new(PROJECT_RULE_SET_DIR);
    if root.is_dir() {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::warn!(?error, ?root, "walking directory");
                    continue;
                }
            };

            if entry.file_type().is_file() {
                let config = entry.path().to_path_buf();
                let config_rules = load_from(&config)
                    .with_context(|| format!("load rules from file: {config:?}"))?;
                rules.push((config, config_rules));
            }
        }
    }

    Ok(rules)
}

/// Load rules from a single rule-set file.
///
/// Files without a `.yaml` extension and files that don't exist both yield
/// no rules.
#[tracing::instrument]
pub fn load_from(path: &Path) -> Result<Vec<Rule>> {
    if !is_rule_set_path(path) {
        tracing::debug!("skipping non-yaml file");
        return Ok(vec![]);
    }

    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e).context(format!("read rule set: {path:?}")),
    };

    serde_yaml::from_str::<RuleSet>(&content)
        .with_context(|| format!("parse rule set: {path:?}"))
        .with_context(|| content.header("File content:"))
        .tap(|set| tracing::debug!(?set, "parsed rule set"))
        .map(|set| set.rules)
}

/// Load rules from a rule-set file named by the user.
///
/// Unlike [`load_from`], the file must exist and have a `.yaml` extension:
/// a path the user typed is never silently read as an empty rule set.
#[tracing::instrument]
pub fn load_explicit(path: &Path) -> Result<Vec<Rule>> {
    if !is_rule_set_path(path) {
        bail!("rule set must have a .yaml extension: {path:?}");
    }
    if !path.is_file() {
        bail!("rule set does not exist: {path:?}");
    }

    load_from(path)
}

/// Write rules to a rule-set file, creating parent directories as needed.
///
/// The path must have a `.yaml` extension so that the file is picked up again
/// by [`load_from`] and discovery.
#[tracing::instrument(skip(rules), fields(count = rules.len()))]
pub fn save_to(path: &Path, rules: &[Rule]) -> Result<()> {
    if !is_rule_set_path(path) {
        bail!("rule set must have a .yaml extension: {path:?}");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create rule set directory: {parent:?}"))?;
    }

    let yaml = serde_yaml::to_string(&RuleSetRef::new(rules)).context("serialize rule set")?;
    fs::write(path, yaml).with_context(|| format!("write rule set: {path:?}"))?;
    tracing::debug!(?path, "wrote rule set");

    Ok(())
}

/// Whether the path names a file that rule-set loading reads.
fn is_rule_set_path(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("yaml"))
}
