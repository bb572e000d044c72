//! Documentation for the CLAUDE.md rule format and rule sets.

use clap::Args;
use color_eyre::Result;
use color_print::cstr;

#[derive(Args, Clone, Debug)]
pub struct Config {}

pub fn main(_config: Config) -> Result<()> {
    println!("{DOCS}");
    Ok(())
}

const DOCS: &str = cstr!("\
<bold><blue>rulesync Guide</blue></bold>

<bold>Rules in CLAUDE.md</bold>

  Rules live under <cyan>### </cyan> headings. Everything up to the next heading is
  the rule's content, with surrounding blank lines trimmed.

    <yellow>## Active Rules</yellow>

    <yellow>### Rule One</yellow>
    <yellow>Do the thing.</yellow>

    <yellow>### Rule Two</yellow>
    <yellow>Do another thing.</yellow>
    <yellow>Multi-line.</yellow>

    <yellow>## Active MCP Servers</yellow>          <dim># Ends the rules; its text is ignored</dim>

  <bold>How lines are read</bold>

    <cyan>### Name</cyan>            Starts a new rule called <cyan>Name</cyan>.
    <cyan>## Active Rules</cyan>     Starts the rules section. Must match exactly.
    <cyan>## Anything else</cyan>    Ends the current rule; following text is ignored.
    <dim>other lines</dim>         Belong to the current rule, or are ignored if
                        there is none.

  <dim>A heading with no content is skipped. Names may repeat.</dim>
  <dim>Code fences are not special: a</dim> <cyan>### </cyan><dim>line inside one still starts a rule.</dim>

<bold>Rule Sets</bold>

  Rule sets are loaded from these locations (all additive):

    <cyan>$CONFIG_DIR/rules.yaml</cyan>        <dim>User-level rules</dim>
    <cyan>.rulesync.yaml</cyan>                <dim>Project root</dim>
    <cyan>.rulesync/**/*.yaml</cyan>           <dim>Project directory</dim>

  <dim>$CONFIG_DIR by platform:</dim>
    <dim>Linux:</dim>   <cyan>~/.config/rulesync</cyan>
    <dim>macOS:</dim>   <cyan>~/Library/Application Support/dev.rulesync.rulesync</cyan>
    <dim>Windows:</dim> <cyan>%APPDATA%\\rulesync\\rulesync\\config</cyan>

  <yellow>version: 1</yellow>

  <yellow>rules:</yellow>
    <yellow>- name: Rule One</yellow>
      <yellow>content: Do the thing.</yellow>

<bold>Commands</bold>

  <cyan>rulesync import CLAUDE.md</cyan>                    Print the rules in a document
  <cyan>rulesync import CLAUDE.md --write .rulesync.yaml</cyan>  Save them as a rule set
  <cyan>rulesync export --dry-run</cyan>                    Preview the merged CLAUDE.md
  <cyan>rulesync export --target CLAUDE.md</cyan>           Replace its Active Rules section
  <cyan>rulesync validate</cyan>                            Check every rule set

<bold>Debugging</bold>

  Set <cyan>RULESYNC_LOG=debug</cyan> (or <cyan>trace</cyan>) to see how documents are read.
");
