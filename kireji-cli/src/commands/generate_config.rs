//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for checking:");
        println!(
            "   kireji check -t \"an old silent pond, ...\" --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented TOML matching the built-in defaults
fn generate_template() -> String {
    r#"# kireji configuration

[validation]
# Tokenization strategy: "linguistic" (default) or "whitespace"
tokenizer = "linguistic"

# CMU-format pronunciation dictionary; the bundled lexicon is used when unset
# dictionary = "/usr/share/cmudict/cmudict.dict"

# One rule per line, in order.
# "exact" requires every reading of the line to have the target count.
# "containment" requires at least one reading to have it.
[[form.lines]]
target = 5
policy = "exact"

[[form.lines]]
target = 7
policy = "containment"

[[form.lines]]
target = 5
policy = "exact"

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
"#
    .to_string()
}
