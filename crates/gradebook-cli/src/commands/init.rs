//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to point data_file at your roster");
    println!("  2. Run: gradebook add --student Alice --grade Math=95");
    println!("  3. Run: gradebook view");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Roster file offered at the save/load prompts and used by subcommands.
# GRADEBOOK_DATA_FILE overrides this.
data_file = "grades.json"

# Indentation width for saved JSON.
indent = 4

# Load data_file when the interactive menu starts.
autoload = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradebookConfig;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: GradebookConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, GradebookConfig::default());
    }
}
