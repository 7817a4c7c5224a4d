//! The `gradebook add` command.

use std::path::Path;

use anyhow::{Context, Result};

use gradebook_core::{persistence, LoadError, RosterStore};

use crate::config::GradebookConfig;

/// Load `file`, record the grades, and write it back.
///
/// A missing file starts a new roster. Any other load failure aborts before
/// the file is touched, so a corrupt data file is never overwritten.
pub fn execute(
    file: &Path,
    student: String,
    grades: Vec<String>,
    config: &GradebookConfig,
) -> Result<()> {
    let roster = match persistence::load(file) {
        Ok(roster) => roster,
        Err(e @ LoadError::NotFound { .. }) | Err(e @ LoadError::Empty { .. }) => {
            tracing::info!("{e}, starting a new roster");
            Default::default()
        }
        Err(e) => return Err(e).context("refusing to overwrite unreadable data file"),
    };
    let mut store = RosterStore::with_roster(roster);

    store.add_student(&student)?;

    let mut recorded = 0;
    for entry in &grades {
        let Some((subject, value)) = entry.split_once('=') else {
            eprintln!("Skipping {entry:?}: expected SUBJECT=GRADE");
            continue;
        };
        match store.add_grade(&student, subject, value) {
            Ok(grade) => {
                println!("{}: {} = {grade}", student.trim(), subject.trim());
                recorded += 1;
            }
            Err(e) => eprintln!("Skipping {entry:?}: {e}"),
        }
    }

    persistence::save_with_indent(store.roster(), file, config.indent)?;
    println!(
        "Recorded {recorded} of {} grade(s). Data saved to {}.",
        grades.len(),
        file.display()
    );

    Ok(())
}
