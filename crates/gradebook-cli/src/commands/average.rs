//! The `gradebook average` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::{persistence, Listing, RosterStore};

use super::table::averages_table;

pub fn execute(file: &Path, student: Option<String>) -> Result<()> {
    let store = RosterStore::with_roster(persistence::load(file)?);

    if let Some(student) = student {
        let average = store.average_for(&student)?;
        println!("{}: {average}", student.trim());
        return Ok(());
    }

    match store.averages() {
        Listing::Empty => println!("No grades available."),
        Listing::Students(averages) => println!("{}", averages_table(averages)),
    }

    Ok(())
}
