//! The `gradebook view` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::{persistence, Listing, RosterStore};

use super::table::grades_table;

pub fn execute(file: &Path) -> Result<()> {
    let store = RosterStore::with_roster(persistence::load(file)?);

    match store.list_all() {
        Listing::Empty => println!("No grades available."),
        Listing::Students(students) => println!("{}", grades_table(students)),
    }

    Ok(())
}
