//! Table rendering shared by the one-shot commands.

use comfy_table::{Cell, Table};

use gradebook_core::{Average, SubjectGrades};

pub fn grades_table<'a>(students: impl IntoIterator<Item = (&'a str, &'a SubjectGrades)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Student", "Subject", "Grade"]);

    for (name, grades) in students {
        if grades.is_empty() {
            table.add_row(vec![Cell::new(name), Cell::new("-"), Cell::new("-")]);
            continue;
        }
        for (subject, grade) in grades.iter() {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(subject),
                Cell::new(grade.to_string()),
            ]);
        }
    }

    table
}

pub fn averages_table<'a>(averages: impl IntoIterator<Item = (&'a str, Average)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Student", "Average"]);

    for (name, average) in averages {
        table.add_row(vec![Cell::new(name), Cell::new(average.to_string())]);
    }

    table
}
