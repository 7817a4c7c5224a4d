//! The interactive menu (`gradebook` / `gradebook menu`).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::persistence;
use gradebook_core::{Average, GradeError, Listing, RosterStore};

use crate::config::GradebookConfig;

const DONE: &str = "done";

pub fn execute(config: &GradebookConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut store = RosterStore::new();
    run_session(stdin.lock(), stdout.lock(), &mut store, config)
}

/// Drive one menu session until the user exits or input runs out.
///
/// Only failures writing to `output` are returned; every roster or file
/// problem is printed and the session carries on.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    store: &mut RosterStore,
    config: &GradebookConfig,
) -> Result<()> {
    let mut session = Session {
        input,
        output,
        store,
        config,
    };

    if config.autoload {
        session.load_from(config.data_file.clone())?;
    }
    session.run()
}

struct Session<'a, R, W> {
    input: R,
    output: W,
    store: &'a mut RosterStore,
    config: &'a GradebookConfig,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.as_str() {
                "1" => self.add_grades()?,
                "2" => self.view_grades()?,
                "3" => self.calculate_averages()?,
                "4" => self.save()?,
                "5" => self.load()?,
                "6" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting the program. Goodbye!")?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Student Grade Tracker ---")?;
        writeln!(self.output, "1. Add Grades for a Student")?;
        writeln!(self.output, "2. View Grades")?;
        writeln!(self.output, "3. Calculate Averages")?;
        writeln!(self.output, "4. Save Data to File")?;
        writeln!(self.output, "5. Load Data from File")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// Print `message`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_grades(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(());
        };
        if let Err(e) = self.store.add_student(&name) {
            return self.report_grade_error(&e);
        }

        loop {
            let Some(subject) =
                self.prompt(&format!("Enter subject name (or type '{DONE}' to finish): "))?
            else {
                break;
            };
            if subject.eq_ignore_ascii_case(DONE) {
                break;
            }
            if subject.is_empty() {
                self.report_grade_error(&GradeError::EmptySubjectName)?;
                continue;
            }

            let Some(grade) = self.prompt(&format!("Enter grade for {subject}: "))? else {
                break;
            };
            if let Err(e) = self.store.add_grade(&name, &subject, grade.as_str()) {
                self.report_grade_error(&e)?;
            }
        }
        Ok(())
    }

    fn report_grade_error(&mut self, err: &GradeError) -> Result<()> {
        tracing::debug!("rejected entry: {err}");
        let message = match err {
            GradeError::NotNumeric { .. } => "Invalid input. Please enter a numeric grade.",
            GradeError::OutOfRange(_) => "Grade must be between 0 and 100.",
            GradeError::EmptyStudentName => "Student name must not be empty.",
            GradeError::EmptySubjectName => "Subject name must not be empty.",
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn view_grades(&mut self) -> Result<()> {
        let students = match self.store.list_all() {
            Listing::Empty => {
                writeln!(self.output, "No grades available.")?;
                return Ok(());
            }
            Listing::Students(students) => students,
        };

        writeln!(self.output, "\n--- Grades ---")?;
        for (name, grades) in students {
            writeln!(self.output, "\nStudent: {name}")?;
            for (subject, grade) in grades.iter() {
                writeln!(self.output, "{subject}: {grade}")?;
            }
        }
        Ok(())
    }

    fn calculate_averages(&mut self) -> Result<()> {
        let averages = match self.store.averages() {
            Listing::Empty => {
                writeln!(self.output, "No grades available.")?;
                return Ok(());
            }
            Listing::Students(averages) => averages,
        };

        writeln!(self.output, "\n--- Averages ---")?;
        for (name, average) in averages {
            match average {
                Average::Mean(_) => writeln!(self.output, "{name}: {average}")?,
                Average::NoGrades => writeln!(self.output, "{name}: No grades available.")?,
            }
        }
        Ok(())
    }

    fn ask_path(&mut self, action: &str) -> Result<Option<PathBuf>> {
        let default = self.config.data_file.display().to_string();
        let answer = self.prompt(&format!(
            "Enter file path to {action} data (default: {default}): "
        ))?;
        Ok(answer.map(|a| {
            if a.is_empty() {
                self.config.data_file.clone()
            } else {
                PathBuf::from(a)
            }
        }))
    }

    fn save(&mut self) -> Result<()> {
        let Some(path) = self.ask_path("save")? else {
            return Ok(());
        };
        match persistence::save_with_indent(self.store.roster(), &path, self.config.indent) {
            Ok(()) => writeln!(self.output, "Data saved to {}.", path.display())?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let Some(path) = self.ask_path("load")? else {
            return Ok(());
        };
        self.load_from(path)
    }

    /// Only a successful load replaces the roster.
    fn load_from(&mut self, path: PathBuf) -> Result<()> {
        match persistence::load(&path) {
            Ok(roster) => {
                self.store.replace_all(roster);
                writeln!(
                    self.output,
                    "Data loaded successfully from {}.",
                    path.display()
                )?;
            }
            Err(e) => {
                tracing::warn!("{e}");
                writeln!(self.output, "Error: {e}")?;
                writeln!(
                    self.output,
                    "Nothing loaded from {}; current grades are unchanged.",
                    e.path().display()
                )?;
            }
        }
        Ok(())
    }
}
