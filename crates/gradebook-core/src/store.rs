//! The in-memory roster store.
//!
//! [`RosterStore`] owns the authoritative [`Roster`]. It performs no I/O; the
//! caller hands it a freshly loaded roster through [`RosterStore::replace_all`].

use std::fmt;

use crate::error::{GradeError, StoreError};
use crate::model::{Grade, Roster, SubjectGrades};

/// The result of averaging one student's grades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    /// Unweighted mean of the stored grades, at full precision.
    Mean(f64),
    /// The student has no subjects yet.
    NoGrades,
}

impl Average {
    pub fn mean(self) -> Option<f64> {
        match self {
            Average::Mean(m) => Some(m),
            Average::NoGrades => None,
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Mean(m) => write!(f, "{m:.2}"),
            Average::NoGrades => write!(f, "No grades available"),
        }
    }
}

/// A listing over every student, or an explicit marker for an empty roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Empty,
    Students(Vec<T>),
}

impl<T> Listing<T> {
    fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Students(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// The listed items; empty for [`Listing::Empty`].
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Empty => Vec::new(),
            Listing::Students(items) => items,
        }
    }
}

/// Owns the roster and validates every mutation.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    roster: Roster,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self { roster }
    }

    /// Register a student with no subjects. Existing students are untouched.
    pub fn add_student(&mut self, student: &str) -> Result<(), GradeError> {
        let student = normalize(student).ok_or(GradeError::EmptyStudentName)?;
        self.roster.student_mut(student);
        Ok(())
    }

    /// Record `grade` for `student` in `subject`, creating the student if needed.
    ///
    /// `grade` may be a number or the raw text the user typed. Everything is
    /// validated before the roster is touched, so a rejected entry leaves it
    /// exactly as it was. Re-entering a subject overwrites its grade.
    pub fn add_grade<G>(&mut self, student: &str, subject: &str, grade: G) -> Result<Grade, GradeError>
    where
        G: TryInto<Grade, Error = GradeError>,
    {
        let student = normalize(student).ok_or(GradeError::EmptyStudentName)?;
        let subject = normalize(subject).ok_or(GradeError::EmptySubjectName)?;
        let grade = grade.try_into()?;

        self.roster.student_mut(student).set(subject, grade);
        tracing::debug!(student, subject, grade = grade.value(), "grade recorded");
        Ok(grade)
    }

    /// Every student with their subject grades, in insertion order.
    pub fn list_all(&self) -> Listing<(&str, &SubjectGrades)> {
        Listing::from_vec(self.roster.iter().collect())
    }

    /// Average of one student's grades.
    pub fn average_for(&self, student: &str) -> Result<Average, StoreError> {
        let grades = self
            .roster
            .get(student.trim())
            .ok_or_else(|| StoreError::UnknownStudent(student.to_string()))?;
        Ok(average_of(grades))
    }

    /// Averages for every student, in insertion order.
    pub fn averages(&self) -> Listing<(&str, Average)> {
        Listing::from_vec(
            self.roster
                .iter()
                .map(|(name, grades)| (name, average_of(grades)))
                .collect(),
        )
    }

    /// Swap in a new roster wholesale, returning the old one.
    pub fn replace_all(&mut self, new_roster: Roster) -> Roster {
        tracing::debug!(students = new_roster.len(), "replacing roster");
        std::mem::replace(&mut self.roster, new_roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

fn average_of(grades: &SubjectGrades) -> Average {
    grades.mean().map_or(Average::NoGrades, Average::Mean)
}

fn normalize(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}
