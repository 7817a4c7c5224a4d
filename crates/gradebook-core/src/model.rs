//! Core data model types for gradebook.
//!
//! A [`Roster`] maps student names to [`SubjectGrades`], which map subject
//! names to a [`Grade`]. Both maps keep insertion order, and both serialize
//! as plain JSON objects:
//!
//! ```json
//! {
//!     "Alice": {
//!         "Math": 95.0,
//!         "Science": 70.0
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::GradeError;

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 100.0;

/// A score in the closed range [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade(f64);

impl Grade {
    /// Validate a raw value. NaN is rejected along with anything out of range.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        if (MIN_GRADE..=MAX_GRADE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradeError::OutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl TryFrom<&str> for Grade {
    type Error = GradeError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| GradeError::NotNumeric {
            input: s.to_string(),
        })?;
        Grade::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole numbers keep a trailing ".0" so "95" reads as a grade, not a count.
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn check_names<V, E: de::Error>(map: &IndexMap<String, V>) -> Result<(), E> {
    if map.keys().any(|k| k.trim().is_empty()) {
        return Err(E::custom("names must not be empty"));
    }
    Ok(())
}

/// One student's subjects and grades, in the order they were first entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectGrades {
    entries: IndexMap<String, Grade>,
}

impl SubjectGrades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a subject's grade. An existing subject keeps its position.
    pub fn set(&mut self, subject: impl Into<String>, grade: Grade) {
        self.entries.insert(subject.into(), grade);
    }

    pub fn get(&self, subject: &str) -> Option<Grade> {
        self.entries.get(subject).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Grade)> {
        self.entries.iter().map(|(k, g)| (k.as_str(), *g))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unweighted arithmetic mean, or `None` when there are no grades.
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.values().map(|g| g.value()).sum();
        Some(sum / self.len() as f64)
    }
}

impl Serialize for SubjectGrades {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SubjectGrades {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, Grade>::deserialize(deserializer)?;
        check_names::<_, D::Error>(&entries)?;
        Ok(Self { entries })
    }
}

/// The full student -> subject -> grade data set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: IndexMap<String, SubjectGrades>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a student's grades, creating an empty map for a new student.
    pub fn student_mut(&mut self, student: &str) -> &mut SubjectGrades {
        self.students.entry(student.to_string()).or_default()
    }

    pub fn get(&self, student: &str) -> Option<&SubjectGrades> {
        self.students.get(student)
    }

    pub fn contains(&self, student: &str) -> bool {
        self.students.contains_key(student)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubjectGrades)> {
        self.students.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.students.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let students = IndexMap::<String, SubjectGrades>::deserialize(deserializer)?;
        check_names::<_, D::Error>(&students)?;
        Ok(Self { students })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bounds_are_inclusive() {
        assert_eq!(Grade::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Grade::new(100.0).unwrap().value(), 100.0);
        assert_eq!(Grade::new(-0.5), Err(GradeError::OutOfRange(-0.5)));
        assert_eq!(Grade::new(100.01), Err(GradeError::OutOfRange(100.01)));
        assert!(Grade::new(f64::NAN).is_err());
        assert!(Grade::new(f64::INFINITY).is_err());
    }

    #[test]
    fn grade_parse() {
        assert_eq!(" 88.5 ".parse::<Grade>().unwrap().value(), 88.5);
        assert_eq!("100".parse::<Grade>().unwrap().value(), 100.0);
        assert!(matches!(
            "ninety".parse::<Grade>(),
            Err(GradeError::NotNumeric { .. })
        ));
        assert!(matches!("".parse::<Grade>(), Err(GradeError::NotNumeric { .. })));
        assert_eq!("150".parse::<Grade>(), Err(GradeError::OutOfRange(150.0)));
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::new(95.0).unwrap().to_string(), "95.0");
        assert_eq!(Grade::new(72.25).unwrap().to_string(), "72.25");
    }

    #[test]
    fn subject_overwrite_keeps_position() {
        let mut grades = SubjectGrades::new();
        grades.set("Math", Grade::new(50.0).unwrap());
        grades.set("Science", Grade::new(60.0).unwrap());
        grades.set("Math", Grade::new(90.0).unwrap());

        let collected: Vec<_> = grades.iter().map(|(s, g)| (s, g.value())).collect();
        assert_eq!(collected, vec![("Math", 90.0), ("Science", 60.0)]);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(SubjectGrades::new().mean(), None);
    }

    #[test]
    fn mean_is_unweighted() {
        let mut grades = SubjectGrades::new();
        grades.set("Math", Grade::new(80.0).unwrap());
        grades.set("Science", Grade::new(90.0).unwrap());
        assert_eq!(grades.mean(), Some(85.0));
    }

    #[test]
    fn roster_json_preserves_order() {
        let json = r#"{"Zed": {"b": 1, "a": 2}, "Amy": {}}"#;
        let roster: Roster = serde_json::from_str(json).unwrap();

        let names: Vec<_> = roster.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        let subjects: Vec<_> = roster.get("Zed").unwrap().iter().map(|(s, _)| s).collect();
        assert_eq!(subjects, vec!["b", "a"]);
        assert!(roster.get("Amy").unwrap().is_empty());

        let out = serde_json::to_string(&roster).unwrap();
        assert_eq!(out, r#"{"Zed":{"b":1.0,"a":2.0},"Amy":{}}"#);
    }

    #[test]
    fn roster_json_rejects_bad_grades() {
        assert!(serde_json::from_str::<Roster>(r#"{"Bob": {"Math": 101}}"#).is_err());
        assert!(serde_json::from_str::<Roster>(r#"{"Bob": {"Math": "A"}}"#).is_err());
        assert!(serde_json::from_str::<Roster>(r#"{"Bob": [90]}"#).is_err());
        assert!(serde_json::from_str::<Roster>(r#"[1, 2]"#).is_err());
        assert!(serde_json::from_str::<Roster>(r#"{"": {}}"#).is_err());
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let roster: Roster = serde_json::from_str(r#"{"Bob": {"Math": 10, "Math": 20}}"#).unwrap();
        assert_eq!(roster.get("Bob").unwrap().get("Math").unwrap().value(), 20.0);
        assert_eq!(roster.get("Bob").unwrap().len(), 1);
    }
}
