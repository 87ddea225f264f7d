//! Student entity and its persisted record form

use serde::{Deserialize, Serialize};

/// Outcome of enrolling a student in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollStatus {
    Added,
    AlreadyEnrolled,
}

impl EnrollStatus {
    pub fn describe(&self, name: &str, course: &str) -> String {
        match self {
            EnrollStatus::Added => format!("{} has been added to {}'s courses.", course, name),
            EnrollStatus::AlreadyEnrolled => {
                format!("{} is already enrolled in {}.", name, course)
            }
        }
    }
}

/// Outcome of removing a course from a student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStatus {
    Removed,
    NotEnrolled,
}

impl RemoveStatus {
    pub fn describe(&self, name: &str, course: &str) -> String {
        match self {
            RemoveStatus::Removed => {
                format!("{} has been removed from {}'s courses.", course, name)
            }
            RemoveStatus::NotEnrolled => format!("{} is not enrolled in {}.", name, course),
        }
    }
}

/// Field-for-field mapping of a student as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub student_id: String,
    pub courses: Vec<String>,
}

/// A student, identified by `student_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    courses: Vec<String>,
}

impl Student {
    /// Create a student with no courses
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Student {
            student_id: student_id.into(),
            name: name.into(),
            age,
            gender: gender.into(),
            courses: Vec::new(),
        }
    }

    /// Courses in enrollment order
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Add a course unless the student already takes it (exact, case-sensitive match)
    pub fn enroll(&mut self, course: &str) -> EnrollStatus {
        if self.courses.iter().any(|c| c == course) {
            return EnrollStatus::AlreadyEnrolled;
        }
        self.courses.push(course.to_string());
        EnrollStatus::Added
    }

    /// Remove a course if the student takes it
    pub fn remove(&mut self, course: &str) -> RemoveStatus {
        match self.courses.iter().position(|c| c == course) {
            Some(index) => {
                self.courses.remove(index);
                RemoveStatus::Removed
            }
            None => RemoveStatus::NotEnrolled,
        }
    }

    /// One-line summary used by listings and search results
    pub fn display_info(&self) -> String {
        let courses = if self.courses.is_empty() {
            "None".to_string()
        } else {
            self.courses.join(", ")
        };
        format!(
            "Name: {}, Age: {}, Gender: {}, Student ID: {}, Courses: {}",
            self.name, self.age, self.gender, self.student_id, courses
        )
    }

    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            name: self.name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            student_id: self.student_id.clone(),
            courses: self.courses.clone(),
        }
    }

    /// Build a student from its record. Repeated courses collapse to their first occurrence.
    pub fn from_record(record: StudentRecord) -> Self {
        let mut student = Student::new(record.name, record.age, record.gender, record.student_id);
        for course in &record.courses {
            student.enroll(course);
        }
        student
    }
}
