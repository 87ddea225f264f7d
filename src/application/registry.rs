//! Student registry use cases
//!
//! The registry owns the in-memory collection. Every successful mutation saves the
//! whole collection through the store before returning.

use crate::domain::Student;
use crate::error::{Result, RosterError};
use crate::infrastructure::export::{self, ExportCapabilities};
use crate::infrastructure::RecordStore;
use std::path::Path;

/// Service owning the student collection and its persistence
pub struct Registry<S: RecordStore> {
    store: S,
    students: Vec<Student>,
}

impl<S: RecordStore> Registry<S> {
    /// Create a registry and load the stored collection
    pub fn open(store: S) -> Self {
        let students = store.load();
        Registry { store, students }
    }

    /// Read-only snapshot of the collection, in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find_by_id(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    fn find_by_id_mut(&mut self, student_id: &str) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.student_id == student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))
    }

    /// Save the collection, appending a warning to `message` when the save fails
    fn persisted(&self, message: String) -> String {
        match self.store.save(&self.students) {
            Ok(()) => message,
            Err(e) => format!("{}\nWarning: changes could not be saved: {}", message, e),
        }
    }

    /// Add a new student; fails if the id is already taken
    pub fn try_create(&mut self, name: &str, age: u32, gender: &str, student_id: &str) -> Result<String> {
        if self.find_by_id(student_id).is_some() {
            return Err(RosterError::DuplicateStudent(student_id.to_string()));
        }

        self.students.push(Student::new(name, age, gender, student_id));
        log::info!("Added student {}", student_id);

        Ok(self.persisted(format!(
            "Student {} with ID {} has been added.",
            name, student_id
        )))
    }

    pub fn create(&mut self, name: &str, age: u32, gender: &str, student_id: &str) -> String {
        self.try_create(name, age, gender, student_id)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Numbered listing of every student
    pub fn read_all(&self) -> String {
        if self.students.is_empty() {
            return "No students found in the system.".to_string();
        }
        numbered(self.students.iter())
    }

    /// Overwrite the given fields. `None` and empty strings leave a field untouched.
    pub fn try_update(
        &mut self,
        student_id: &str,
        name: Option<&str>,
        age: Option<u32>,
        gender: Option<&str>,
    ) -> Result<String> {
        let student = self.find_by_id_mut(student_id)?;

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            student.name = name.to_string();
        }
        if let Some(age) = age.filter(|a| *a > 0) {
            student.age = age;
        }
        if let Some(gender) = gender.filter(|g| !g.is_empty()) {
            student.gender = gender.to_string();
        }
        log::info!("Updated student {}", student_id);

        Ok(self.persisted(format!(
            "Student with ID {} has been updated.",
            student_id
        )))
    }

    pub fn update(
        &mut self,
        student_id: &str,
        name: Option<&str>,
        age: Option<u32>,
        gender: Option<&str>,
    ) -> String {
        self.try_update(student_id, name, age, gender)
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn try_delete(&mut self, student_id: &str) -> Result<String> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))?;

        self.students.remove(index);
        log::info!("Removed student {}", student_id);

        Ok(self.persisted(format!(
            "Student with ID {} has been removed.",
            student_id
        )))
    }

    pub fn delete(&mut self, student_id: &str) -> String {
        self.try_delete(student_id).unwrap_or_else(|e| e.to_string())
    }

    /// Students whose name contains `query` (case-insensitive) or whose id equals it
    pub fn matching(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle) || s.student_id == query)
            .collect()
    }

    pub fn search(&self, query: &str) -> String {
        let results = self.matching(query);
        if results.is_empty() {
            return format!("No students found matching '{}'.", query);
        }
        numbered(results.into_iter())
    }

    pub fn try_enroll_course(&mut self, student_id: &str, course: &str) -> Result<String> {
        let student = self.find_by_id_mut(student_id)?;
        let message = student.enroll(course).describe(&student.name, course);
        Ok(self.persisted(message))
    }

    pub fn enroll_course(&mut self, student_id: &str, course: &str) -> String {
        self.try_enroll_course(student_id, course)
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn try_remove_course(&mut self, student_id: &str, course: &str) -> Result<String> {
        let student = self.find_by_id_mut(student_id)?;
        let message = student.remove(course).describe(&student.name, course);
        Ok(self.persisted(message))
    }

    pub fn remove_course(&mut self, student_id: &str, course: &str) -> String {
        self.try_remove_course(student_id, course)
            .unwrap_or_else(|e| e.to_string())
    }

    /// Explicitly save the whole collection
    pub fn persist(&self) -> String {
        match self.store.save(&self.students) {
            Ok(()) => "Data saved.".to_string(),
            Err(e) => format!("Error saving students: {}", e),
        }
    }

    pub fn export_csv(&self, path: &Path) -> String {
        export::export_csv(&self.students, path)
    }

    pub fn export_spreadsheet(&self, path: &Path, capabilities: ExportCapabilities) -> String {
        export::export_spreadsheet(&self.students, path, capabilities)
    }
}

fn numbered<'a>(students: impl Iterator<Item = &'a Student>) -> String {
    students
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.display_info()))
        .collect::<Vec<_>>()
        .join("\n")
}
