//! Output formatting utilities

use crate::domain::Student;
use std::path::{Path, PathBuf};

/// Multi-line detail view of one student
pub fn format_student(student: &Student) -> String {
    let courses = if student.courses().is_empty() {
        "None".to_string()
    } else {
        student.courses().join(", ")
    };
    format!(
        "Student ID: {}\nName:       {}\nAge:        {}\nGender:     {}\nCourses:    {}",
        student.student_id, student.name, student.age, student.gender, courses
    )
}

/// Append `.{extension}` unless the path already ends with it
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension);

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}
