//! Flat-file record store

use crate::domain::{Student, StudentRecord};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence contract used by the registry: whole-collection load and save
pub trait RecordStore {
    /// Load every student. Missing, empty or malformed data yields an empty list.
    fn load(&self) -> Vec<Student>;

    /// Replace the stored collection with `students`
    fn save(&self, students: &[Student]) -> Result<()>;
}

/// JSON file implementation of RecordStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict variant of `load` that reports why the file could not be read
    pub fn try_load(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<StudentRecord> = serde_json::from_str(&contents)?;
        Ok(records.into_iter().map(Student::from_record).collect())
    }

    /// Write to a sibling temp file and rename it over the target.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.roster-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("students.txt"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Vec<Student> {
        match self.try_load() {
            Ok(students) => {
                log::debug!(
                    "Loaded {} students from {}",
                    students.len(),
                    self.path.display()
                );
                students
            }
            Err(e) => {
                log::warn!("Error loading students from {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        let records: Vec<StudentRecord> = students.iter().map(Student::to_record).collect();
        let json = serde_json::to_string_pretty(&records)?;

        self.write_atomic(&json).inspect_err(|e| {
            log::error!("Error saving students to {}: {}", self.path.display(), e);
        })?;

        log::debug!("Saved {} students to {}", students.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        let mut alice = Student::new("Alice", 20, "F", "S1");
        alice.enroll("Math");
        alice.enroll("Art");
        let bob = Student::new("Bob", 22, "M", "S2");
        vec![alice, bob]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("students.txt"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("students.txt");
        fs::write(&path, "   \n\n").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("students.txt");
        fs::write(&path, "{ not json ]").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_empty());
        assert!(store.try_load().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("students.txt"));
        let students = sample();

        store.save(&students).unwrap();
        assert_eq!(store.load(), students);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("students.txt"));

        store.save(&sample()).unwrap();
        store.save(&sample()[1..]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].student_id, "S2");
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("students.txt"));
        store.save(&sample()).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        store.save(&store.load()).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_file_is_top_level_array() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("students.txt"));
        store.save(&sample()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["student_id"], "S1");
        assert_eq!(items[0]["courses"][1], "Art");
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("students.txt");
        let store = JsonFileStore::new(&path);

        store.save(&sample()).unwrap();

        assert!(path.exists());
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("roster-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp.path().join("students.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.save(&sample()).is_err());
    }
}
