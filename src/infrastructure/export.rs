//! CSV and spreadsheet exporters
//!
//! Exporters only read the collection they are handed. Each entry point returns a
//! human-readable message; failures are reported in that message, never raised.

use crate::domain::Student;
use crate::error::{Result, RosterError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 5] = ["Student ID", "Name", "Age", "Gender", "Courses"];
pub const CSV_COURSE_DELIMITER: &str = "|";
pub const SHEET_COURSE_DELIMITER: &str = ", ";
pub const SHEET_NAME: &str = "Students";
/// Extra characters added to the widest cell when sizing spreadsheet columns
pub const COLUMN_PADDING: usize = 2;

/// Optional exporters available in this build, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCapabilities {
    pub spreadsheet: bool,
}

impl ExportCapabilities {
    pub fn detect() -> Self {
        ExportCapabilities {
            spreadsheet: cfg!(feature = "xlsx"),
        }
    }
}

impl Default for ExportCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// Cell values for one student, in header order
fn row_cells(student: &Student, course_delimiter: &str) -> [String; 5] {
    [
        student.student_id.clone(),
        student.name.clone(),
        student.age.to_string(),
        student.gender.clone(),
        student.courses().join(course_delimiter),
    ]
}

fn success_message(path: &Path, resolved: &Path) -> String {
    format!(
        "Student data exported successfully to {}\nFile location: {}",
        path.display(),
        resolved.display()
    )
}

/// Write the CSV file and return its absolute location.
///
/// Fields are not quoted: commas inside names or genders will shift columns.
pub fn write_csv(students: &[Student], path: &Path) -> Result<PathBuf> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", HEADERS.join(","))?;
    for student in students {
        writeln!(writer, "{}", row_cells(student, CSV_COURSE_DELIMITER).join(","))?;
    }
    writer.flush()?;

    Ok(fs::canonicalize(path)?)
}

/// Export students to CSV, returning a status message
pub fn export_csv(students: &[Student], path: &Path) -> String {
    match write_csv(students, path) {
        Ok(resolved) => {
            log::info!("Exported {} students to {}", students.len(), resolved.display());
            success_message(path, &resolved)
        }
        Err(e) => {
            log::error!("CSV export to {} failed: {}", path.display(), e);
            format!("Error exporting to CSV: {}", e)
        }
    }
}

/// Column widths sized to the widest cell (header included) plus padding
pub fn column_widths(students: &[Student]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for student in students {
        for (width, cell) in widths.iter_mut().zip(row_cells(student, SHEET_COURSE_DELIMITER)) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| w + COLUMN_PADDING)
}

/// Spreadsheet column letter for a 1-based index
pub fn column_letter(n: usize) -> String {
    let mut result = String::new();
    let mut n = n;
    while n > 0 {
        let rem = (n - 1) % 26;
        result.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    result
}

/// Write the workbook and return its absolute location
#[cfg(feature = "xlsx")]
pub fn write_spreadsheet(students: &[Student], path: &Path) -> Result<PathBuf> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book
        .new_sheet(SHEET_NAME)
        .map_err(|e| RosterError::Export(format!("Failed to create sheet: {}", e)))?;

    for (idx, header) in HEADERS.iter().enumerate() {
        let coordinate = format!("{}1", column_letter(idx + 1));
        sheet.get_cell_mut(coordinate.as_str()).set_value(*header);
        sheet
            .get_style_mut(coordinate.as_str())
            .get_font_mut()
            .set_bold(true);
    }

    for (row_idx, student) in students.iter().enumerate() {
        let row = row_idx + 2;
        let cells = row_cells(student, SHEET_COURSE_DELIMITER);
        for (col_idx, value) in cells.into_iter().enumerate() {
            let coordinate = format!("{}{}", column_letter(col_idx + 1), row);
            let cell = sheet.get_cell_mut(coordinate.as_str());
            if col_idx == 2 {
                cell.set_value_number(student.age);
            } else {
                cell.set_value(value);
            }
        }
    }

    for (idx, width) in column_widths(students).iter().enumerate() {
        sheet
            .get_column_dimension_mut(&column_letter(idx + 1))
            .set_width(*width as f64);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| RosterError::Export(e.to_string()))?;

    Ok(fs::canonicalize(path)?)
}

#[cfg(not(feature = "xlsx"))]
pub fn write_spreadsheet(_students: &[Student], _path: &Path) -> Result<PathBuf> {
    Err(RosterError::SpreadsheetUnavailable)
}

/// Export students to an xlsx workbook, returning a status message
pub fn export_spreadsheet(
    students: &[Student],
    path: &Path,
    capabilities: ExportCapabilities,
) -> String {
    if !capabilities.spreadsheet {
        return RosterError::SpreadsheetUnavailable.to_string();
    }

    match write_spreadsheet(students, path) {
        Ok(resolved) => {
            log::info!("Exported {} students to {}", students.len(), resolved.display());
            success_message(path, &resolved)
        }
        Err(RosterError::SpreadsheetUnavailable) => RosterError::SpreadsheetUnavailable.to_string(),
        Err(e) => {
            log::error!("Excel export to {} failed: {}", path.display(), e);
            format!("Error exporting to Excel: {}", e)
        }
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
        vec![alice, Student::new("Bob", 22, "M", "S2")]
    }

    #[test]
    fn test_csv_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");

        let message = export_csv(&sample(), &path);

        assert!(message.starts_with("Student data exported successfully to"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Student ID,Name,Age,Gender,Courses\n\
             S1,Alice,20,F,Math|Art\n\
             S2,Bob,22,M,\n"
        );
    }

    #[test]
    fn test_csv_message_has_absolute_location() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");

        let message = export_csv(&sample(), &path);
        let location = message
            .lines()
            .find_map(|l| l.strip_prefix("File location: "))
            .unwrap();
        assert!(Path::new(location).is_absolute());
    }

    #[test]
    fn test_csv_does_not_escape_commas() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        let students = vec![Student::new("Doe, Jane", 30, "F", "S9")];

        export_csv(&students, &path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("S9,Doe, Jane,30,F,\n"));
    }

    #[test]
    fn test_csv_error_is_a_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("out.csv");

        let message = export_csv(&sample(), &path);
        assert!(message.starts_with("Error exporting to CSV:"));
    }

    #[test]
    fn test_spreadsheet_unavailable_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xlsx");

        let message = export_spreadsheet(
            &sample(),
            &path,
            ExportCapabilities { spreadsheet: false },
        );

        assert!(message.contains("not available"));
        assert!(!path.exists());
    }

    #[test]
    fn test_column_widths() {
        let widths = column_widths(&sample());
        // "Student ID" is wider than any id
        assert_eq!(widths[0], "Student ID".len() + COLUMN_PADDING);
        assert_eq!(widths[4], "Math, Art".len() + COLUMN_PADDING);
        assert_eq!(widths[2], "Age".len() + COLUMN_PADDING);
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(5), "E");
        assert_eq!(column_letter(27), "AA");
    }

    #[test]
    fn test_detect_matches_feature() {
        assert_eq!(ExportCapabilities::detect().spreadsheet, cfg!(feature = "xlsx"));
    }
}
