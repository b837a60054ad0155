//! Spreadsheet helpers: previewing a staged import file, writing the
//! import template and exporting the visible table.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use log::info;
use umya_spreadsheet::{new_file, reader, writer, Worksheet};

pub const EXPORT_DIR: &str = "exports";
pub const TEMPLATE_HEADERS: [&str; 2] = ["姓名", "学号"];

/// Writes `values` into 1-based `row`, starting at column 1.
fn write_row(sheet: &mut Worksheet, row: u32, values: &[String]) {
    for (col, value) in (1u32..).zip(values) {
        sheet.get_cell_mut((col, row)).set_value(value);
    }
}

/// Counts rows the server would try to import: everything below the header
/// whose name and student number cells are both filled.
pub fn count_import_rows(path: &Path) -> Result<usize, Box<dyn Error>> {
    let book = reader::xlsx::read(path)?;
    let sheet = book.get_active_sheet();
    let highest = sheet.get_highest_row();

    let rows = (2..=highest)
        .filter(|&row| {
            let name = sheet.get_value((1u32, row));
            let student_id = sheet.get_value((2u32, row));
            !name.trim().is_empty() && !student_id.trim().is_empty()
        })
        .count();
    Ok(rows)
}

pub fn write_import_template(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut book = new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").ok_or("template sheet missing")?;
    let headers: Vec<String> = TEMPLATE_HEADERS.iter().map(|h| h.to_string()).collect();
    write_row(sheet, 1, &headers);
    writer::xlsx::write(&book, path)?;
    info!("import template written to {}", path.display());
    Ok(())
}

/// Writes `headers` and `rows` to `exports/{stem}_{timestamp}.xlsx`.
pub fn export_table(stem: &str, headers: &[&str], rows: &[Vec<String>]) -> Result<PathBuf, Box<dyn Error>> {
    let dir = Path::new(EXPORT_DIR);
    fs::create_dir_all(dir)?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("{}_{}.xlsx", stem, timestamp));
    write_table(&path, headers, rows)?;
    info!("exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}

pub fn write_table(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
    let mut book = new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").ok_or("export sheet missing")?;

    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(sheet, 1, &headers);
    for (row, values) in (2u32..).zip(rows) {
        write_row(sheet, row, values);
    }

    writer::xlsx::write(&book, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir().join("homework-admin-tests");
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn wide_rows_keep_every_column() {
        let path = scratch("wide.xlsx");
        let headers: Vec<String> = (1..=30).map(|i| format!("列{}", i)).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        write_table(&path, &header_refs, &[headers.clone()]).unwrap();

        let book = reader::xlsx::read(&path).unwrap();
        let sheet = book.get_active_sheet();
        assert_eq!(sheet.get_value((1u32, 1u32)), "列1");
        assert_eq!(sheet.get_value((27u32, 1u32)), "列27");
        assert_eq!(sheet.get_value((30u32, 2u32)), "列30");
    }

    #[test]
    fn template_has_no_data_rows() {
        let path = scratch("template.xlsx");
        write_import_template(&path).unwrap();
        assert_eq!(count_import_rows(&path).unwrap(), 0);
    }

    #[test]
    fn rows_missing_a_field_are_not_counted() {
        let path = scratch("students.xlsx");
        let rows = vec![
            vec!["张三".to_string(), "2024001".to_string()],
            vec!["李四".to_string(), "".to_string()],
            vec!["王五".to_string(), "2024003".to_string()],
        ];
        write_table(&path, &TEMPLATE_HEADERS, &rows).unwrap();
        assert_eq!(count_import_rows(&path).unwrap(), 2);
    }

    #[test]
    fn unreadable_files_report_an_error() {
        let path = scratch("not-a-workbook.xlsx");
        fs::write(&path, b"plain text").unwrap();
        assert!(count_import_rows(&path).is_err());
    }
}
