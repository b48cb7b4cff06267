use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use crate::store::RecordStore;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Category", "ID"];

/// Export file name for a store of `count` contacts.
///
/// Two exports at the same count overwrite each other.
pub fn export_filename(count: usize) -> String {
    format!("contacts_export_{}.csv", count)
}

/// Write every contact, ignoring any active filter, to `<dir>/contacts_export_<count>.csv`.
pub fn run(records: &RecordStore, dir: &Path) -> Result<CmdResult> {
    let contacts = records.all();
    let path: PathBuf = dir.join(export_filename(contacts.len()));

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| with_path(e, dir))?;
    }
    let file = File::create(&path).map_err(|e| with_path(e, &path))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, contacts)?;
    writer.flush().map_err(|e| with_path(e, &path))?;

    info!(path = %path.display(), count = contacts.len(), "contacts exported");
    let mut result = CmdResult::default().with_total(contacts.len());
    result.add_message(CmdMessage::success(format!(
        "Exported {} contacts to {}",
        contacts.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

fn with_path(e: io::Error, path: &Path) -> ContactzError {
    ContactzError::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

fn write_csv<W: Write>(mut writer: W, contacts: &[Contact]) -> Result<()> {
    write_row(&mut writer, &CSV_HEADER)?;
    for c in contacts {
        write_row(
            &mut writer,
            &[
                c.name.as_str(),
                c.phone.as_str(),
                c.email.as_str(),
                c.category.as_str(),
                c.id.as_str(),
            ],
        )?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writer
        .write_all(line.as_bytes())
        .and_then(|_| writer.write_all(b"\r\n"))
        .map_err(ContactzError::Io)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_rows_in_store_order() {
        let dir = TempDir::new().unwrap();
        let fx = StoreFixture::new()
            .with_contact("Ann", "1", "Family")
            .with_contact("Bob", "2", "Work");

        let result = run(&fx.records, dir.path()).unwrap();
        let path = result.export_path.unwrap();
        assert_eq!(path, dir.path().join("contacts_export_2.csv"));

        let csv = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = csv.split("\r\n").collect();
        assert_eq!(lines[0], "Name,Phone,Email,Category,ID");
        assert!(lines[1].starts_with("Ann,1,,Family,CT"));
        assert!(lines[2].starts_with("Bob,2,,Work,CT"));
        assert_eq!(lines[3], "");
    }

    #[test]
    fn empty_store_exports_header_only() {
        let dir = TempDir::new().unwrap();
        let fx = StoreFixture::new();
        let result = run(&fx.records, dir.path()).unwrap();
        let csv = fs::read_to_string(result.export_path.unwrap()).unwrap();
        assert_eq!(csv, "Name,Phone,Email,Category,ID\r\n");
    }

    #[test]
    fn quotes_fields_that_need_it() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("book").join("exports");
        let fx = StoreFixture::new().with_contact("Ann", "1", "Family");
        let result = run(&fx.records, &target).unwrap();
        assert_eq!(result.export_path.unwrap(), target.join("contacts_export_1.csv"));
    }

    #[test]
    fn unwritable_target_is_io_error_naming_the_path() {
        let dir = TempDir::new().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        fs::write(&not_a_dir, "x").unwrap();
        let fx = StoreFixture::new().with_contact("Ann", "1", "Family");

        let err = run(&fx.records, &not_a_dir).unwrap_err();
        assert!(matches!(err, ContactzError::Io(_)));
        assert!(err.to_string().contains("plain-file"));
    }

    #[test]
    fn filename_tracks_count() {
        assert_eq!(export_filename(0), "contacts_export_0.csv");
        assert_eq!(export_filename(12), "contacts_export_12.csv");
    }
}
