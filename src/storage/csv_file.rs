//! Flat comma-separated file: one `name,phone,email,job` record per line,
//! no header and no quoting. A field containing a comma does not survive a
//! save/load round trip.

use super::*;
use crate::domain::contact::FIELD_COUNT;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

pub struct CsvFileStorage {
    pub path: PathBuf,
}

impl CsvFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Splits a line the way the loader counts fields: trailing empty fields are
/// dropped, so `a,b,c,d,` has four fields and `a,b,c,` has three.
fn record_fields(record: &StringRecord) -> Vec<String> {
    let mut fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

pub fn read_contacts<R: Read>(source: R, contacts: &mut Vec<Contact>) -> Result<(), AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    for (line, result) in reader.records().enumerate() {
        let record = result?;

        match Contact::from_fields(record_fields(&record)) {
            Some(contact) => contacts.push(contact),
            None => debug!(
                "event=load_skip module=csv_file line={} fields={}",
                line + 1,
                record.len()
            ),
        }
    }
    Ok(())
}

impl ContactStore for CsvFileStorage {
    fn load_into(&self, contacts: &mut Vec<Contact>) -> Result<(), AppError> {
        // A missing file is an empty address book
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        read_contacts(BufReader::new(file), contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        for contact in contacts {
            writer.write_record(contact.fields())?;
        }

        // The file is closed when the writer drops, including on the error paths
        writer.flush()?;
        writer.get_ref().sync_all()?;

        Ok(())
    }

    fn medium(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn s(v: &str) -> String {
        v.to_string()
    }

    fn parse(data: &str) -> Result<Vec<Contact>, AppError> {
        let mut contacts = Vec::new();
        read_contacts(data.as_bytes(), &mut contacts)?;
        Ok(contacts)
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = CsvFileStorage::new(dir.path().join("absent.csv"));

        assert!(storage.load()?.is_empty());
        assert!(!dir.path().join("absent.csv").exists());
        Ok(())
    }

    #[test]
    fn keeps_only_four_field_lines() -> Result<(), AppError> {
        let contacts = parse(
            "Alice,12345,a@x.com,Engineer\n\
             too,few,fields\n\
             \n\
             one,two,three,four,five\n\
             Bob,999,b@x.com,Dev\n",
        )?;

        assert_eq!(
            contacts,
            vec![
                Contact::new(s("Alice"), s("12345"), s("a@x.com"), s("Engineer")),
                Contact::new(s("Bob"), s("999"), s("b@x.com"), s("Dev")),
            ]
        );
        Ok(())
    }

    #[test]
    fn loaded_rows_are_not_revalidated() -> Result<(), AppError> {
        let contacts = parse("R2D2,+1 555-0100,,droid\n")?;

        assert_eq!(
            contacts,
            vec![Contact::new(s("R2D2"), s("+1 555-0100"), s(""), s("droid"))]
        );
        Ok(())
    }

    #[test]
    fn trailing_empty_fields_do_not_count() -> Result<(), AppError> {
        let contacts = parse("Alice,12345,a@x.com,Engineer,,\nBob,999,b@x.com,\n")?;

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].job, "Engineer");
        Ok(())
    }

    #[test]
    fn quotes_are_plain_characters() -> Result<(), AppError> {
        let contacts = parse("\"Alice,12345\",a@x.com,Engineer\n")?;

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "\"Alice");
        assert_eq!(contacts[0].phone_number, "12345\"");
        Ok(())
    }

    #[test]
    fn accepts_crlf_line_endings() -> Result<(), AppError> {
        let contacts = parse("Alice,12345,a@x.com,Engineer\r\nBob,999,b@x.com,Dev\r\n")?;

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].job, "Engineer");
        Ok(())
    }

    #[test]
    fn save_writes_one_plain_line_per_record() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("book.csv");
        let storage = CsvFileStorage::new(&path);

        storage.save(&[
            Contact::new(s("Alice"), s("12345"), s("a@x.com"), s("Engineer")),
            Contact::new(s("Bob \"B\""), s("999"), s("b@x.com"), s("Dev")),
        ])?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "Alice,12345,a@x.com,Engineer\nBob \"B\",999,b@x.com,Dev\n"
        );
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_contents() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("book.csv");
        fs::write(&path, "Old,1,o@x.com,Gone\nOld,2,o@x.com,Gone\n")?;
        let storage = CsvFileStorage::new(&path);

        storage.save(&[Contact::new(s("Alice"), s("12345"), s("a@x.com"), s("Engineer"))])?;
        assert_eq!(fs::read_to_string(&path)?, "Alice,12345,a@x.com,Engineer\n");

        storage.save(&[])?;
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn round_trip_preserves_order_and_fields() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = CsvFileStorage::new(dir.path().join("sub").join("book.csv"));
        let contacts = vec![
            Contact::new(s("Zoe"), s("1"), s("z@x.com"), s("Pilot")),
            Contact::new(s("Alice"), s("12345"), s("a@x.com"), s("Engineer")),
            Contact::new(s("Émile Zola"), s("0033"), s("ez@x.fr"), s("Écrivain")),
        ];

        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        Ok(())
    }

    #[test]
    fn comma_in_field_corrupts_round_trip() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let storage = CsvFileStorage::new(dir.path().join("book.csv"));

        storage.save(&[Contact::new(s("Doe, John"), s("1"), s("j@x.com"), s("Dev"))])?;

        // Five fields on disk, so the row is dropped
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn invalid_utf8_keeps_rows_read_before_it() {
        let mut data = b"Alice,12345,a@x.com,Engineer\n".to_vec();
        data.extend_from_slice(b"B\xffb,999,b@x.com,Dev\n");

        let mut contacts = Vec::new();
        let res = read_contacts(data.as_slice(), &mut contacts);

        assert!(res.is_err_and(|e| e.is_io()));
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Alice");
    }
}
