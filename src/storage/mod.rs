pub mod csv_file;
pub mod memory;

use crate::prelude::{AppError, Contact};
use log::warn;
use std::fs;
use std::path::Path;

pub const DEFAULT_PATH: &str = "address_book.csv";

pub trait ContactStore {
    /// Appends stored records to `contacts` in file order. On error, the
    /// records read before the failure are left in `contacts`.
    fn load_into(&self, contacts: &mut Vec<Contact>) -> Result<(), AppError>;

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut contacts = Vec::new();
        self.load_into(&mut contacts)?;
        Ok(contacts)
    }

    /// Overwrites the whole store with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Csv,
    Mem,
}

impl StorageMedium {
    pub fn is_csv(&self) -> bool {
        matches!(self, StorageMedium::Csv)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_csv() { "csv" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "csv" => Ok(StorageMedium::Csv),
            "mem" => Ok(StorageMedium::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMedium,
    path: &Path,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMedium::Csv => Ok(Box::new(csv_file::CsvFileStorage::new(path))),
        // Dry run: start from what is on disk but never write back
        StorageMedium::Mem => {
            let mut seed = Vec::new();
            if let Err(e) = csv_file::CsvFileStorage::new(path).load_into(&mut seed) {
                warn!(
                    "event=seed module=storage status=error loaded={} error={}",
                    seed.len(),
                    e
                );
            }
            Ok(Box::new(memory::MemStorage::with_contacts(seed)))
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
