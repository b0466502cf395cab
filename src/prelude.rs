pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::AddressBook,
    contact::{self, Contact, ValidationReq},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, StorageMedium, csv_file::CsvFileStorage, memory::MemStorage,
};
