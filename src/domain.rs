pub mod book;
pub mod contact;

use crate::errors::AppError;
use crate::storage::ContactStore;

pub use book::AddressBook;
pub use contact::{Contact, ValidationReq};
