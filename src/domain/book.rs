//! The contact store: an ordered, in-memory list of contacts mirrored to a
//! backing store after every mutation.
//!
//! Contacts have no identity beyond their position. Callers select a record
//! by its zero-based index; `None` stands for "nothing selected".

use super::*;
use log::{debug, error, info, warn};

pub struct AddressBook {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl AddressBook {
    /// Creates an empty store that has not read its backing file yet.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            contacts: Vec::new(),
            storage,
        }
    }

    /// Creates a store and loads it. A failed load is logged and the store
    /// keeps whatever records were read before the failure.
    pub fn open(storage: Box<dyn ContactStore>) -> Self {
        let mut book = Self::new(storage);

        if let Err(e) = book.load() {
            error!(
                "event=load module=book status=error medium={} loaded={} error={}",
                book.storage.medium(),
                book.contacts.len(),
                e
            );
        }
        book
    }

    /// Replaces the in-memory list with the contents of the backing store.
    pub fn load(&mut self) -> Result<&[Contact], AppError> {
        self.contacts.clear();
        self.storage.load_into(&mut self.contacts)?;

        debug!(
            "event=load module=book status=ok medium={} loaded={}",
            self.storage.medium(),
            self.contacts.len()
        );
        Ok(&self.contacts)
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn add(
        &mut self,
        name: String,
        phone_number: String,
        email: String,
        job: String,
    ) -> Result<(), AppError> {
        let contact = Contact::new(name, phone_number, email, job);
        contact.validate()?;

        self.contacts.push(contact);
        info!("event=add module=book index={}", self.contacts.len() - 1);

        self.persist()
    }

    pub fn update(
        &mut self,
        index: Option<usize>,
        name: String,
        phone_number: String,
        email: String,
        job: String,
    ) -> Result<(), AppError> {
        let index = self.selected(index, "Please select a contact to update.")?;

        let contact = Contact::new(name, phone_number, email, job);
        contact.validate()?;

        self.contacts[index] = contact;
        info!("event=update module=book index={}", index);

        self.persist()
    }

    pub fn delete(&mut self, index: Option<usize>) -> Result<(), AppError> {
        let index = self.selected(index, "Please select a contact to delete.")?;

        self.contacts.remove(index);
        info!("event=delete module=book index={}", index);

        self.persist()
    }

    fn selected(&self, index: Option<usize>, msg: &str) -> Result<usize, AppError> {
        match index {
            Some(i) if i < self.contacts.len() => Ok(i),
            _ => {
                warn!(
                    "event=select module=book status=rejected index={:?} len={}",
                    index,
                    self.contacts.len()
                );
                Err(AppError::Selection(msg.to_string()))
            }
        }
    }

    // The in-memory change is kept even when the write fails.
    fn persist(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts).inspect_err(|e| {
            error!(
                "event=persist module=book status=error medium={} records={} error={}",
                self.storage.medium(),
                self.contacts.len(),
                e
            );
        })
    }
}
