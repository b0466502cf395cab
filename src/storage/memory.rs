use super::*;

/// Keeps records only in memory. Saving is a no-op.
#[derive(Default)]
pub struct MemStorage {
    pub data: Vec<Contact>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_contacts(data: Vec<Contact>) -> Self {
        Self { data }
    }
}

impl ContactStore for MemStorage {
    fn load_into(&self, contacts: &mut Vec<Contact>) -> Result<(), AppError> {
        contacts.extend(self.data.iter().cloned());
        Ok(())
    }

    fn save(&self, _contacts: &[Contact]) -> Result<(), AppError> {
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
