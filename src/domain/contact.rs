use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of columns in a persisted record.
pub const FIELD_COUNT: usize = 4;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub job: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn fields_req() -> String {
        "Please enter all fields.".to_string()
    }

    pub fn name_req() -> String {
        "Invalid name. Name should not contain numbers.".to_string()
    }

    pub fn phone_req() -> String {
        "Invalid phone number. Phone number should only contain numbers.".to_string()
    }
}

impl Contact {
    pub fn new(name: String, phone_number: String, email: String, job: String) -> Self {
        Contact {
            name,
            phone_number,
            email,
            job,
        }
    }

    /// Builds a contact from one persisted row. Rows of any other width yield `None`.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [name, phone_number, email, job] = <[String; FIELD_COUNT]>::try_from(fields).ok()?;
        Some(Contact::new(name, phone_number, email, job))
    }

    /// Fields in persisted column order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.name.as_str(),
            self.phone_number.as_str(),
            self.email.as_str(),
            self.job.as_str(),
        ]
    }

    pub fn has_empty_field(&self) -> bool {
        self.fields().iter().any(|f| f.is_empty())
    }

    pub fn validate_name(&self) -> Result<bool, AppError> {
        // Any ASCII digit anywhere rejects the name
        let re = Regex::new(r"[0-9]")?;
        Ok(!re.is_match(&self.name))
    }

    pub fn validate_number(&self) -> Result<bool, AppError> {
        // One or more digits and nothing else: no spaces, dashes or leading '+'
        let re = Regex::new(r"^[0-9]+$")?;
        Ok(re.is_match(&self.phone_number))
    }

    /// Checks run in a fixed order and the first failure is reported.
    /// Email and job only need to be non-empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.has_empty_field() {
            return Err(AppError::Validation(ValidationReq::fields_req()));
        }

        if !self.validate_name()? {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if !self.validate_number()? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        Ok(())
    }
}
