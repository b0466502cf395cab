pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn display_contact(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:15} {:^30} {:<15}",
        contact.name, contact.phone_number, contact.email, contact.job
    )
}

pub fn display_header() -> String {
    format!(
        "{:>3}  {:<20} {:15} {:^30} {:<15}",
        "#", "Name", "Phone Number", "Email", "Job"
    )
}

pub fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contact yet");
        return;
    }

    println!("{}", display_header());
    for (i, c) in contacts.iter().enumerate() {
        println!("{}", display_contact(i + 1, c));
    }
}

pub fn prompt(label: &str) -> Result<(), AppError> {
    print!("{label}: ");
    io::stdout().flush()?;
    Ok(())
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    // Only the line ending is stripped; field values are taken as typed
    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

pub fn get_input_as_int() -> Result<usize, AppError> {
    Ok(get_input()?.trim().parse::<usize>()?)
}
