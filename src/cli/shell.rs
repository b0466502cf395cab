//! Interactive form over the address book. Each action reads its fields,
//! calls the store, and redraws the table. Failures are reported and the
//! menu comes back.

use super::*;
use crate::domain::AddressBook;
use crate::prelude::command::row_to_index;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    AddContact,
    UpdateContact,
    DeleteContact,
    ListContacts,
    Exit,
}

pub fn parse_command(action: &str) -> Result<Command, AppError> {
    match action.trim() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::UpdateContact),
        "3" => Ok(Command::DeleteContact),
        "4" => Ok(Command::ListContacts),
        "5" => Ok(Command::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

fn show_menu() -> Result<(), AppError> {
    println!();
    println!("1. Add Contact");
    println!("2. Update Contact");
    println!("3. Delete Contact");
    println!("4. List Contacts");
    println!("5. Exit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

struct Form {
    name: String,
    phone: String,
    email: String,
    job: String,
}

fn read_form() -> Result<Form, AppError> {
    prompt("Name")?;
    let name = get_input()?;
    prompt("Phone Number")?;
    let phone = get_input()?;
    prompt("Email")?;
    let email = get_input()?;
    prompt("Job")?;
    let job = get_input()?;

    Ok(Form {
        name,
        phone,
        email,
        job,
    })
}

// Anything that is not a row number means nothing is selected
fn read_selection() -> Result<Option<usize>, AppError> {
    prompt("Row number")?;
    match get_input_as_int() {
        Ok(row) => Ok(row_to_index(row)),
        Err(AppError::ParseInt(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

fn dispatch(book: &mut AddressBook, command: Command) -> Result<(), AppError> {
    match command {
        Command::AddContact => {
            let form = read_form()?;
            book.add(form.name, form.phone, form.email, form.job)?;
            println!("Contact added successfully");
        }
        Command::UpdateContact => {
            let index = read_selection()?;
            let form = read_form()?;
            book.update(index, form.name, form.phone, form.email, form.job)?;
            println!("Contact updated successfully");
        }
        Command::DeleteContact => {
            let index = read_selection()?;
            book.delete(index)?;
            println!("Contact deleted successfully");
        }
        Command::ListContacts | Command::Exit => {}
    }
    Ok(())
}

fn is_closed_input(e: &AppError) -> bool {
    matches!(e, AppError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
}

pub fn run_shell(book: &mut AddressBook) -> Result<(), AppError> {
    println!("\n--- ADDRESS BOOK ---");
    print_contacts(book.list());

    loop {
        show_menu()?;

        let action = match get_input() {
            Ok(action) => action,
            Err(e) if is_closed_input(&e) => break,
            Err(e) => return Err(e),
        };

        let command = match parse_command(&action) {
            Ok(Command::Exit) => break,
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        };

        match dispatch(book, command) {
            Ok(()) => {}
            Err(e) if is_closed_input(&e) => break,
            // After a failed save the change stays in memory and the file may be stale
            Err(e) => eprintln!("Error: {e}"),
        }

        print_contacts(book.list());
    }

    println!("\nBye!");
    Ok(())
}
