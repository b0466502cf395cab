use crate::{
    cli::{self, shell},
    logging,
    prelude::{
        AddressBook, AppError,
        command::{Cli, Commands, row_to_index},
        storage::{self, StorageMedium},
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::info;

pub fn run_app() -> Result<(), AppError> {
    // A .env file may carry the ADDRESS_BOOK_* fallbacks
    dotenv().ok();

    let cli = Cli::parse();

    logging::init_logging(&cli.log_level)?;

    let medium = StorageMedium::from(&cli.storage)?;
    let store = storage::parse_storage_type(medium, &cli.file)?;

    info!(
        "event=open module=run medium={} path={}",
        medium.is_which(),
        cli.file.display()
    );

    let mut book = AddressBook::open(store);

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            job,
        } => {
            book.add(name, phone, email, job)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(book.list())?);
                return Ok(());
            }

            cli::print_contacts(book.list());
            Ok(())
        }

        Commands::Update {
            index,
            name,
            phone,
            email,
            job,
        } => {
            book.update(row_to_index(index), name, phone, email, job)?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { index } => {
            book.delete(row_to_index(index))?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Shell => shell::run_shell(&mut book),
    }
}
