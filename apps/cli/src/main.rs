use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use shared::{
    domain::{GuestDraft, GuestId, GuestRecord, SortKey},
    error::SyncError,
};
use sync_client::{
    Confirmation, DeleteOutcome, GuestListView, HttpRecordStore, SyncController,
};

mod config;

#[derive(Parser, Debug)]
#[command(name = "guestdesk", about = "Guest records over a remote record store")]
struct Args {
    /// Record-store base URL; overrides guestdesk.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List guests, with local search and sort.
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// "name" or "email".
        #[arg(long, default_value = "name")]
        sort: SortKey,
    },
    /// Show one guest.
    Show { id: String },
    /// Create a guest and return to the list.
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        /// ISO date (e.g. 1990-04-02); leave empty if unknown.
        #[arg(long, default_value = "")]
        date_of_birth: String,
    },
    /// Edit a guest; omitted flags keep the stored values.
    Edit {
        id: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        date_of_birth: Option<String>,
    },
    /// Delete a guest; prompts for confirmation unless --yes is given.
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings();
    let server_url = args.server_url.unwrap_or(settings.server_url);
    let store = HttpRecordStore::new(&server_url).map_err(|err| anyhow!("{err}"))?;
    let mut controller = SyncController::new(store);

    match args.command {
        Command::List { search, sort } => {
            let records = fetch_list(&mut controller).await?;
            let mut view = GuestListView::new(sort);
            view.set_records(records);
            view.set_search_term(search);
            print_list(view.visible());
        }
        Command::Show { id } => {
            let record = controller
                .fetch_one(&GuestId::new(id), None)
                .await
                .map_err(surface)?;
            print_detail(&record);
        }
        Command::Add {
            first_name,
            last_name,
            email,
            phone,
            address,
            date_of_birth,
        } => {
            let draft = GuestDraft {
                first_name,
                last_name,
                email,
                phone,
                address,
                date_of_birth,
            };
            let created = controller.create(&draft).await.map_err(surface)?;
            println!("Created guest {}", created.id);
            let records = fetch_list(&mut controller).await?;
            print_list(&records);
        }
        Command::Edit {
            id,
            first_name,
            last_name,
            email,
            phone,
            address,
            date_of_birth,
        } => {
            let id = GuestId::new(id);
            let current = controller.fetch_one(&id, None).await.map_err(surface)?;
            let mut draft = GuestDraft::from_record(&current);
            apply(&mut draft.first_name, first_name);
            apply(&mut draft.last_name, last_name);
            apply(&mut draft.email, email);
            apply(&mut draft.phone, phone);
            apply(&mut draft.address, address);
            apply(&mut draft.date_of_birth, date_of_birth);

            let (updated, _reload) = controller.update(&id, &draft).await.map_err(surface)?;
            println!("Saved guest {}", updated.id);
            // The list refetches on return, loading floor included.
            let records = fetch_list(&mut controller).await?;
            print_list(&records);
        }
        Command::Remove { id, yes } => {
            let id = GuestId::new(id);
            let confirmation = if yes {
                Confirmation::Confirmed
            } else {
                confirm_on_stdin(&id)?
            };
            match controller.delete(&id, confirmation).await.map_err(surface)? {
                DeleteOutcome::Cancelled => println!("Deletion cancelled."),
                DeleteOutcome::Deleted(_) => {
                    println!("Deleted guest {id}");
                    let records = fetch_list(&mut controller).await?;
                    print_list(&records);
                }
            }
        }
    }

    Ok(())
}

async fn fetch_list(
    controller: &mut SyncController<HttpRecordStore>,
) -> Result<Vec<GuestRecord>> {
    println!("Loading guests...");
    let records = controller.fetch_all().await.map_err(surface)?;
    Ok(records.to_vec())
}

fn confirm_on_stdin(id: &GuestId) -> Result<Confirmation> {
    print!("Delete guest {id}? This cannot be undone. [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(Confirmation::Confirmed)
    } else {
        Ok(Confirmation::Declined)
    }
}

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn surface(err: SyncError) -> anyhow::Error {
    anyhow!("{}", err.user_message())
}

fn print_list(records: &[GuestRecord]) {
    if records.is_empty() {
        println!("No guests.");
        return;
    }
    for record in records {
        println!("{}  {}  <{}>", record.id, record.full_name(), record.email);
    }
}

fn print_detail(record: &GuestRecord) {
    println!("id:            {}", record.id);
    println!("name:          {}", record.full_name());
    println!("email:         {}", record.email);
    println!("phone:         {}", record.phone);
    println!("address:       {}", record.address);
    println!(
        "date of birth: {}",
        record
            .date_of_birth
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into())
    );
}
