use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_cli::cli::{
    handle_add, handle_archive, handle_balances, handle_clear_account, handle_delete,
    handle_export, handle_list, handle_toggle, AddArgs, ExportArgs, ListArgs,
};
use ledger_cli::config::LedgerPaths;
use ledger_cli::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger for a fixed set of accounts",
    long_about = "Tracks balances across Savings, MGO and Fronted, records dated \
                  entries that move money between them, and exports filtered \
                  history as CSV. Deleting an entry exactly reverses its effect."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new entry
    Add(AddArgs),

    /// Show entry history, newest first
    #[command(alias = "history")]
    List(ListArgs),

    /// Show current account balances
    Balances,

    /// Delete an entry and reverse its balance effect
    Delete {
        /// Entry ID (full UUID or the short ent-xxxxxxxx form)
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Toggle an entry's cleared flag
    Toggle {
        /// Entry ID (full UUID or the short ent-xxxxxxxx form)
        id: String,
    },

    /// Reset one account's balance to zero
    ClearAccount {
        /// Account name (savings, mgo, fronted)
        account: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Discard all entry history, keeping balances
    Archive {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export entry history as CSV
    Export(ExportArgs),

    /// Show configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    paths.ensure_directories()?;

    let store = SnapshotStore::new(paths.snapshot_file());
    let mut ledger = store.load()?;

    match cli.command {
        Commands::Add(args) => handle_add(&mut ledger, &store, args)?,
        Commands::List(args) => handle_list(&ledger, args)?,
        Commands::Balances => handle_balances(&ledger)?,
        Commands::Delete { id, yes } => handle_delete(&mut ledger, &store, &id, yes)?,
        Commands::Toggle { id } => handle_toggle(&mut ledger, &store, &id)?,
        Commands::ClearAccount { account, yes } => {
            handle_clear_account(&mut ledger, &store, &account, yes)?;
        }
        Commands::Archive { yes } => handle_archive(&mut ledger, &store, yes)?,
        Commands::Export(args) => handle_export(&ledger, args)?,
        Commands::Config => {
            println!("ledger-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Snapshot file:  {}", paths.snapshot_file().display());
        }
    }

    Ok(())
}
