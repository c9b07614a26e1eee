use anyhow::Result;
use clap::{Parser, Subcommand};

use session_store::cli::{
    handle_clear, handle_config, handle_history, handle_list_command, handle_obfuscation,
    handle_raw, handle_show, handle_var_command, ListCommands, VarCommands,
};
use session_store::config::{Obfuscation, SessionPaths, Settings};
use session_store::diagnostics::JournalDiagnostics;
use session_store::storage::FilePersistence;
use session_store::SessionStore;

#[derive(Parser)]
#[command(
    name = "session",
    version,
    about = "Inspect and edit session-store files",
    long_about = "Reads and writes the lists and variables kept in a session-store \
                  file. Files live in the platform data directory, or under \
                  SESSION_STORE_DATA_DIR when that is set."
)]
struct Cli {
    /// Logical session name (stored as <data dir>/data/<name>.txt)
    #[arg(short, long, global = true, default_value = "session")]
    file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every list and variable
    Show,

    /// Print the session file exactly as stored
    Raw,

    /// List commands
    #[command(subcommand)]
    List(ListCommands),

    /// Variable commands
    #[command(subcommand)]
    Var(VarCommands),

    /// Obfuscate the session file and keep it obfuscated
    Encrypt,

    /// Store the session file as plain text again
    Decrypt,

    /// Delete all lists and variables
    Clear,

    /// Show or change the configuration
    Config {
        /// When to write: on-change or manual
        #[arg(long)]
        save_mode: Option<String>,
        /// Diagnostics verbosity: all, important or nothing
        #[arg(long)]
        log_mode: Option<String>,
        /// File obfuscation: plain or encrypted
        #[arg(long)]
        obfuscation: Option<String>,
    },

    /// Show recent diagnostics from the journal
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only show entries at this level or above (info, warn, error)
        #[arg(long)]
        level: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SessionPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Config {
            save_mode,
            log_mode,
            obfuscation,
        }) => {
            handle_config(&paths, &mut settings, save_mode, log_mode, obfuscation)?;
            return Ok(());
        }
        Some(Commands::History { limit, level }) => {
            handle_history(&paths, limit, level)?;
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("session - inspect and edit session-store files");
            println!();
            println!("Run 'session --help' for usage information.");
            return Ok(());
        }
    };

    let mut store = SessionStore::new(
        settings,
        paths.clone(),
        Box::new(FilePersistence::new()),
        Box::new(JournalDiagnostics::new(paths.journal_file())),
    );
    store.open(&cli.file)?;

    let mutated = match command {
        Commands::Show => {
            handle_show(&store)?;
            false
        }
        Commands::Raw => {
            handle_raw(&store)?;
            false
        }
        Commands::List(cmd) => {
            let mutates = cmd.mutates();
            handle_list_command(&mut store, cmd)?;
            mutates
        }
        Commands::Var(cmd) => {
            let mutates = cmd.mutates();
            handle_var_command(&mut store, cmd)?;
            mutates
        }
        Commands::Encrypt => {
            handle_obfuscation(&paths, &mut store, Obfuscation::Encrypted)?;
            false
        }
        Commands::Decrypt => {
            handle_obfuscation(&paths, &mut store, Obfuscation::Plain)?;
            false
        }
        Commands::Clear => {
            handle_clear(&mut store)?;
            false
        }
        Commands::Config { .. } | Commands::History { .. } => false,
    };

    // Manual save mode would otherwise drop the change on exit
    if mutated {
        store.save()?;
    }

    Ok(())
}
