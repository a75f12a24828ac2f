use clap::{Parser, Subcommand};
use contacts::core::config::{self, StoreKind};
use contacts::{store, tui, web};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io;

#[derive(Parser)]
#[command(name = "contacts", about = "Search and create contacts over HTTP or in the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the contacts page over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        bind: Option<String>,
        /// Contact store backend
        #[arg(short, long, value_enum)]
        store: Option<StoreKind>,
    },
    /// Browse contacts in the terminal
    Browse {
        /// Contact store backend
        #[arg(short, long, value_enum)]
        store: Option<StoreKind>,
    },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match &args.command {
        // The terminal belongs to the UI, so browse logs to contacts.log
        Command::Browse { .. } => {
            if let Ok(log_file) = File::create("contacts.log") {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
            }
        }
        Command::Serve { .. } => {
            let _ = TermLogger::init(
                LevelFilter::Info,
                log_config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            );
        }
    }

    let file_config = config::load_config().map_err(|e| {
        log::error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
    })?;

    match args.command {
        Command::Serve { bind, store } => {
            let resolved = config::resolve(&file_config, bind.as_deref(), store);
            log::info!("Contacts starting up: serve on {} ({:?} store)", resolved.bind, resolved.store);
            let store = store::build_store(&resolved).await.map_err(to_io)?;
            web::serve(&resolved.bind, web::AppState::new(store)).await
        }
        Command::Browse { store } => {
            let resolved = config::resolve(&file_config, None, store);
            log::info!("Contacts starting up: browse ({:?} store)", resolved.store);
            let store = store::build_store(&resolved).await.map_err(to_io)?;
            tui::run(store, resolved.search_debounce)
        }
    }
}

fn to_io(e: store::StoreError) -> io::Error {
    log::error!("Failed to open contact store: {}", e);
    io::Error::other(e.to_string())
}
