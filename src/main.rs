use chrono::{Local, NaiveDateTime};
use clap::Parser;
use quicklist::application::{init, ConfigService, ListWidget, MoodJournal};
use quicklist::cli::{format_entries, format_mood_summary, join_text, Cli, Commands};
use quicklist::domain::{ListKind, Mood, MOOD_TIME_FORMAT};
use quicklist::error::{QuickListError, Result};
use quicklist::infrastructure::{FileStore, FileSystemRepository, WorkspaceRepository};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quicklist=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("quicklist - Quick list and mood journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, list } => {
            let kind = ListKind::from_str(&list).map_err(QuickListError::Config)?;
            init::init(&path, kind)
        }
        Commands::Add { text, list } => {
            let mut widget = open_widget(list.as_deref())?;
            let text = join_text(&text);
            widget.on_add(&text)?;
            println!("Added to {} list: {}", widget.kind(), text);
            Ok(())
        }
        Commands::Toggle { text } => {
            let mut widget = open_widget(Some("quick"))?;
            let text = join_text(&text);
            match widget.on_toggle(&text)? {
                Some(true) => println!("Completed: {}", text),
                Some(false) => println!("Reopened: {}", text),
                None => println!("No entry matching '{}'", text),
            }
            Ok(())
        }
        Commands::Done { text } => set_completed(&join_text(&text), true),
        Commands::Undone { text } => set_completed(&join_text(&text), false),
        Commands::Remove { text, list } => {
            let mut widget = open_widget(list.as_deref())?;
            let text = join_text(&text);
            match widget.on_delete(&text)? {
                0 => println!("No entry matching '{}'", text),
                1 => println!("Removed: {}", text),
                n => println!("Removed {} entries: {}", n, text),
            }
            Ok(())
        }
        Commands::Show { list } => {
            let widget = open_widget(list.as_deref())?;
            let rows = widget.rows()?;
            print!("{}", format_entries(widget.kind(), &rows));
            if rows.is_empty() {
                println!();
            }

            if widget.kind() == ListKind::Mood {
                let journal = MoodJournal::new(open_store()?);
                if let Some(summary) = format_mood_summary(&journal.entries()?) {
                    println!("{}", summary);
                }
            }
            Ok(())
        }
        Commands::Mood { mood, at } => {
            let mood = Mood::from_str(&mood).map_err(QuickListError::Config)?;
            let at = match at {
                Some(raw) => NaiveDateTime::parse_from_str(raw.trim(), MOOD_TIME_FORMAT)
                    .map_err(|_| {
                        QuickListError::Validation(format!(
                            "invalid timestamp '{}', expected YYYY-MM-DD HH:MM",
                            raw
                        ))
                    })?,
                None => Local::now().naive_local(),
            };

            let mut journal = MoodJournal::new(open_store()?);
            let text = journal.record(mood, at)?;
            println!("Logged: {}", text);
            Ok(())
        }
        Commands::Clear { list } => {
            let mut widget = open_widget(list.as_deref())?;
            widget.clear()?;
            println!("Cleared {} list", widget.kind());
            Ok(())
        }
        Commands::Config {
            key,
            value,
            list_all,
        } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list_all {
                let config = service.list()?;
                println!("default_list = {}", config.default_list);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: quicklist config [--list-all | <key> [<value>]]");
                println!("Valid keys: default_list, created");
                Ok(())
            }
        }
    }
}

fn open_store() -> Result<FileStore> {
    FileSystemRepository::discover()?.open_store()
}

/// Open the named list, or the configured default when none is named
fn open_widget(list: Option<&str>) -> Result<ListWidget<FileStore>> {
    let repo = FileSystemRepository::discover()?;
    let store = repo.open_store()?;
    let kind = match list {
        Some(name) => ListKind::from_str(name).map_err(QuickListError::Config)?,
        None => repo.load_config()?.default_list,
    };
    Ok(ListWidget::new(kind, store))
}

fn set_completed(text: &str, completed: bool) -> Result<()> {
    let mut widget = open_widget(Some("quick"))?;
    if widget.on_set_completed(text, completed)? {
        let state = if completed { "done" } else { "not done" };
        println!("Marked {}: {}", state, text);
    } else {
        println!("No entry matching '{}'", text);
    }
    Ok(())
}
