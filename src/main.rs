use chrono::Utc;
use clap::Parser;
use moodlog::application::{init, list_entries, today_view, ConfigService, MoodTracker, MoodTrackerProps};
use moodlog::cli::{format_entry_list, format_today_list, parse_at_millis, parse_date, Cli, Commands};
use moodlog::domain::{tags, MoodEntry};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{FileSystemRepository, StorageMode};
use std::cell::Cell;
use std::rc::Rc;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path, storage }) => {
            // Parse storage mode string to enum
            let storage_mode = StorageMode::from_str(&storage).map_err(MoodlogError::Config)?;

            init::init(&path, storage_mode)
        }
        Some(Commands::Log {
            mood,
            note,
            tags: tag_list,
            at,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;

            let timestamp = match at {
                Some(stamp) => parse_at_millis(&stamp)?,
                None => Utc::now().timestamp_millis(),
            };

            // Explicit --tags plus any #hashtags written in the note
            let explicit = tag_list
                .as_deref()
                .map(tags::parse_tag_list)
                .unwrap_or_default();
            let from_note = note.as_deref().map(tags::extract_tags).unwrap_or_default();
            let merged = tags::merge_tags(explicit, from_note);

            let mut entry = MoodEntry::new(mood, timestamp).with_tags(merged);
            if let Some(text) = note {
                entry = entry.with_note(text);
            }

            let mut tracker = MoodTracker::new(
                store,
                MoodTrackerProps {
                    entries: None,
                    on_mood_save: Some(Box::new(|logged: &MoodEntry| {
                        println!("Logged mood {}/5", logged.mood);
                    })),
                },
            )?;

            let count = Rc::new(Cell::new(0usize));
            let observed = Rc::clone(&count);
            tracker
                .store_mut()
                .subscribe(move |entries| observed.set(entries.len()));

            tracker.log_mood(entry)?;

            println!("{} entries total", count.get());
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;

            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;

            let entries = list_entries::list_entries(store.entries(), from, to, limit);
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Today) => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;

            let todays = today_view::today_view(&store);
            println!("{}", format_today_list(&todays));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("storage = {}", format!("{:?}", config.storage).to_lowercase());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: storage, created");
                Ok(())
            }
        }
        Some(Commands::Clear) => {
            let repo = FileSystemRepository::discover()?;
            let mut store = repo.open_store()?;

            store.set(Vec::new())?;
            println!("Cleared all mood entries");
            Ok(())
        }
        None => {
            println!("moodlog - Terminal mood tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
