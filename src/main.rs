use chrono::NaiveDate;
use clap::Parser;
use taskboard::application::add_task::address_book;
use taskboard::application::init::{init, seed_store};
use taskboard::application::register::register;
use taskboard::application::{AddTaskService, BoardService, ConfigService};
use taskboard::cli::{
    format_board, format_categories, format_contacts, format_palette, format_task, CategoryAction,
    Cli, Commands,
};
use taskboard::domain::{find_contact, Priority, TaskDraft, TaskStatus, User};
use taskboard::error::{BoardError, Result};
use taskboard::infrastructure::logging::{init_logging, DEFAULT_LOG_LEVEL};
use taskboard::infrastructure::{Backend, Config, KeyValueStore, Workspace};
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

/// Discover the workspace and start logging at its level
fn open_workspace() -> Result<Workspace> {
    let workspace = Workspace::discover()?;
    start_logging(&workspace.config().log_level);
    Ok(workspace)
}

fn open_store() -> Result<Box<dyn KeyValueStore>> {
    open_workspace()?.open_store()
}

fn start_logging(level: &str) {
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn parse_status(s: &str) -> Result<TaskStatus> {
    TaskStatus::from_str(s).map_err(BoardError::InvalidValue)
}

fn parse_priority(s: &str) -> Result<Priority> {
    Priority::from_str(s).map_err(BoardError::InvalidValue)
}

/// Empty input clears the date.
fn parse_due_date(s: &str) -> Result<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            BoardError::InvalidValue(format!(
                "Invalid due date: '{}'. Expected YYYY-MM-DD",
                s
            ))
        })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init {
            path,
            backend,
            url,
            token,
            seed,
        }) => {
            start_logging(DEFAULT_LOG_LEVEL);

            let mut config = Config::new(Backend::from_str(&backend).map_err(BoardError::Config)?);
            if let Some(url) = url {
                config.url = url;
            }
            config.token = token;

            let seeded = init(&path, &config, seed)?;

            println!("Initialized taskboard at {}", path.display());
            println!("Backend: {}", config.backend);
            if !seeded.is_empty() {
                println!("Seeded: {}", seeded.join(", "));
            }
            Ok(())
        }
        Some(Commands::Seed { force }) => {
            let seeded = seed_store(&open_store()?, force)?;
            if seeded.is_empty() {
                println!("Nothing seeded: every document already exists");
                println!("Use 'taskboard seed --force' to overwrite");
            } else {
                println!("Seeded: {}", seeded.join(", "));
            }
            Ok(())
        }
        Some(Commands::Show { search }) => {
            let service = BoardService::open(open_store()?)?;
            let board = service.board();
            let columns = match search.as_deref() {
                Some(query) => board.search(query),
                None => board.columns(),
            };
            print!("{}", format_board(&columns));
            Ok(())
        }
        Some(Commands::View { index }) => {
            let service = BoardService::open(open_store()?)?;
            let task = service.task(index)?;
            print!(
                "{}",
                format_task(index, task, service.board().label_color(index))
            );
            Ok(())
        }
        Some(Commands::Add {
            title,
            description,
            due,
            priority,
            category,
            assign,
            subtasks,
            done_subtasks,
            status,
        }) => {
            let status = parse_status(&status)?;
            let mut service = AddTaskService::open(open_store()?)?;

            let mut draft = TaskDraft::new(&title, &description);
            if let Some(due) = due {
                draft.due_date = parse_due_date(&due)?;
            }
            if let Some(priority) = priority {
                draft.set_priority(parse_priority(&priority)?);
            }
            if let Some(category) = category {
                draft.set_category(&category);
            }
            for name in &assign {
                let contact = service.resolve_contact(name)?;
                if !draft.assign(&contact) {
                    eprintln!("Skipping {}: already assigned or list full", contact.name);
                }
            }
            for name in &subtasks {
                draft.add_subtask(name, false);
            }
            for name in &done_subtasks {
                draft.add_subtask(name, true);
            }

            let index = service.create_task(draft, status)?;
            println!("Task added to board: [{}] {}", index, title);
            Ok(())
        }
        Some(Commands::Edit {
            index,
            title,
            description,
            due,
            priority,
            assign,
            unassign,
            check,
            uncheck,
        }) => {
            let store = open_store()?;
            let contacts = address_book(&store)?;
            let mut service = BoardService::open(store)?;

            let mut draft = TaskDraft::from_task(service.task(index)?);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(due) = due {
                draft.due_date = parse_due_date(&due)?;
            }
            if let Some(priority) = priority {
                draft.set_priority(parse_priority(&priority)?);
            }
            for name in &unassign {
                let assigned = find_contact(draft.assigned(), name)
                    .map(|c| c.name.clone())
                    .ok_or_else(|| BoardError::UnknownContact(name.clone()))?;
                draft.unassign(&assigned);
            }
            for name in &assign {
                let contact = find_contact(&contacts, name)
                    .ok_or_else(|| BoardError::UnknownContact(name.clone()))?;
                if !draft.assign(contact) {
                    eprintln!("Skipping {}: already assigned or list full", contact.name);
                }
            }
            for (positions, checked) in [(&check, true), (&uncheck, false)] {
                for &n in positions {
                    if !draft.set_checked(n, checked) {
                        return Err(BoardError::InvalidValue(format!(
                            "Task {} has no subtask {}",
                            index, n
                        )));
                    }
                }
            }

            service.save_changes(index, &draft)?;
            print!(
                "{}",
                format_task(index, service.task(index)?, service.board().label_color(index))
            );
            Ok(())
        }
        Some(Commands::Move { index, status }) => {
            let status = parse_status(&status)?;
            let mut service = BoardService::open(open_store()?)?;
            service.move_task(index, status)?;
            println!("Moved task [{}] to {}", index, status.label());
            Ok(())
        }
        Some(Commands::Delete { index }) => {
            let mut service = BoardService::open(open_store()?)?;
            let removed = service.delete_task(index)?;
            println!("Deleted task [{}] {}", index, removed.title);
            Ok(())
        }
        Some(Commands::Category { action }) => {
            let mut service = AddTaskService::open(open_store()?)?;
            match action {
                CategoryAction::List => {
                    println!("{}", format_categories(service.categories()).trim_end());
                }
                CategoryAction::Add { name, color } => {
                    let added = service.add_category(&name, &color)?;
                    println!("Added category {} ({})", added.name, added.color);
                }
                CategoryAction::Palette => {
                    print!("{}", format_palette());
                }
                CategoryAction::Remove { index } => {
                    let removed = service.remove_category(index)?;
                    println!("Removed category {}", removed.name);
                }
            }
            Ok(())
        }
        Some(Commands::Contacts) => {
            let contacts = address_book(&open_store()?)?;
            println!("{}", format_contacts(&contacts).trim_end());
            Ok(())
        }
        Some(Commands::Register {
            name,
            email,
            password,
        }) => {
            let store = open_store()?;
            let count = register(&store, User::new(&name, &email, &password))?;
            println!("Registered {} ({} users)", name, count);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let mut service = ConfigService::new(open_workspace()?);

            if list {
                let config = service.list();
                println!("backend = {}", config.backend);
                println!("url = {}", config.url);
                println!(
                    "token = {}",
                    if config.token.is_some() { "(set)" } else { "(unset)" }
                );
                println!("path = {}", config.path.display());
                println!("log_level = {}", config.log_level);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: taskboard config [--list | <key> [<value>]]");
                println!("Valid keys: backend, url, token, path, log_level");
                Ok(())
            }
        }
        None => {
            println!("taskboard - Kanban task board backed by a key-value store");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
