use super::render::{print_contact_card, print_contact_table, print_messages, print_stats};
use super::setup::{Cli, Commands};
use clap::Parser;
use contactz::api::{ConfigAction, ContactzApi, ContactzPaths};
use contactz::config::ContactzConfig;
use contactz::error::{ContactzError, Result};
use contactz::logging::init_logging;
use contactz::model::{Contact, ContactInput};
use contactz::query::{parse_display_number, CategoryFilter, ContactQuery};
use contactz::store::fs::FileStore;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: ContactzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            phone,
            email,
            category,
        }) => handle_add(&mut ctx, ContactInput::new(name, phone, email, category)),
        Some(Commands::List { category, search }) => handle_list(&ctx, &category, search),
        Some(Commands::Search { term, category }) => handle_list(&ctx, &category, term),
        Some(Commands::Edit {
            number,
            name,
            phone,
            email,
            category,
        }) => handle_edit(&mut ctx, number, name, phone, email, category),
        Some(Commands::Delete { number, yes }) => handle_delete(&mut ctx, number, yes),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Random) => handle_random(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, "All", String::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = ContactzConfig::load(&data_dir)?;
    let store = FileStore::in_dir(&data_dir, &config.data_file);
    tracing::debug!(path = %store.path().display(), "using data file");

    let api = ContactzApi::new(store, ContactzPaths::new(data_dir), config);
    Ok(AppContext { api })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if cli.global {
        let proj_dirs = ProjectDirs::from("com", "contactz", "contactz").ok_or_else(|| {
            ContactzError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn parse_selection(number: Option<&str>) -> Result<Option<usize>> {
    number
        .map(|n| parse_display_number(n).map_err(ContactzError::Api))
        .transpose()
}

fn handle_add(ctx: &mut AppContext, input: ContactInput) -> Result<()> {
    let result = ctx.api.add_contact(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, category: &str, term: String) -> Result<()> {
    let filter: CategoryFilter = category.parse().unwrap_or_default();
    let result = ctx.api.list_contacts(&ContactQuery::new(filter, term));
    print_contact_table(&result.listed_contacts, result.total);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    number: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let selection = parse_selection(number.as_deref())?;

    // Start from the current values, like a prefilled edit form.
    let current = match selection {
        Some(index) => ctx.api.contacts().get(index).map(ContactInput::from_contact),
        None => None,
    };
    let input = match current {
        Some(mut input) => {
            if let Some(v) = name {
                input.name = v;
            }
            if let Some(v) = phone {
                input.phone = v;
            }
            if let Some(v) = email {
                input.email = v;
            }
            if let Some(v) = category {
                input.category = v;
            }
            input
        }
        None => ContactInput::new(
            name.unwrap_or_default(),
            phone.unwrap_or_default(),
            email.unwrap_or_default(),
            category.unwrap_or_default(),
        ),
    };

    let result = ctx.api.edit_contact(selection, input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, number: Option<String>, yes: bool) -> Result<()> {
    let selection = parse_selection(number.as_deref())?;
    let result = ctx
        .api
        .delete_contact(selection, |contact| yes || confirm_delete(contact))?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm_delete(contact: &Contact) -> bool {
    print!("Delete {}? [y/N]: ", contact.name);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.export_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.compute_stats();
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    Ok(())
}

fn handle_random(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.pick_random()?;
    if let Some(contact) = result.affected_contacts.first() {
        print_contact_card("Random Pick", contact);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k @ ("id-style" | "data-file")), None) => ConfigAction::ShowKey(k.to_string()),
        (Some("id-style"), Some(v)) => ConfigAction::SetIdStyle(v.parse()?),
        (Some("data-file"), Some(v)) => ConfigAction::SetDataFile(v),
        (Some(other), _) => {
            return Err(ContactzError::Config(format!(
                "Unknown config key: {}",
                other
            )))
        }
    };

    let show_only = match &action {
        ConfigAction::ShowKey(k) => Some(k.clone()),
        _ => None,
    };
    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if show_only.as_deref() != Some("data-file") {
            println!("id-style = {}", config.id_style);
        }
        if show_only.as_deref() != Some("id-style") {
            println!("data-file = {}", config.data_file);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
