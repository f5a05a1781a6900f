use clap::Parser;
use songbook::application::{
    load_note, ConfigService, EditService, ExportService, InitService, PreferencesService,
};
use songbook::cli::{
    format_preferences, format_pro, format_section_list, format_simple, Cli, Commands,
    ExportFormat, SectionAction, ToggleTarget,
};
use songbook::domain::{Document, Mode, ProDocument, SectionKind, SimpleDocument};
use songbook::error::SongbookError;
use songbook::infrastructure::launcher::open_uri;
use songbook::infrastructure::{FileStore, FileSystemRepository, SongbookRepository};
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

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

/// `-` stands for the whole of stdin, minus one trailing newline
fn read_value(raw: String) -> Result<String, SongbookError> {
    if raw != "-" {
        return Ok(raw);
    }

    let mut value = String::new();
    io::stdin().read_to_string(&mut value)?;
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    Ok(value)
}

fn set_field<D: Document>(store: &FileStore, field: &str, value: &str) -> Result<(), SongbookError> {
    let field = D::Field::from_str(field)?;
    EditService::<D>::open(store).set_field(field, value)?;
    Ok(())
}

fn edit_image<D: Document>(
    store: &FileStore,
    path: Option<&Path>,
    remove: bool,
) -> Result<(), SongbookError> {
    let mut service = EditService::<D>::open(store);
    if remove {
        service.remove_image()?;
        println!("Removed image");
    } else if let Some(path) = path {
        service.attach_image(Some(path))?;
        println!("Attached {}", path.display());
    } else {
        let state = if service.document().image_data_url().is_some() {
            "attached"
        } else {
            "none"
        };
        println!("Image: {}", state);
    }
    Ok(())
}

fn run_section(store: &FileStore, action: SectionAction) -> Result<(), SongbookError> {
    let mut service = EditService::<ProDocument>::open(store);

    match action {
        SectionAction::Add { kind } => {
            let kind = SectionKind::parse(&kind);
            let doc = service.add_section(kind.clone())?;
            println!("Added {} at index {}", kind, doc.sections.len() - 1);
        }
        SectionAction::Edit { index, content } => {
            let content = read_value(content)?;
            service.update_section(index, &content)?;
            println!("Updated section {}", index);
        }
        SectionAction::Remove { index } => {
            service.remove_section(index)?;
            println!("Removed section {}", index);
        }
        SectionAction::List => {
            print!("{}", format_section_list(&service.document().sections));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), SongbookError> {
    let command = match cli.command {
        Some(Commands::Init { path }) => {
            let repo = InitService::execute(&path)?;
            println!("Initialized songbook in {}", repo.root().display());
            return Ok(());
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("recipient = {}", config.recipient);
                println!(
                    "export_dir = {}",
                    config
                        .export_dir
                        .as_ref()
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default()
                );
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: songbook config [--list | <key> [<value>]]");
                println!("Valid keys: recipient, export_dir, created");
            }
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("songbook - Songwriting notebook for lyrics and song sheets");
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    let repo = FileSystemRepository::discover()?;
    let store = repo.store();
    let prefs_service = PreferencesService::new(store.clone());
    let prefs = prefs_service.load();

    match command {
        Commands::Show => {
            let output = match prefs.mode {
                Mode::Simple => {
                    format_simple(EditService::<SimpleDocument>::open(&store).document(), prefs.theme)
                }
                Mode::Pro => {
                    format_pro(EditService::<ProDocument>::open(&store).document(), prefs.theme)
                }
            };
            print!("{}", output);
        }
        Commands::Set { field, value } => {
            let value = read_value(value)?;
            match prefs.mode {
                Mode::Simple => set_field::<SimpleDocument>(&store, &field, &value)?,
                Mode::Pro => set_field::<ProDocument>(&store, &field, &value)?,
            }
            println!("Updated {}", field);
        }
        Commands::Image { path, remove } => match prefs.mode {
            Mode::Simple => edit_image::<SimpleDocument>(&store, path.as_deref(), remove)?,
            Mode::Pro => edit_image::<ProDocument>(&store, path.as_deref(), remove)?,
        },
        Commands::Clear => {
            match prefs.mode {
                Mode::Simple => {
                    EditService::<SimpleDocument>::open(&store).clear()?;
                }
                Mode::Pro => {
                    EditService::<ProDocument>::open(&store).clear()?;
                }
            }
            println!("Cleared {} note", prefs.mode);
        }
        Commands::Section { action } => {
            if prefs.mode != Mode::Pro {
                return Err(SongbookError::ProModeOnly("section".to_string()));
            }
            run_section(&store, action)?;
        }
        Commands::Export { format, out } => {
            let note = load_note(&store, prefs.mode);
            let service = ExportService::new(repo.root().to_path_buf(), repo.load_config()?);
            let path = match format {
                ExportFormat::Txt => service.export_text(&note, out.as_deref())?,
                ExportFormat::Pdf => service.export_pdf(&note, out.as_deref())?,
            };
            println!("Exported {}", path.display());
        }
        Commands::Mail { open } => {
            let note = load_note(&store, prefs.mode);
            let service = ExportService::new(repo.root().to_path_buf(), repo.load_config()?);
            let uri = service.mail_uri(&note);
            println!("{}", uri);
            if open {
                open_uri(&uri)?;
            }
        }
        Commands::Copy => {
            let note = load_note(&store, prefs.mode);
            let service = ExportService::new(repo.root().to_path_buf(), repo.load_config()?);
            // A missing clipboard is reported but does not fail the command
            match service.copy(&note) {
                Ok(()) => println!("Copied to clipboard"),
                Err(e) => eprintln!("Could not copy: {}", e.display_with_suggestions()),
            }
        }
        Commands::Toggle { target } => match target {
            ToggleTarget::Mode => println!("mode = {}", prefs_service.toggle_mode()?),
            ToggleTarget::Theme => println!("theme = {}", prefs_service.toggle_theme()?),
        },
        Commands::Prefs => {
            print!("{}", format_preferences(&prefs));
        }
        Commands::Init { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
