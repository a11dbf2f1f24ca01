use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::Read;
use std::path::{Path, PathBuf};
use terse::api::{CmdMessage, ConfigAction, MessageLevel, ScrollEntry, TerseApi};
use terse::config::{TerseConfig, KEYS};
use terse::error::Result;
use terse::store::fs::FileStore;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const CONFIG_DIR_ENV: &str = "TERSE_CONFIG_DIR";
const PROJECT_DIR: &str = ".terse";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "terse=debug" } else { "terse=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    api: TerseApi<FileStore>,
    doc: String,
    cwd: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show { coordinate }) => handle_show(&ctx, &coordinate),
        Some(Commands::Write { coordinate, text }) => handle_write(&mut ctx, &coordinate, text),
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Locate { coordinate }) => handle_locate(&ctx, &coordinate),
        Some(Commands::Coord { coordinate }) => handle_coord(&ctx, &coordinate),
        Some(Commands::Export { coordinates }) => handle_export(&ctx, &coordinates),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = resolve_config_dir(&cwd);
    let config = TerseConfig::load(&config_dir)?;
    tracing::debug!(config_dir = %config_dir.display(), ?config, "resolved configuration");

    let store = FileStore::new(cwd.clone()).with_file_ext(config.file_ext());
    let api = TerseApi::new(store, config, config_dir);

    Ok(AppContext {
        api,
        doc: cli.file.clone(),
        cwd,
    })
}

/// `$TERSE_CONFIG_DIR`, then `./.terse/` if it exists, then the platform
/// config directory.
fn resolve_config_dir(cwd: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let project_dir = cwd.join(PROJECT_DIR);
    if project_dir.is_dir() {
        return project_dir;
    }
    ProjectDirs::from("com", "terse", "terse")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(project_dir)
}

fn handle_show(ctx: &AppContext, coordinate: &str) -> Result<()> {
    let result = ctx.api.show(&ctx.doc, coordinate)?;
    for entry in &result.scrolls {
        print!("{}", entry.text);
        if !entry.text.is_empty() && !entry.text.ends_with('\n') {
            println!();
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_write(ctx: &mut AppContext, coordinate: &str, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!(path = %ctx.api.document_path(&ctx.doc).display(), "writing document");
    let result = ctx.api.write(&ctx.doc, coordinate, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list(&ctx.doc, search)?;
    print_scrolls(&result.scrolls, ctx.api.settings().preview_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats(&ctx.doc)?;
    if let Some(stats) = result.stats {
        println!("{} {}", "scrolls".dimmed(), stats.scrolls);
        println!("{} {}", "words".dimmed(), stats.words);
        println!("{} {}", "bytes".dimmed(), stats.bytes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_locate(ctx: &AppContext, coordinate: &str) -> Result<()> {
    let result = ctx.api.locate(&ctx.doc, coordinate)?;
    if let Some(offset) = result.offset {
        println!("{}", offset);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_coord(ctx: &AppContext, coordinate: &str) -> Result<()> {
    let result = ctx.api.coordinate(coordinate)?;
    if let Some(coordinate) = result.coordinate {
        println!("{}", coordinate);
        println!("{}", coordinate.to_dashed().dimmed());
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, coordinates: &[String]) -> Result<()> {
    let result = ctx.api.export(&ctx.doc, coordinates, &ctx.cwd)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config(config: &TerseConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_scrolls(scrolls: &[ScrollEntry], preview_width: usize) {
    for entry in scrolls {
        let preview: String = entry
            .text
            .chars()
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        let preview = truncate_to_width(preview.trim(), preview_width);
        println!("{}  {}", entry.address.yellow(), preview);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
