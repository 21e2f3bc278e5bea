mod filemanager;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lib_pal::characters::{self, find_character, full_name, SEARCH_NAMES};
use lib_pal::{init_logging, Record};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "palgrim", about = "Inspect, edit and preview character palette files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the metadata and colors of a .cfpl or .impl file
    Info {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Apply a palette file to an indexed source image and write a PNG
    Recolor {
        palette: PathBuf,
        image: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Change metadata of a palette file
    Edit {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Character id or search alias
        #[arg(long)]
        character: Option<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List known characters, or resolve one search term
    Characters { query: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    init_logging(level, cli.log_file.as_deref()).context("Failed to set up logging")?;

    match cli.command {
        Command::Info { file, json } => info(&file, json),
        Command::Recolor {
            palette,
            image,
            output,
        } => {
            let record = filemanager::open_container(&palette)?;
            filemanager::recolor_file(&record.palette, &image, &output)?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        Command::Edit {
            file,
            name,
            author,
            description,
            character,
            output,
        } => {
            let edits = filemanager::MetadataEdits {
                name,
                author,
                description,
                character_id: character.as_deref().map(resolve_character).transpose()?,
            };
            filemanager::edit_container(&file, &output, edits)?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        Command::Characters { query } => {
            match query {
                Some(query) => {
                    let id = find_character(&query)
                        .with_context(|| format!("No character matches \"{}\"", query))?;
                    print_character(id);
                }
                None => (0..SEARCH_NAMES.len() as u8).for_each(print_character),
            }
            Ok(())
        }
    }
}

fn info(file: &Path, json: bool) -> Result<()> {
    let record: Record = filemanager::open_container(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Name:        {}", record.name);
    println!("Author:      {}", record.author);
    println!("Description: {}", record.description);
    println!(
        "Character:   {} ({})",
        record.character_id,
        full_name(record.character_id).unwrap_or("unknown")
    );
    for (index, color) in record.palette.iter().enumerate() {
        let [r, g, b, a] = color.to_array();
        println!("{:3}: #{:02x}{:02x}{:02x}{:02x}", index, r, g, b, a);
    }
    Ok(())
}

/// Accepts a raw id (any byte) or a search alias.
fn resolve_character(value: &str) -> Result<u8> {
    if let Ok(id) = value.parse::<u8>() {
        return Ok(id);
    }
    match find_character(value) {
        Some(id) => Ok(id),
        None => bail!("Unknown character \"{}\"", value),
    }
}

fn print_character(id: u8) {
    let aliases = characters::search_names(id).unwrap_or_default();
    println!(
        "{:2}  {:24} {}",
        id,
        full_name(id).unwrap_or("unknown"),
        aliases.join(", ")
    );
}
