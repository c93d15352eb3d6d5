use anyhow::Result;
use clap::Parser;
use label_probe::catalog;
use label_probe::cli::{Cli, Commands, OutputFormat};
use label_probe::commands;
use label_probe::config;
use label_probe::report;
use label_probe::shell;
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();
    config::init_logging();
    config::apply_color_choice(&cli);

    let text = cli.format == OutputFormat::Text;
    if text {
        println!("\n{}", report::banner());
    }

    let catalog_path = config::resolve_catalog_path(&cli)?;
    let index = catalog::load_index(&catalog_path)?;
    if text {
        println!("{}", report::catalog_summary(&index));
    }

    match cli.command.clone().unwrap_or(Commands::Shell) {
        Commands::Decode { digits } => {
            let input = digits.concat();
            write_output(&commands::decode_output(&input, &index, cli.format)?);
        }
        Commands::Test => write_output(&commands::battery_output(&index, cli.format)?),
        Commands::Search { term } => {
            write_output(&commands::search_output(&term, &index, cli.format)?)
        }
        Commands::List => write_output(&commands::list_output(&index, cli.format)?),
        Commands::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&index, cli.format, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

fn parse_cli() -> Cli {
    let args: Vec<String> = std::env::args().collect();
    Cli::parse_from(rewrite_args(args))
}

/// Maps the historical `--testes` / `--buscar` / `--listar` flags onto
/// subcommands and turns a bare label into `decode <label>`.
fn rewrite_args(mut args: Vec<String>) -> Vec<String> {
    if args.len() <= 1 {
        return args;
    }

    let subcommands = ["decode", "test", "search", "list", "shell", "help"];

    let mut idx = 1usize;
    while idx < args.len() {
        let a = args[idx].as_str();

        if let Some(sub) = legacy_subcommand(a) {
            args[idx] = sub.to_string();
            return args;
        }

        if a == "--" {
            args[idx] = "decode".to_string();
            return args;
        }

        if a == "--catalog" || a == "--format" || a == "-f" {
            idx += 2;
            continue;
        }

        if a.starts_with('-') {
            idx += 1;
            continue;
        }

        break;
    }

    if idx < args.len() {
        let token = args[idx].as_str();
        if !subcommands.contains(&token) {
            args.insert(idx, "decode".to_string());
        }
    }

    args
}

fn legacy_subcommand(flag: &str) -> Option<&'static str> {
    match flag {
        "--testes" => Some("test"),
        "--buscar" => Some("search"),
        "--listar" => Some("list"),
        _ => None,
    }
}

fn write_output(content: &str) {
    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
}
