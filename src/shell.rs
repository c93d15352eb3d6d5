//! Line-oriented interactive prompt.
//!
//! One command per line, answered synchronously before the next read. The
//! loop is generic over its streams so it can be driven from tests.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::catalog::CatalogIndex;
use crate::cli::OutputFormat;
use crate::commands;
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Empty,
    Quit,
    Battery,
    List,
    Help,
    Search(&'a str),
    Decode(&'a str),
    Unrecognized,
}

pub fn parse_command(line: &str) -> ShellCommand<'_> {
    let cmd = line.trim();
    match cmd {
        "" => ShellCommand::Empty,
        "sair" | "exit" | "q" => ShellCommand::Quit,
        "testes" => ShellCommand::Battery,
        "listar" => ShellCommand::List,
        "ajuda" => ShellCommand::Help,
        _ => {
            if let Some(term) = cmd.strip_prefix("buscar ") {
                ShellCommand::Search(term)
            } else if cmd.chars().all(|c| c.is_ascii_digit()) {
                ShellCommand::Decode(cmd)
            } else {
                ShellCommand::Unrecognized
            }
        }
    }
}

fn intro() -> String {
    let rule = "═══════════════════════════════════════════════════════════";
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", rule.cyan().bold()));
    out.push_str(&format!(
        "{}\n",
        "    MODO INTERATIVO - Sistema de Inventário Debug".cyan().bold()
    ));
    out.push_str(&format!("{}\n", rule.cyan().bold()));
    out.push_str("\nComandos:\n");
    out.push_str(&format!("  {}     - Testar um código de barras\n", "[código]".yellow()));
    out.push_str(&format!("  {} - Buscar produto por nome/código\n", "buscar TERMO".yellow()));
    out.push_str(&format!("  {}       - Rodar todos os testes automáticos\n", "testes".yellow()));
    out.push_str(&format!("  {}       - Listar todos os produtos\n", "listar".yellow()));
    out.push_str(&format!("  {}        - Mostrar estrutura dos códigos\n", "ajuda".yellow()));
    out.push_str(&format!("  {}         - Sair\n\n", "sair".yellow()));
    out
}

/// Free-form text for the operator. In JSON mode it is wrapped so the
/// output stays a stream of JSON documents.
fn notice(message: String, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(message),
        OutputFormat::Json => report::to_json(&serde_json::json!({ "message": message })),
    }
}

pub fn run<R, W>(index: &CatalogIndex, format: OutputFormat, input: R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if format == OutputFormat::Text {
        write!(out, "{}", intro())?;
    }

    let text = format == OutputFormat::Text;
    let mut lines = input.lines();
    loop {
        if text {
            write!(out, "{}", "> ".cyan())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            if text {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;

        let response = match parse_command(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => {
                if text {
                    writeln!(out, "Até logo!")?;
                }
                break;
            }
            ShellCommand::Battery => commands::battery_output(index, format)?,
            ShellCommand::List => commands::list_output(index, format)?,
            ShellCommand::Search(term) => commands::search_output(term, index, format)?,
            ShellCommand::Decode(digits) => commands::decode_output(digits, index, format)?,
            ShellCommand::Help => notice(report::layout_help(), format)?,
            ShellCommand::Unrecognized => notice(
                "Comando não reconhecido. Digite 'ajuda' para ver opções."
                    .yellow()
                    .to_string(),
                format,
            )?,
        };

        tracing::debug!(line = %line.trim(), "shell command handled");
        writeln!(out, "{}", response.trim_end_matches('\n'))?;
    }

    Ok(())
}
