//! Text and JSON rendering for every result the tool produces.
//!
//! Text output keeps the wording operators already know from the floor
//! terminals. JSON output is the same data through `serde`.

use colored::Colorize;
use serde::Serialize;

use crate::battery::SampleOutcome;
use crate::catalog::CatalogIndex;
use crate::decoder::{DecodedLabel, LabelFields};
use crate::diagnostics::{self, DESCRIPTION_PREVIEW_CHARS, Diagnostics, SimilarProducts};
use crate::search::{LISTING_PREVIEW, SearchResults, SupplierGroup};

const RULE_WIDTH: usize = 60;

/// A decoded label plus the hints computed for it when nothing matched.
#[derive(Debug, Clone, Serialize)]
pub struct LabelReport<'a> {
    pub input: String,
    #[serde(flatten)]
    pub label: DecodedLabel<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

impl<'a> LabelReport<'a> {
    pub fn new(input: &str, label: DecodedLabel<'a>, index: &CatalogIndex) -> Self {
        let diagnostics = match (&label.error, label.code()) {
            (Some(_), Some(code)) => Some(diagnostics::diagnose(code, index)),
            _ => None,
        };
        Self {
            input: input.to_string(),
            label,
            diagnostics,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleReport<'a> {
    pub name: &'static str,
    #[serde(flatten)]
    pub report: LabelReport<'a>,
}

impl<'a> SampleReport<'a> {
    pub fn new(outcome: SampleOutcome<'a>, index: &CatalogIndex) -> Self {
        Self {
            name: outcome.sample.name,
            report: LabelReport::new(outcome.sample.code, outcome.label, index),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingReport<'a> {
    pub unique_codes: usize,
    pub groups: Vec<SupplierGroup<'a>>,
}

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn banner() -> String {
    let title = "║     FERRAMENTA DE DEBUG - Sistema de Inventário          ║";
    format!(
        "{}\n{}\n{}\n",
        "╔══════════════════════════════════════════════════════════╗".cyan().bold(),
        title.cyan().bold(),
        "╚══════════════════════════════════════════════════════════╝".cyan().bold(),
    )
}

pub fn catalog_summary(index: &CatalogIndex) -> String {
    format!(
        "{}\n{}\n",
        format!("✓ {} produtos carregados", index.record_count()).green(),
        format!("✓ {} códigos únicos no índice", index.len()).green(),
    )
}

pub fn render_label(report: &LabelReport<'_>) -> String {
    let label = &report.label;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "═".repeat(RULE_WIDTH).bold()));
    out.push_str(&format!("{} {}\n", "CÓDIGO:".bold(), report.input));
    out.push_str(&format!("{} {} dígitos\n", "TAMANHO:".bold(), label.length));
    out.push_str(&format!("{} {}\n", "TIPO:".bold(), label.format().name()));
    out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH)));

    match &label.fields {
        LabelFields::Litoral {
            code,
            quantity,
            control,
            ..
        } => {
            out.push_str(&format!("{}\n", "Estrutura LITORAL (33 dígitos):".cyan()));
            out.push_str(&format!("  Posição 5-12  (código):     {}\n", code.yellow()));
            out.push_str(&format!(
                "  Posição 14-18 (quantidade): {}\n",
                format!("{quantity} MT").yellow()
            ));
            out.push_str(&format!("  Posição 19-32 (controle):   {}\n", control.dimmed()));
            out.push_str(&format!("  Cor: {}\n", "MANUAL (operador digita)".yellow()));
        }
        LabelFields::Eurotextil {
            po,
            code,
            color,
            sequence,
            quantity,
            ..
        } => {
            out.push_str(&format!(
                "{}\n",
                "Estrutura EUROTEXTIL GS1 (45 dígitos):".blue()
            ));
            out.push_str(&format!("  Posição 2-7   (PO):         {}\n", po.dimmed()));
            out.push_str(&format!("  Posição 11-17 (código):     {}\n", code.yellow()));
            out.push_str(&format!(
                "  Posição 27-29 (cor):        {}\n",
                format!("#{color}").yellow()
            ));
            out.push_str(&format!("  Posição 31-35 (sequência):  {}\n", sequence.dimmed()));
            out.push_str(&format!(
                "  Posição 37-41 (quantidade): {}\n",
                format!("{quantity} MT").yellow()
            ));
        }
        LabelFields::Unknown => {}
    }

    out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH)));

    if let Some(error) = &label.error {
        out.push_str(&format!("{}\n", format!("✗ ERRO: {error}").red().bold()));
        if let Some(diag) = &report.diagnostics {
            out.push_str(&render_diagnostics(diag));
        }
    } else if let Some(hit) = label.product() {
        out.push_str(&format!("{}\n", "✓ SUCESSO!".green().bold()));
        out.push_str(&format!(
            "  Método de busca: {}\n",
            hit.method.to_string().cyan()
        ));
        if let Some(base) = &hit.base_used {
            out.push_str(&format!("  Base usada: {base}\n"));
        }
        let p = hit.record;
        out.push_str(&format!("\n{}\n", "Produto encontrado:".bold()));
        out.push_str(&format!("  Código:    {}\n", p.product_code));
        out.push_str(&format!("  Descrição: {}\n", p.description));
        out.push_str(&format!("  ERP:       {} - {}\n", p.erp_code, p.erp_name));
        out.push_str(&format!("  Fornecedor: {}\n", p.supplier_group));
    }

    out.push_str(&format!("{}\n\n", "═".repeat(RULE_WIDTH)));
    out
}

pub fn render_diagnostics(diag: &Diagnostics) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Sugestões:".yellow()));
    out.push_str(&format!("  1. Código sem zeros: {}\n", diag.stripped));
    for t in &diag.truncations {
        out.push_str(&format!("  {}. Base (corte {}): {}\n", t.cut, t.cut, t.base));
    }

    out.push_str(&format!("\n{}\n", "Produtos similares no banco:".yellow()));
    match &diag.similar {
        SimilarProducts::Found { products } => {
            for p in products {
                out.push_str(&format!(
                    "  - {}: {} {}\n",
                    p.code,
                    p.description,
                    format!("(ERP: {} - {})", p.erp_code, p.erp_name).dimmed()
                ));
            }
        }
        SimilarProducts::NoneFound => {
            out.push_str(&format!(
                "  {}\n",
                format!("Nenhum produto encontrado com \"{}\"", diag.base_search).dimmed()
            ));
        }
    }
    out
}

pub fn render_battery(samples: &[SampleReport<'_>]) -> String {
    let mut out = format!("\n{}\n\n", "EXECUTANDO TESTES AUTOMÁTICOS".bold());
    for sample in samples {
        out.push_str(&format!("{}\n", format!("Testando: {}", sample.name).dimmed()));
        out.push_str(&render_label(&sample.report));
    }
    out
}

pub fn render_search(results: &SearchResults<'_>) -> String {
    let mut out = format!("\n{}\n\n", format!("Buscando: \"{}\"", results.term).bold());

    for hit in &results.hits {
        let p = hit.record;
        out.push_str(&format!("{}\n", hit.code.yellow()));
        out.push_str(&format!("  {}\n", p.description));
        out.push_str(&format!(
            "  {}\n",
            format!("ERP: {} - {}", p.erp_code, p.erp_name).dimmed()
        ));
        out.push_str(&format!(
            "  {}\n\n",
            format!("Fornecedor: {}", p.supplier_group).dimmed()
        ));
    }

    if results.capped {
        out.push_str(&format!(
            "{}\n",
            format!("... e mais resultados (mostrando {})", results.hits.len()).dimmed()
        ));
    }

    if results.hits.is_empty() {
        out.push_str(&format!("{}\n", "Nenhum produto encontrado".red()));
    } else {
        out.push_str(&format!(
            "{}\n",
            format!("{} produto(s) encontrado(s)", results.hits.len()).green()
        ));
    }
    out
}

pub fn render_listing(listing: &ListingReport<'_>) -> String {
    let mut out = format!(
        "\n{}\n",
        format!("TODOS OS PRODUTOS ({})", listing.unique_codes).bold()
    );

    for group in &listing.groups {
        out.push_str(&format!(
            "\n{}\n",
            format!(
                "{} ({} produtos)",
                group.supplier.name(),
                group.products.len()
            )
            .bold()
        ));
        out.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH)));
        for hit in group.products.iter().take(LISTING_PREVIEW) {
            let preview: String = hit
                .record
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_CHARS)
                .collect();
            out.push_str(&format!("  {} - {}\n", hit.code.yellow(), preview));
        }
        if group.products.len() > LISTING_PREVIEW {
            out.push_str(&format!(
                "  {}\n",
                format!("... e mais {}", group.products.len() - LISTING_PREVIEW).dimmed()
            ));
        }
    }
    out
}

pub fn layout_help() -> String {
    format!(
        "\n{}\n{}\n\n{}\n{}\n",
        "ESTRUTURA LITORAL (33 dígitos):".bold(),
        "┌─────────┬─────────┬───┬─────────┬────────────────┐
│ 0-4     │ 5-12    │13 │ 14-18   │ 19-32          │
│ Prefixo │ Código  │   │ Qtd MT  │ Controle       │
└─────────┴─────────┴───┴─────────┴────────────────┘
Cor: MANUAL",
        "ESTRUTURA EUROTEXTIL GS1 (45 dígitos, começa com 01):".bold(),
        "┌────┬───────┬─────┬────────┬──────────┬─────┬───┬───────┬───┬───────┬─────┐
│0-1 │ 2-7   │8-10 │ 11-17  │ 18-26    │27-29│30 │ 31-35 │36 │ 37-41 │42-44│
│ 01 │ PO    │     │ Código │          │ Cor │   │ Seq   │   │ Qtd   │     │
└────┴───────┴─────┴────────┴──────────┴─────┴───┴───────┴───┴───────┴─────┘
Cor: AUTOMÁTICA",
    )
}
