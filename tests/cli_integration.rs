use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_label-probe");

fn write_catalog(dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
    let path = dir.join("depra.json");
    std::fs::write(
        &path,
        r#"[
  {"codigo_produto": 4170, "produto": "HELANCA LIGHT", "cod_erp": "E1", "nome_erp": "Helanca", "fornecedor": "LITORAL GROUP"},
  {"codigo_produto": "326", "produto": "SATIN INDONESIA", "cod_erp": "E2", "nome_erp": "Satin", "fornecedor": "LITORAL GROUP"},
  {"codigo_produto": 5142100, "produto": "CREPE AMANDA", "cod_erp": "E3", "nome_erp": "Crepe", "fornecedor": "EURO TEXTIL"}
]"#,
    )?;
    Ok(path)
}

fn run(args: &[&str]) -> anyhow::Result<std::process::Output> {
    Ok(Command::new(BIN)
        .args(args)
        .env_remove("LABEL_PROBE_CATALOG")
        .env("NO_COLOR", "1")
        .output()?)
}

fn run_json(args: &[&str]) -> anyhow::Result<Value> {
    let out = run(args)?;
    if !out.status.success() {
        return Err(anyhow::anyhow!(
            "command failed: status={:?}, stderr={}",
            out.status.code(),
            String::from_utf8_lossy(&out.stderr)
        ));
    }
    Ok(serde_json::from_slice(&out.stdout)?)
}

#[test]
fn bare_label_decodes_and_matches() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_catalog(dir.path())?;
    let catalog = catalog.to_string_lossy();

    let value = run_json(&[
        "--catalog",
        &catalog,
        "--format",
        "json",
        "000004170000000012300099887766554",
    ])?;

    assert_eq!(value["format"], "LITORAL");
    assert_eq!(value["length"], 33);
    assert_eq!(value["code"], "41700000");
    assert_eq!(value["quantity"], 123.0);
    assert_eq!(value["requires_manual_color"], true);
    assert_eq!(value["product"]["method"], "normalized");
    assert_eq!(value["product"]["base_used"], "417");
    assert_eq!(value["product"]["record"]["description"], "HELANCA LIGHT");
    assert!(value["error"].is_null());
    Ok(())
}

#[test]
fn eurotextil_miss_carries_diagnostics() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_catalog(dir.path())?;
    let catalog = catalog.to_string_lossy();

    let value = run_json(&[
        "--catalog",
        &catalog,
        "-f",
        "json",
        "decode",
        "010000000006691030000000000025000010010000000",
    ])?;

    assert_eq!(value["format"], "EUROTEXTIL");
    assert_eq!(value["color"], "25");
    assert_eq!(value["sequence"], "10");
    assert_eq!(value["error"]["kind"], "product_not_found");
    assert_eq!(value["diagnostics"]["stripped"], "6691030");
    assert_eq!(value["diagnostics"]["similar"]["status"], "none_found");
    Ok(())
}

#[test]
fn wrong_prefix_is_unknown() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_catalog(dir.path())?;
    let catalog = catalog.to_string_lossy();

    let value = run_json(&[
        "--catalog",
        &catalog,
        "-f",
        "json",
        "020000000005142100000000000012000010005000000",
    ])?;

    assert_eq!(value["format"], "UNKNOWN");
    assert_eq!(value["error"]["kind"], "unknown_format");
    assert_eq!(value["error"]["length"], 45);
    assert!(value.get("diagnostics").is_none());
    Ok(())
}

#[test]
fn legacy_search_flag_and_listing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_catalog(dir.path())?;
    let catalog = catalog.to_string_lossy();

    let found = run_json(&["--catalog", &catalog, "-f", "json", "--buscar", "satin"])?;
    assert_eq!(found["hits"][0]["code"], "326");

    let listing = run_json(&["--catalog", &catalog, "-f", "json", "list"])?;
    assert_eq!(listing["unique_codes"], 3);
    assert_eq!(listing["groups"][1]["supplier"], "EUROTEXTIL");

    let battery = run_json(&["--catalog", &catalog, "-f", "json", "--testes"])?;
    assert_eq!(battery[0]["product"]["method"], "prefix_3");
    assert_eq!(battery[3]["product"]["method"], "exact");
    Ok(())
}

#[test]
fn text_shell_reads_stdin() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let catalog = write_catalog(dir.path())?;

    let mut child = Command::new(BIN)
        .arg("--catalog")
        .arg(&catalog)
        .arg("--no-color")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or_else(|| anyhow::anyhow!("stdin not piped"))?
        .write_all(b"010000000005142100000000000012000010005000000\nsair\n")?;
    let out = child.wait_with_output()?;
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("3 produtos carregados"));
    assert!(stdout.contains("TIPO: EUROTEXTIL"));
    assert!(stdout.contains("Método de busca: exact"));
    assert!(stdout.contains("Até logo!"));
    Ok(())
}

#[test]
fn missing_catalog_is_fatal() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope.json");
    let out = run(&["--catalog", &missing.to_string_lossy(), "0123"])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.json"));
    Ok(())
}
