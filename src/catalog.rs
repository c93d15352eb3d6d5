use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// One product row as exported by the ERP.
///
/// The export is loose about types: `codigo_produto` shows up as a number for
/// most suppliers and as a zero-padded string for others, so every field is
/// coerced to its string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename(deserialize = "codigo_produto"), default, deserialize_with = "lenient_string")]
    pub product_code: String,
    #[serde(rename(deserialize = "produto"), default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename(deserialize = "cod_erp"), default, deserialize_with = "lenient_string")]
    pub erp_code: String,
    #[serde(rename(deserialize = "nome_erp"), default, deserialize_with = "lenient_string")]
    pub erp_name: String,
    #[serde(rename(deserialize = "fornecedor"), default, deserialize_with = "lenient_string")]
    pub supplier_group: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Read-only lookup from literal product code to product.
///
/// Keys are stored exactly as the catalog spells them; zero handling is the
/// matcher's job. Iteration follows first-insertion order, and a duplicate
/// code replaces the earlier record in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: IndexMap<String, ProductRecord>,
    record_count: usize,
}

impl CatalogIndex {
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        let mut entries = IndexMap::new();
        let mut record_count = 0usize;
        for record in records {
            record_count += 1;
            entries.insert(record.product_code.clone(), record);
        }

        let duplicates = record_count - entries.len();
        if duplicates > 0 {
            tracing::debug!(duplicates, "duplicate product codes replaced by later rows");
        }

        Self {
            entries,
            record_count,
        }
    }

    pub fn get(&self, code: &str) -> Option<&ProductRecord> {
        self.entries.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of unique codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows the index was built from, duplicates included.
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<ProductRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Erro ao carregar {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Catálogo inválido (esperado array JSON): {}", path.display()))
}

pub fn load_index(path: &Path) -> Result<CatalogIndex> {
    let index = CatalogIndex::build(load_catalog(path)?);
    tracing::info!(
        path = %path.display(),
        records = index.record_count(),
        unique_codes = index.len(),
        "catalog loaded"
    );
    Ok(index)
}

#[cfg(test)]
pub(crate) fn product(code: &str, description: &str) -> ProductRecord {
    ProductRecord {
        product_code: code.to_string(),
        description: description.to_string(),
        erp_code: format!("E{code}"),
        erp_name: description.to_lowercase(),
        supplier_group: "LITORAL GROUP".to_string(),
    }
}
