use serde::Serialize;

/// Outcome of a decode that did not produce a matched product.
///
/// These are data, not failures: they travel inside a
/// [`DecodedLabel`](crate::decoder::DecodedLabel) and the caller decides how
/// to show them. The display strings are what operators see on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelError {
    #[error("Código inválido ({length} dígitos, esperado 33 ou 45)")]
    UnknownFormat { length: usize },

    #[error("Produto {code} não encontrado")]
    ProductNotFound { code: String },
}
