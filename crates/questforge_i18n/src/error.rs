use std::path::PathBuf;

use thiserror::Error;

use crate::linguist::MalformedCatalog;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Malformed(#[from] MalformedCatalog),

    #[error("cannot read catalog `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no catalog found for locale `{locale}`")]
    MissingCatalog { locale: String },
}
