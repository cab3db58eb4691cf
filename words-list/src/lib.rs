use std::path::{Path, PathBuf};

/// Characters that separate tokens in a corpus.
pub const SEPARATORS: [char; 8] = [' ', '\t', '\r', '\n', '.', ',', ':', ';'];

#[derive(Debug, thiserror::Error)]
#[error("corpus {} is unavailable: {source}", .path.display())]
pub struct CorpusUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Split `text` into lowercase tokens. Empty pieces between separators are dropped.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(SEPARATORS)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
}

/// Read the file at `path` and tokenize it.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>, CorpusUnavailable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CorpusUnavailable {
        path: path.to_owned(),
        source,
    })?;
    Ok(tokenize(&text).collect())
}
