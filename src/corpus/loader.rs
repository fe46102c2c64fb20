use crate::corpus::parser::extract_links;
use crate::corpus::Corpus;
use crate::{CorpusError, CorpusResult};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Reads a directory of HTML pages into a corpus
///
/// Every regular file named `*.<extension>` directly inside `directory`
/// becomes a page; its id is the file name. Links leaving the corpus and
/// self-links are dropped.
///
/// # Arguments
///
/// * `directory` - The corpus directory
/// * `extension` - Page file extension without the dot, usually `html`
///
/// # Returns
///
/// * `Ok(Corpus)` - The link graph of the directory
/// * `Err(CorpusError)` - The directory is unreadable or holds no pages
///
/// # Example
///
/// ```no_run
/// use linkrank::corpus::crawl;
/// use std::path::Path;
///
/// let corpus = crawl(Path::new("demos/corpus0"), "html").unwrap();
/// println!("{} pages", corpus.len());
/// ```
pub fn crawl(directory: &Path, extension: &str) -> CorpusResult<Corpus> {
    let metadata = fs::metadata(directory).map_err(io_error(directory))?;
    if !metadata.is_dir() {
        return Err(CorpusError::NotADirectory(directory.to_path_buf()));
    }

    let root = fs::canonicalize(directory).map_err(io_error(directory))?;
    let base_url =
        Url::from_directory_path(&root).map_err(|()| CorpusError::NotADirectory(root.clone()))?;
    let suffix = format!(".{}", extension);

    let mut pages = Vec::new();
    for entry in fs::read_dir(&root).map_err(io_error(&root))? {
        let entry = entry.map_err(io_error(&root))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!("Skipping file with non UTF-8 name: {}", path.display());
            continue;
        };
        if !name.ends_with(&suffix) || !path.is_file() {
            tracing::trace!("Skipping {}", path.display());
            continue;
        }

        let html = fs::read_to_string(&path).map_err(io_error(&path))?;
        let links = extract_links(&html, &base_url);
        tracing::debug!("Parsed {} ({} links)", name, links.len());
        pages.push((name, links));
    }

    if pages.is_empty() {
        return Err(CorpusError::Empty {
            path: root,
            extension: extension.to_string(),
        });
    }

    let corpus = Corpus::from_links(pages);
    tracing::info!(
        "Loaded {} pages with {} in-corpus links from {}",
        corpus.len(),
        corpus.link_count(),
        root.display()
    );
    Ok(corpus)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CorpusError {
    let path: PathBuf = path.to_path_buf();
    move |source| CorpusError::Io { path, source }
}
