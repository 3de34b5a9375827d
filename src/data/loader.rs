use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Corpus, Document};

/// Errors raised while reading an export tree.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("export root {} does not exist", .0.display())]
    MissingRoot(PathBuf),

    #[error("export root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no .{extension} files found below {}", .root.display())]
    NoDocuments { root: PathBuf, extension: String },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),
}

type Result<T> = core::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one transcription per immediate subdirectory of `root`.
///
/// Expected layout (as produced by the transcription tool's text export):
///
/// ```text
/// export_job_xxxx/
///   doc_a/  ARCHIVE_SIG_1.txt
///   doc_b/  ARCHIVE_SIG_2.txt   (plus metadata files, ignored)
/// ```
///
/// Subdirectories and their files are visited in name order; the first file
/// ending in `.<extension>` wins. Its key is the file name up to the first `.`.
pub fn load_corpus(root: &Path, extension: &str) -> Result<Corpus> {
    if !root.exists() {
        return Err(LoadError::MissingRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LoadError::NotADirectory(root.to_path_buf()));
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut corpus = Corpus::default();

    for dir in sorted_entries(root)? {
        if !dir.is_dir() {
            continue;
        }
        let Some(file) = first_matching_file(&dir, &suffix)? else {
            log::debug!("{}: no {suffix} file, skipped", dir.display());
            continue;
        };

        let doc = read_document(&file)?;
        log::debug!(
            "read {} ({} chars) as '{}'",
            file.display(),
            doc.text.chars().count(),
            doc.key
        );
        if let Some(old) = corpus.insert(doc) {
            log::warn!(
                "duplicate document key '{}': {} replaced by {}",
                old.key,
                old.source.display(),
                file.display()
            );
        }
    }

    if corpus.is_empty() {
        return Err(LoadError::NoDocuments {
            root: root.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        });
    }
    Ok(corpus)
}

/// Key for a transcription file: file name text before the first `.`.
pub fn document_key(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Remove line breaks; they are layout, not transcribed signs.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

// -- helpers --

fn read_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8(path.to_path_buf()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document {
        key: document_key(&file_name).to_string(),
        text: strip_line_breaks(&raw),
        source: path.to_path_buf(),
    })
}

fn first_matching_file(dir: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    Ok(sorted_entries(dir)?.into_iter().find(|p| {
        p.is_file()
            && p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(suffix))
    }))
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_err)?;
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, text: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn key_is_text_before_first_dot() {
        assert_eq!(document_key("NL_207_0123.tr.txt"), "NL_207_0123");
        assert_eq!(document_key("plain"), "plain");
    }

    #[test]
    fn strips_lf_and_crlf() {
        assert_eq!(strip_line_breaks("ab\ncd\r\nef"), "abcdef");
    }

    #[test]
    fn loads_first_txt_per_subdirectory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write(&root.join("d1/b.txt"), "second\n");
        write(&root.join("d1/a.txt"), "first\nline");
        write(&root.join("d1/meta.xml"), "<xml/>");
        write(&root.join("d2/S2.x.txt"), "other");
        write(&root.join("d3/readme.md"), "ignored");
        write(&root.join("top.txt"), "not in a subfolder");

        let corpus = load_corpus(root, "txt").unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.documents["a"].text, "firstline");
        assert_eq!(corpus.documents["S2"].text, "other");
    }

    #[test]
    fn missing_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_corpus(&tmp.path().join("nope"), "txt").unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot(_)));
    }

    #[test]
    fn empty_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();
        let err = load_corpus(tmp.path(), ".txt").unwrap_err();
        assert!(matches!(err, LoadError::NoDocuments { .. }));
        assert!(err.to_string().contains(".txt files"));
    }

    #[test]
    fn invalid_utf8_names_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("d/bad.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = load_corpus(tmp.path(), "txt").unwrap_err();
        assert!(matches!(err, LoadError::InvalidUtf8(p) if p == path));
    }
}
