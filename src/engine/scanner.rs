//! Class candidate scanning.

use std::path::Path;

use super::compiler::{CandidateSet, ScanSource};
use super::EngineError;
use crate::resource::read_text;

/// Extracts class-name candidates from the sources a compiler reports.
pub trait CandidateScanner: Send + Sync {
    /// Scan every non-negated source.
    fn scan(&self, sources: &[ScanSource]) -> Result<CandidateSet, EngineError>;
}

/// Built-in scanner: every token that could be a utility class.
///
/// Splits text on characters that never occur in a class name and keeps
/// what is left. Over-matching is fine: the compiler ignores tokens that
/// are not utilities. Only sources naming a single existing file are read;
/// glob patterns are left to a real scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScanner;

impl CandidateScanner for TokenScanner {
    fn scan(&self, sources: &[ScanSource]) -> Result<CandidateSet, EngineError> {
        let mut candidates = CandidateSet::new();
        for source in sources.iter().filter(|s| !s.negated) {
            let path = source.path();
            if !path.is_file() {
                log::debug!("not scanning {}: not a file", path.display());
                continue;
            }
            let content = match read_text(&path) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("not scanning {}: {e}", path.display());
                    continue;
                }
            };
            extend_candidates(&mut candidates, &content);
        }
        Ok(candidates)
    }
}

impl TokenScanner {
    /// Scan a single file.
    pub fn scan_file(&self, path: &Path) -> Result<CandidateSet, EngineError> {
        self.scan(&[ScanSource::file(path)])
    }
}

/// Add every candidate token in `text` to `candidates`.
pub fn extend_candidates(candidates: &mut CandidateSet, text: &str) {
    for token in text.split(|c: char| !is_class_char(c)) {
        let token = token.trim_end_matches(['.', ':', ',', ')']);
        if is_candidate(token) {
            candidates.insert(token.to_owned());
        }
    }
}

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | ':' | '/' | '.' | '[' | ']' | '#' | '%' | '!' | '@' | '(' | ')')
}

fn is_candidate(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= 256
        && token.bytes().any(|b| b.is_ascii_alphabetic())
        && !token.starts_with(['.', '/', ':', '#'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn candidates(text: &str) -> CandidateSet {
        let mut set = CandidateSet::new();
        extend_candidates(&mut set, text);
        set
    }

    #[test]
    fn test_extracts_variants_and_arbitrary_values() {
        let set = candidates(
            r#"<div class="px-4 mq3:px-6 hover:bg-zinc-200 w-1/2 bg-[#e4e4e7] !mt-0">"#,
        );
        for class in ["px-4", "mq3:px-6", "hover:bg-zinc-200", "w-1/2", "bg-[#e4e4e7]", "!mt-0"] {
            assert!(set.contains(class), "missing {class}");
        }
    }

    #[test]
    fn test_template_literal_boundaries() {
        let set = candidates("html`<slot class=\"text-xl pointer-events-none\"></slot>`");
        assert!(set.contains("text-xl"));
        assert!(set.contains("pointer-events-none"));
    }

    #[test]
    fn test_skips_non_candidates() {
        let set = candidates("  42 ./card.ts :: ...  ");
        assert!(!set.contains("42"));
        assert!(!set.contains("./card.ts"));
        assert!(set.iter().all(|t| !t.starts_with('.')));
    }

    #[test]
    fn test_unreadable_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let card = dir.path().join("card.ts");
        let binary = dir.path().join("card.css");
        fs::write(&card, "const c = \"text-xl\";").unwrap();
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();

        let set = TokenScanner
            .scan(&[ScanSource::file(&binary), ScanSource::file(&card)])
            .unwrap();
        assert!(set.contains("text-xl"));
    }

    #[test]
    fn test_scan_sources() {
        let dir = TempDir::new().unwrap();
        let card = dir.path().join("card.ts");
        let skipped = dir.path().join("skipped.ts");
        fs::write(&card, "const c = \"text-xl rounded-md\";").unwrap();
        fs::write(&skipped, "const c = \"underline\";").unwrap();

        let mut negated = ScanSource::file(&skipped);
        negated.negated = true;
        let sources = [
            ScanSource::file(&card),
            negated,
            ScanSource::file(&dir.path().join("missing.ts")),
        ];

        let set = TokenScanner.scan(&sources).unwrap();
        assert!(set.contains("text-xl"));
        assert!(set.contains("rounded-md"));
        assert!(!set.contains("underline"));
    }
}
