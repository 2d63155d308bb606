//! Parallel priming of the registry.
//!
//! Production builds know every component up front. Priming compiles them
//! in parallel before the host starts calling hooks, so `load` hits a warm
//! registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use super::{importer_key, Plugin};
use crate::diagnostic::PluginError;
use crate::host::WatchList;
use crate::resource::read_text;

/// Outcome of priming one file.
#[derive(Debug)]
pub struct PrimeResult {
    /// The importer.
    pub path: PathBuf,
    /// Stored CSS, `None` if the compiler had nothing to emit.
    pub result: Result<Option<Arc<str>>, PluginError>,
    /// Files the compilation asked to watch.
    pub watch_files: Vec<PathBuf>,
}

impl Plugin {
    /// Compile many importers in parallel.
    ///
    /// Each path is read from disk and checked for eligibility like in
    /// `transform`; ineligible files are left out of the results. Results
    /// keep input order.
    pub fn prime<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<PrimeResult> {
        self.prime_each(paths, |_| {})
    }

    /// Like [`prime`](Self::prime), invoking `on_each` after every file.
    pub fn prime_each<P, F>(&self, paths: &[P], on_each: F) -> Vec<PrimeResult>
    where
        P: AsRef<Path> + Sync,
        F: Fn(&Path) + Sync,
    {
        paths
            .par_iter()
            .filter_map(|path| {
                let path = importer_key(&path.as_ref().to_string_lossy());
                let code = match read_text(&path) {
                    Ok(code) => code,
                    Err(e) => {
                        return Some(PrimeResult {
                            path,
                            result: Err(e),
                            watch_files: Vec::new(),
                        });
                    }
                };
                if !self.is_eligible(&path, &code) {
                    return None;
                }

                let mut watch = WatchList::new();
                let result = self.compile_importer(&path, &code, &mut watch);
                on_each(&path);
                Some(PrimeResult {
                    path,
                    result,
                    watch_files: watch.into_files(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::testing::{fake_plugin, Fixture, CARD_TS};

    #[test]
    fn test_prime_many() {
        let fixture = Fixture::new();
        let card = fixture.write("card.ts", CARD_TS);
        let link = fixture.write(
            "link.ts",
            "import css from \"shadow-tailwind:css\";\nhtml`<a class=\"underline\">`;",
        );
        let plain = fixture.write("plain.ts", "export const x = 1;");
        let missing = fixture.path("missing.ts");
        let plugin = fake_plugin(&fixture);

        let count = AtomicUsize::new(0);
        let results = plugin.prime_each(&[&card, &plain, &link, &missing], |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].path, card);
        assert!(results[0].result.as_ref().unwrap().as_ref().unwrap().contains(".text-xl"));
        assert!(results[0].watch_files.contains(&plugin.entry_path()));
        assert_eq!(results[1].path, link);
        assert!(results[2].result.is_err());
        assert_eq!(count.load(Ordering::Relaxed), 2);

        assert!(plugin.registry().contains(&card));
        assert!(plugin.registry().contains(&link));
        assert!(!plugin.registry().contains(&plain));
    }
}
