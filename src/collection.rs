//! Directory loading: every matching CSV file in a directory becomes a page.
//!
//! Files are discovered with [`walkdir`] and matched by file name against a [`glob`] pattern,
//! then parsed on a dedicated [`rayon`] worker pool. Each file is read independently, so pages
//! never share state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use walkdir::WalkDir;

use crate::config::PageConfig;
use crate::error::{ParserError, ParserResult};
use crate::ingestion::{CsvPageParser, PageRequest, ParseOptions};
use crate::types::PageContent;

/// Configuration for [`load_collection`].
#[derive(Debug, Clone)]
pub struct CollectionOptions {
    /// Glob matched against file names (default `*.csv`).
    pub pattern: String,
    /// Walk subdirectories as well.
    pub recursive: bool,
    /// Number of worker threads.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Configuration for pages without an entry in `page_configs`.
    pub default_config: Option<PageConfig>,
    /// Per-page configuration keyed by page name.
    pub page_configs: BTreeMap<String, PageConfig>,
    /// Keep loading when a page fails, collecting failures instead of returning the first one.
    pub skip_failed_pages: bool,
    /// Options for the underlying page parser.
    pub parse: ParseOptions,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            pattern: "*.csv".to_string(),
            recursive: false,
            num_threads: None,
            default_config: None,
            page_configs: BTreeMap::new(),
            skip_failed_pages: false,
            parse: ParseOptions::default(),
        }
    }
}

impl CollectionOptions {
    /// The configuration applied to page `name`, if any.
    pub fn config_for(&self, name: &str) -> Option<&PageConfig> {
        self.page_configs.get(name).or(self.default_config.as_ref())
    }
}

/// A loaded CSV page.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvPage {
    /// Path relative to the collection directory, using `/` separators.
    pub name: String,
    /// Full path to the CSV file.
    pub path: PathBuf,
    /// Parsed rows and (empty) text body.
    pub content: PageContent,
}

/// A page that failed to load while `skip_failed_pages` was set.
#[derive(Debug)]
pub struct PageFailure {
    pub name: String,
    pub path: PathBuf,
    pub error: ParserError,
}

/// Pages loaded from a directory, sorted by name.
#[derive(Debug, Default)]
pub struct CsvCollection {
    pub pages: Vec<CsvPage>,
    pub failures: Vec<PageFailure>,
}

impl CsvCollection {
    /// Look up a page by name.
    pub fn get(&self, name: &str) -> Option<&CsvPage> {
        self.pages.iter().find(|p| p.name == name)
    }

    /// Iterate page names in order.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Find files under `dir` whose file name matches `pattern`.
///
/// Returns `(name, path)` pairs sorted by name, where `name` is relative to `dir`.
pub fn discover_csv_files(
    dir: impl AsRef<Path>,
    pattern: &str,
    recursive: bool,
) -> ParserResult<Vec<(String, PathBuf)>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(ParserError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ParserError::Config {
            message: format!("collection path is not a directory ({})", dir.display()),
        });
    }

    let matcher = glob::Pattern::new(pattern).map_err(|e| ParserError::Config {
        message: format!("invalid file pattern '{pattern}': {e}"),
    })?;

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth)
    {
        let entry = entry.map_err(|e| ParserError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if !matcher.matches(&file_name) {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        found.push((name, entry.path().to_path_buf()));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// Load every matching CSV file in `dir` as a page.
///
/// Every discovered page is parsed (observers see a callback for each one). Without
/// `skip_failed_pages`, the load then returns the error of the first failing page in name order
/// and no pages.
///
/// ```no_run
/// use csv_pages::collection::{load_collection, CollectionOptions};
///
/// # fn main() -> Result<(), csv_pages::ParserError> {
/// let pages = load_collection("content/data", &CollectionOptions::default())?;
/// for name in pages.page_names() {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn load_collection(dir: impl AsRef<Path>, options: &CollectionOptions) -> ParserResult<CsvCollection> {
    let files = discover_csv_files(dir, &options.pattern, options.recursive)?;
    let requests: Vec<(String, PageRequest)> = files
        .into_iter()
        .map(|(name, path)| {
            let config = options.config_for(&name).cloned();
            (name, PageRequest::new(path, config))
        })
        .collect();

    let n_threads = options
        .num_threads
        .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
        .max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()
        .map_err(|e| ParserError::ThreadPool {
            message: e.to_string(),
        })?;

    let parser = CsvPageParser::new(options.parse.clone());
    let results: Vec<(String, PathBuf, ParserResult<PageContent>)> = pool.install(|| {
        requests
            .into_par_iter()
            .map(|(name, req)| {
                let result = req.run(&parser);
                (name, req.path, result)
            })
            .collect()
    });

    let mut collection = CsvCollection::default();
    for (name, path, result) in results {
        match result {
            Ok(content) => collection.pages.push(CsvPage { name, path, content }),
            Err(error) if options.skip_failed_pages => {
                collection.failures.push(PageFailure { name, path, error })
            }
            Err(error) => return Err(error),
        }
    }

    Ok(collection)
}
