//! Read-only symbol lookups over one generated snapshot.

use std::fmt;
use std::sync::OnceLock;

use crate::links::{LinkResolver, NoOverrides, module_name, page_stem};
use crate::snapshot::Snapshot;

/// Error from a symbol lookup.
///
/// A miss is a normal, recoverable outcome — callers typically render it
/// as "no documentation available" and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("symbol `{0}` is not in the index")]
    NotFound(String),
}

/// Answers "where is this symbol defined?" over an immutable snapshot.
///
/// The snapshot is fixed at construction; every method is a pure read,
/// so a locator can be shared across threads without coordination.
pub struct SymbolLocator {
    snapshot: Snapshot,
    resolver: Box<dyn LinkResolver>,
}

impl SymbolLocator {
    /// Locator over `snapshot` with no custom link overrides.
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_resolver(snapshot, Box::new(NoOverrides))
    }

    /// Locator over `snapshot` with a custom [`LinkResolver`].
    pub fn with_resolver(snapshot: Snapshot, resolver: Box<dyn LinkResolver>) -> Self {
        Self { snapshot, resolver }
    }

    /// Shared locator over the embedded builtin snapshot.
    pub fn builtin() -> &'static SymbolLocator {
        static BUILTIN: OnceLock<SymbolLocator> = OnceLock::new();
        BUILTIN.get_or_init(|| SymbolLocator::new(Snapshot::builtin().clone()))
    }

    /// Notebook that defines `symbol`.
    pub fn lookup_unit(&self, symbol: &str) -> Result<&str, LookupError> {
        self.snapshot
            .index
            .get(symbol)
            .map(String::as_str)
            .ok_or_else(|| LookupError::NotFound(symbol.to_string()))
    }

    /// Whether `symbol` is in the index.
    pub fn contains(&self, symbol: &str) -> bool {
        self.snapshot.index.contains_key(symbol)
    }

    /// Number of indexed symbols.
    pub fn len(&self) -> usize {
        self.snapshot.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.index.is_empty()
    }

    /// All indexed symbol names, in no particular order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.snapshot.index.keys().map(String::as_str)
    }

    /// Symbols defined by `unit`, sorted by name.
    ///
    /// Empty for units the index never mentions.
    pub fn symbols_in(&self, unit: &str) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .snapshot
            .index
            .iter()
            .filter(|(_, u)| u.as_str() == unit)
            .map(|(s, _)| s.as_str())
            .collect();
        symbols.sort_unstable();
        symbols
    }

    /// Compiled module names, verbatim, in generation order.
    pub fn list_modules(&self) -> &[String] {
        &self.snapshot.modules
    }

    /// Root of the hosted documentation site.
    pub fn doc_root(&self) -> &str {
        &self.snapshot.doc_url
    }

    /// Root for browsing source files in the repository.
    pub fn repo_root(&self) -> &str {
        &self.snapshot.git_url
    }

    /// Custom documentation link for `symbol`, if the configured resolver
    /// defines one. Total for arbitrary input.
    pub fn resolve_custom_link(&self, symbol: &str) -> Option<String> {
        self.resolver.resolve(symbol)
    }

    /// Documentation link for `symbol`: the custom override if one is
    /// defined, otherwise the generated site page with the symbol as
    /// anchor.
    pub fn doc_link(&self, symbol: &str) -> Result<String, LookupError> {
        if let Some(link) = self.resolve_custom_link(symbol) {
            return Ok(link);
        }
        let unit = self.lookup_unit(symbol)?;
        Ok(format!(
            "{}{}.html#{}",
            self.snapshot.doc_url,
            page_stem(unit),
            symbol
        ))
    }

    /// Repository link to the compiled module that exports `symbol`.
    pub fn source_link(&self, symbol: &str) -> Result<String, LookupError> {
        let unit = self.lookup_unit(symbol)?;
        Ok(format!("{}{}", self.snapshot.git_url, module_name(unit)))
    }

    /// Units referenced by the index whose compiled module is missing
    /// from the module list, sorted and deduplicated.
    ///
    /// Referential consistency between the two tables is expected from
    /// the exporter but not enforced here; a non-empty result is a
    /// diagnostic, not an error.
    pub fn unlisted_units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = self
            .snapshot
            .index
            .values()
            .filter(|unit| {
                let module = module_name(unit);
                !self.snapshot.modules.iter().any(|m| *m == module)
            })
            .map(String::as_str)
            .collect();
        units.sort_unstable();
        units.dedup();
        units
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl fmt::Debug for SymbolLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolLocator")
            .field("symbols", &self.snapshot.index.len())
            .field("modules", &self.snapshot.modules)
            .finish_non_exhaustive()
    }
}
