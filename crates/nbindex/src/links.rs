//! Documentation link resolution and the unit-naming conventions behind it.

/// Per-symbol documentation link overrides.
///
/// Consulted before composing a default link, so a symbol documented
/// somewhere other than the generated site (an upstream crate, an
/// external reference page) can point there instead.
pub trait LinkResolver: Send + Sync {
    /// Full replacement URL for `symbol`, or `None` to use the default.
    ///
    /// Must accept arbitrary input, including the empty string and
    /// symbols that are not in the index.
    fn resolve(&self, symbol: &str) -> Option<String>;
}

/// The current generation defines no overrides.
pub struct NoOverrides;

impl LinkResolver for NoOverrides {
    fn resolve(&self, _symbol: &str) -> Option<String> {
        None
    }
}

/// Documentation page stem for a unit name: directory and extension
/// dropped, ordering prefix stripped.
///
/// `"nbs/00_distance.ipynb"` → `"distance"`. The ordering prefix
/// (digits followed by `_` or `-`) is the exporter's convention for
/// sequencing notebooks; digits not followed by a separator are part of
/// the name and kept.
pub fn page_stem(unit: &str) -> &str {
    let name = unit.rsplit('/').next().unwrap_or(unit);
    let stem = match name.rsplit_once('.') {
        Some((before, _)) if !before.is_empty() => before,
        _ => name,
    };
    strip_ordering_prefix(stem)
}

/// Compiled module filename for a unit name, per the exporter's
/// convention of writing one Python module per notebook.
///
/// `"00_distance.ipynb"` → `"distance.py"`.
pub fn module_name(unit: &str) -> String {
    format!("{}.py", page_stem(unit))
}

fn strip_ordering_prefix(stem: &str) -> &str {
    let rest = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == stem.len() {
        return stem;
    }
    match rest.strip_prefix(['_', '-']) {
        Some(tail) if !tail.is_empty() => tail,
        _ => stem,
    }
}
