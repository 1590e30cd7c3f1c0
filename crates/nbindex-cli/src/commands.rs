//! Subcommand handlers. Each returns a process exit code: 0 on success,
//! 1 when a queried symbol is not indexed (a normal miss, reported as
//! "no documentation available").

use nbindex::{LookupError, SymbolLocator};

pub fn cmd_lookup(locator: &SymbolLocator, symbol: &str, json: bool) -> u8 {
    match locator.lookup_unit(symbol) {
        Ok(unit) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "symbol": symbol, "unit": unit })
                );
            } else {
                println!("{unit}");
            }
            0
        }
        Err(e) => miss(e),
    }
}

pub fn cmd_modules(locator: &SymbolLocator, json: bool) -> u8 {
    if json {
        println!("{}", serde_json::json!(locator.list_modules()));
    } else {
        for module in locator.list_modules() {
            println!("{module}");
        }
    }
    0
}

pub fn cmd_doc_link(locator: &SymbolLocator, symbol: &str, json: bool) -> u8 {
    match locator.doc_link(symbol) {
        Ok(link) => {
            print_link(symbol, &link, json);
            0
        }
        Err(e) => miss(e),
    }
}

pub fn cmd_source_link(locator: &SymbolLocator, symbol: &str, json: bool) -> u8 {
    match locator.source_link(symbol) {
        Ok(link) => {
            print_link(symbol, &link, json);
            0
        }
        Err(e) => miss(e),
    }
}

pub fn cmd_urls(locator: &SymbolLocator, json: bool) -> u8 {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "doc_url": locator.doc_root(),
                "git_url": locator.repo_root(),
            })
        );
    } else {
        println!("doc: {}", locator.doc_root());
        println!("git: {}", locator.repo_root());
    }
    0
}

/// Advisory consistency report. The exporter is expected to keep the two
/// tables in sync, so findings are warnings, not failures.
pub fn cmd_check(locator: &SymbolLocator, json: bool) -> u8 {
    let orphans = locator.unlisted_units();
    for unit in &orphans {
        tracing::warn!(unit, "index references a unit with no compiled module");
    }

    if json {
        println!("{}", serde_json::json!({ "unlisted_units": orphans }));
    } else if orphans.is_empty() {
        println!("ok: every indexed unit has a compiled module");
    } else {
        for unit in &orphans {
            println!("{unit}");
        }
    }
    0
}

fn print_link(symbol: &str, link: &str, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({ "symbol": symbol, "link": link })
        );
    } else {
        println!("{link}");
    }
}

fn miss(e: LookupError) -> u8 {
    eprintln!("no documentation available: {e}");
    1
}
