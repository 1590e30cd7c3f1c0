//! Symbol-to-notebook export index for literate programs.
//!
//! A literate-programming exporter compiles notebooks ("units") into
//! modules and emits a snapshot of what it exported: which notebook
//! defines each symbol, which modules were written, and where the
//! rendered documentation and browsable sources live. This crate
//! consumes that snapshot and answers "where is X defined?" for
//! documentation-site generators and IDE tooling.
//!
//! ```
//! use nbindex::{LookupError, SymbolLocator};
//!
//! let locator = SymbolLocator::builtin();
//! assert_eq!(locator.lookup_unit("PairwiseDistance").unwrap(), "00_distance.ipynb");
//! assert_eq!(locator.list_modules(), ["distance.py"]);
//!
//! // A miss is a normal outcome, not a fault.
//! assert_eq!(
//!     locator.lookup_unit("DoesNotExist"),
//!     Err(LookupError::NotFound("DoesNotExist".into()))
//! );
//! ```
//!
//! Snapshots are regenerated wholesale by the exporter whenever the
//! notebooks change; nothing here mutates one. Custom per-symbol
//! documentation links go through the [`LinkResolver`] seam, which the
//! current generation leaves at [`NoOverrides`].

mod links;
mod locator;
mod snapshot;

pub use links::{LinkResolver, NoOverrides, module_name, page_stem};
pub use locator::{LookupError, SymbolLocator};
pub use snapshot::{Snapshot, SnapshotError};
