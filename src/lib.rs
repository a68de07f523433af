// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11yscore - scored WCAG spot-check for a single web page
//!
//! Audits one document against a small, fixed set of accessibility criteria
//! and reports a score (`passed / total * 100`) together with a
//! human-readable list of violations.
//!
//! ## Criteria
//!
//! - **Page Language** (3.1.1): the root element declares a `lang`
//! - **Non-text Content** (1.1.1): every `<img>` has an `alt` attribute
//! - **Keyboard Operability** (2.1.1): clickable `div`/`span`/`p`/`img` elements are focusable
//!
//! ## Layout
//!
//! The core (`dom`, `criteria`, `registry`, `engine`, `result`) works on any
//! [`DocumentTree`] and has no I/O. `scanner`, `report` and `config` are the
//! host side: they load an HTML file, apply configuration and render results.
//!
//! ```
//! use a11yscore::{run_audit, CriterionRegistry, MemoryDocument};
//!
//! let doc = MemoryDocument::new().with_lang("en");
//! let result = run_audit(&doc, &CriterionRegistry::with_defaults()).unwrap();
//! assert_eq!(result.score(), 100.0);
//! ```

pub mod config;
pub mod criteria;
pub mod dom;
pub mod engine;
pub mod error;
pub mod registry;
pub mod report;
pub mod result;
pub mod scanner;
pub mod text;

pub use config::Config;
pub use criteria::{Criterion, FnCriterion};
pub use dom::html::HtmlDocument;
pub use dom::memory::{MemoryDocument, MemoryElement};
pub use dom::{DocumentTree, ElementNode, ElementQuery};
pub use engine::{run_audit, AuditEngine, EngineConfig};
pub use error::{AuditError, Result};
pub use registry::CriterionRegistry;
pub use result::{
    AuditRecord, AuditResult, CriterionFailure, CriterionOutcome, CriterionStatus,
    ScorePrecision, Violation, WcagLevel,
};
