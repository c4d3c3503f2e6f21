//! dialect-cli
//! ===========
//!
//! Command-line interface for the `dialect-core` converter.
//!
//! This crate primarily provides a binary (`dialect-map`). The library target
//! only exists so the overview below renders as a documentation page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! dialect-map --help
//! dialect-map -i Data.csv -o dialect_data.json build
//! dialect-map resolve 北京某胡同 沪上风光
//! dialect-map -i Data.csv stats
//! ```
//!
//! For programmatic access use the `dialect-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
