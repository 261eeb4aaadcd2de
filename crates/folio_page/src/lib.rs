//! Pagination metadata.
//!
//! Given the number of entries per page, the total number of entries and the
//! current page, a [`Paginator`] answers the usual questions: which entries are
//! on this page, how many pages are there, and which pages neighbor this one.
//!
//! ```
//! use folio_page::Paginator;
//!
//! let page = Paginator::new(10, 95, 3);
//!
//! assert_eq!(page.first(), 21);
//! assert_eq!(page.last(), 30);
//! assert_eq!(page.last_page(), 10);
//! assert_eq!(page.to_string(), "[epp:10 tot:95 cur:3]");
//! ```
//!
//! While most of these computations are trivial, they are easy to get subtly
//! wrong at the edges (the shorter final page, an empty collection, the first
//! page), which is why they live in one place.

pub mod error;
mod paginator;
mod parse;

pub use error::{Error, Field, ParseError, Result};
pub use paginator::Paginator;
