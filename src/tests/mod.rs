//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const TABLEAU_LITERAL_STRING`
//! * `fn tableau_form()`
//! * `fn optimal_tableau_form()`
