//! gerikit-criteria
//!
//! Static clinical reference tables (formulary with bilingual aliases, Beers
//! list, STOPP/START rules, interaction pairs, anticholinergic weights) and
//! the checkers that run medication lists against them.
//!
//! Every checker takes an explicit [`ReferenceTables`]. The free functions
//! at the crate root use [`ReferenceTables::bundled`].

pub mod acb;
pub mod beers;
mod bundled;
pub mod error;
pub mod formulary;
pub mod interactions;
pub mod stopp;
pub mod tables;

use gerikit_core::models::interaction::Interaction;

pub use tables::ReferenceTables;

/// Beers-listed medications from `medications`, input order preserved.
pub fn check_beers_list<S: AsRef<str>>(medications: &[S]) -> Vec<String> {
    beers::check_beers_list(ReferenceTables::bundled(), medications)
}

/// Known interactions among all pairs in `medications`.
pub fn check_interactions<S: AsRef<str>>(medications: &[S]) -> Vec<Interaction> {
    interactions::check_interactions(ReferenceTables::bundled(), medications)
}

/// Canonical generic name for any known surface form.
pub fn canonicalize(name: &str) -> Option<&'static str> {
    ReferenceTables::bundled().formulary.canonicalize(name)
}
