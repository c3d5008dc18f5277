//! URL handling module for sitemap-gen
//!
//! This module provides link canonicalization, origin host extraction and the
//! same-origin check that decides which links the crawler follows.

mod domain;
mod normalize;
mod origin;

pub use domain::origin_of;
pub use normalize::{canonicalize, try_canonicalize};
pub use origin::is_internal;
