//! Record extraction for culler.
//!
//! Reads an iTunes/Apple Music `Library.xml` export and turns every track
//! dictionary in it into a [`culler_core::Track`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fields;
pub mod parse;

pub use error::{ExtractError, ExtractResult};
pub use fields::{normalize_field_name, star_rating, TrackField};
pub use parse::{parse_library, parse_library_file, parse_track};
