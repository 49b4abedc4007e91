//! Fetch, transliterate and package the Ukrainian language file.
//!
//! `remote` resolves the language file through the version manifest,
//! `pack` writes the resource pack archive and `pipeline` runs the steps in
//! order. `commands` holds the front-end operations used by the binaries.

pub mod commands;
pub mod logging;
pub mod pack;
pub mod pipeline;
pub mod remote;
