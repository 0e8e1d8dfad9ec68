//! Export core modules shared by the CLI renderer and tests.

pub mod pdf_core;
