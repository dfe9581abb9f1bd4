//! Icon signal generator.
//!
//! Turns a tagged release of an SVG icon set into raster mipmap strips plus the
//! data and locale files a game mod loads them from. The work is one linear
//! [`pipeline`]:
//!
//! - **[`settings`]** / **[`layout`]**: what to fetch and where everything lives.
//! - **[`cache`]** / **[`download`]** / **[`extract`]**: get the source tree on disk.
//! - **[`icon`]** / **[`raster`]** / **[`render`]**: derive names, draw strips,
//!   emit text.
//!
//! [`scratch`] owns the temporary directory that is removed however a run ends.

pub mod cache;
pub mod download;
pub mod exit_codes;
pub mod extract;
pub mod icon;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod scratch;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
