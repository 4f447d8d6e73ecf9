//! blogkit Core Library
//!
//! Configuration, error handling and the DOM-free logic behind the blogkit
//! page enhancements: theme resolution, table of contents, reading progress,
//! share links, visitor counters, search filtering and a few click/keyboard
//! decisions.

pub mod cards;
pub mod config;
pub mod counter;
pub mod error;
pub mod keys;
pub mod links;
pub mod progress;
pub mod search;
pub mod share;
pub mod theme;
pub mod toc;

pub use config::Config;
pub use error::{CoreError, Result};
pub use search::{HighlightSegment, PostMatch, PostRecord, SearchIndex, SearchOutcome};
pub use theme::Theme;
pub use toc::{HeadingLevel, TocEntry, VisibilityWindow};
