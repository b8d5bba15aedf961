//! # VM GC Configuration Crate
//!
//! Parses GC tuning options from a whitespace separated option string into
//! the configuration record consumed by the memory manager.
//!
//! ## Option string
//!
//! ```text
//! disable:0 profile=1 maxPoolSize:128 heapSizeFactor:1.5 help
//! ```
//!
//! Each assignment is `name:value` or `name=value`. The bare word `help`
//! writes the option listing to the diagnostic sink. Parsing stops at the
//! first malformed assignment; assignments before it stay applied.
//!
//! ## Usage
//!
//! ```
//! use vm_gc_config::{BufferSink, GcConfig, ParseMode};
//!
//! let mut sink = BufferSink::new();
//! let config = GcConfig::from_options("maxPoolSize:128 disable:y", &mut sink, ParseMode::Report)
//!     .expect("valid options");
//! assert_eq!(config.max_pool_size, 128);
//! assert!(config.disable);
//!
//! let err = GcConfig::from_options("bogus:1", &mut sink, ParseMode::Report).unwrap_err();
//! assert_eq!(err.to_string(), "Unknown GC option 'bogus'.");
//! assert_eq!(sink.lines(), ["Unknown GC option 'bogus'."]);
//! ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

pub mod config;
pub mod error;
pub mod field;
pub mod help;
pub mod parser;
pub mod sink;
pub mod source;
pub mod table;

pub use config::GcConfig;
pub use error::{FieldError, GcOptResult, GcOptionError};
pub use help::render_help;
pub use parser::{HELP_OPTION, OptionParser, ParseMode};
pub use sink::{BufferSink, DiagnosticSink, StderrSink, WriterSink};
pub use source::{DEFAULT_CMDLINE_PREFIX, DEFAULT_ENV_VAR, OptionSources, strip_option_args};
pub use table::{GcOption, OPTIONS, ValueKind};
