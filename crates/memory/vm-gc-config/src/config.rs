//! GC configuration record
//!
//! Populated once at startup from the option string and then handed to the
//! memory manager. Fields are independent; no cross-field validation is done.

use serde::{Deserialize, Serialize};

use crate::error::GcOptResult;
use crate::parser::{OptionParser, ParseMode};
use crate::sink::DiagnosticSink;

/// GC tuning parameters
///
/// Serialized field names are the option names accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GcConfig {
    /// Start the collector disabled
    pub disable: bool,

    /// Profiling verbosity level
    pub profile: u8,

    /// Precise scanning (accepted, not implemented)
    pub precise: bool,

    /// Concurrent collection (accepted, not implemented)
    pub concurrent: bool,

    /// Initial memory to reserve, in MB
    pub init_reserve: usize,

    /// Initial and minimum pool size, in MB
    pub min_pool_size: usize,

    /// Maximum pool size, in MB
    pub max_pool_size: usize,

    /// Pool growth increment, in MB
    pub inc_pool_size: usize,

    /// Targeted heap size to used memory ratio
    pub heap_size_factor: f64,
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            disable: false,
            profile: 0,
            precise: false,
            concurrent: false,
            init_reserve: 0,
            min_pool_size: 1,
            max_pool_size: 64,
            inc_pool_size: 3,
            heap_size_factor: 2.0,
        }
    }
}

impl GcConfig {
    /// Parse `opts` into a fresh record.
    ///
    /// # Errors
    ///
    /// Returns the first malformed assignment; the diagnostic line has already
    /// been written to `sink` unless `mode` is silent.
    pub fn from_options<S>(opts: &str, sink: &mut S, mode: ParseMode) -> GcOptResult<Self>
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut config = Self::default();
        config.parse_options(opts, sink, mode)?;
        Ok(config)
    }

    /// Apply the assignments in `opts` to this record, left to right.
    ///
    /// Assignments applied before a failing one keep their new values.
    ///
    /// # Errors
    ///
    /// Returns the first malformed assignment.
    pub fn parse_options<S>(&mut self, opts: &str, sink: &mut S, mode: ParseMode) -> GcOptResult<()>
    where
        S: DiagnosticSink + ?Sized,
    {
        OptionParser::new(mode).parse(self, opts, sink)
    }
}
