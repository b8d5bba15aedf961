//! Option string parser
//!
//! Walks the option string once, left to right:
//!
//! ```text
//! Scanning --(non-space)--> ReadName --(':' | '=')--> ReadValue --> Scanning
//!    |                         |                          |
//!  (end) -> Done          (no value) -> Failed     (bad value) -> Failed
//! ```
//!
//! Each assignment is applied to the record as soon as it parses. The first
//! failure stops the pass; earlier assignments are not rolled back.

use crate::config::GcConfig;
use crate::error::{GcOptResult, GcOptionError};
use crate::help::render_help;
use crate::sink::DiagnosticSink;
use crate::table;

/// Name of the pseudo-option that prints the option listing
pub const HELP_OPTION: &str = "help";

/// Whether diagnostics reach the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Write errors and help text to the sink
    #[default]
    Report,
    /// Write nothing; callers still get the error value
    Silent,
}

/// Parser for GC option strings
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionParser {
    mode: ParseMode,
}

impl OptionParser {
    /// Create a parser with the given diagnostic mode
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Diagnostic mode of this parser
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Apply every assignment in `opts` to `config`.
    ///
    /// # Errors
    ///
    /// Returns the first malformed assignment. Its diagnostic line has been
    /// written to `sink` unless the parser is silent.
    pub fn parse<S>(&self, config: &mut GcConfig, opts: &str, sink: &mut S) -> GcOptResult<()>
    where
        S: DiagnosticSink + ?Sized,
    {
        let result = self.parse_assignments(config, opts, sink);
        if let Err(err) = &result {
            log::warn!("rejected GC options {opts:?}: {err}");
            self.report(sink, &err.to_string());
        }
        result
    }

    fn parse_assignments<S>(&self, config: &mut GcConfig, opts: &str, sink: &mut S) -> GcOptResult<()>
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut rest = skip_space(opts);

        while !rest.is_empty() {
            let name_end = rest
                .find(|c: char| c == ':' || c == '=' || is_space(c))
                .unwrap_or(rest.len());
            let (name, tail) = rest.split_at(name_end);

            if name == HELP_OPTION {
                self.help(config, sink);
                rest = skip_space(tail);
                continue;
            }

            // separator directly followed by the value
            let value = match tail.as_bytes().first() {
                Some(b':' | b'=') => &tail[1..],
                _ => return Err(GcOptionError::missing_argument(name)),
            };
            if value.is_empty() || value.starts_with(is_space) {
                return Err(GcOptionError::missing_argument(name));
            }

            let option = table::lookup(name).ok_or_else(|| GcOptionError::unknown_option(name))?;
            let remainder = option
                .apply(config, value)
                .map_err(|err| GcOptionError::invalid_value(name, err, value_token(value)))?;
            log::debug!("GC option {name} set from {:?}", &value[..value.len() - remainder.len()]);

            rest = skip_space(remainder);
        }

        Ok(())
    }

    fn help<S>(&self, config: &GcConfig, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        log::trace!("rendering GC option help");
        if self.mode == ParseMode::Silent {
            return;
        }
        for line in render_help(config).lines() {
            sink.write_line(line);
        }
    }

    fn report<S>(&self, sink: &mut S, line: &str)
    where
        S: DiagnosticSink + ?Sized,
    {
        if self.mode == ParseMode::Report {
            sink.write_line(line);
        }
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn skip_space(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Value text up to the next whitespace, for diagnostics
fn value_token(value: &str) -> &str {
    value.find(is_space).map_or(value, |end| &value[..end])
}
