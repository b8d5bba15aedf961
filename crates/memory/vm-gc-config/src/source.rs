//! Option sources
//!
//! Collects GC option strings from the places a host process can supply them:
//! an embedded default string, an environment variable and command-line
//! arguments. Strings are applied in that order, so later sources override
//! earlier ones.

use crate::config::GcConfig;
use crate::error::GcOptResult;
use crate::parser::OptionParser;
use crate::sink::DiagnosticSink;

/// Default environment variable holding GC options
pub const DEFAULT_ENV_VAR: &str = "VM_GCOPT";

/// Default command-line prefix, e.g. `--vm-gcopt=maxPoolSize:128`
pub const DEFAULT_CMDLINE_PREFIX: &str = "--vm-gcopt=";

/// Where GC option strings are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSources {
    /// Options baked into the host binary, applied first
    pub embedded: Option<String>,
    /// Read [`OptionSources::env_var`]
    pub envvars_enabled: bool,
    /// Scan arguments for [`OptionSources::cmdline_prefix`]
    pub cmdline_enabled: bool,
    /// Environment variable name
    pub env_var: String,
    /// Argument prefix
    pub cmdline_prefix: String,
}

impl Default for OptionSources {
    fn default() -> Self {
        Self {
            embedded: None,
            envvars_enabled: false,
            cmdline_enabled: true,
            env_var: DEFAULT_ENV_VAR.to_owned(),
            cmdline_prefix: DEFAULT_CMDLINE_PREFIX.to_owned(),
        }
    }
}

impl OptionSources {
    /// Collect option strings in application order.
    ///
    /// `args` are the program arguments without the program name; scanning
    /// stops at a bare `--`. `lookup` resolves environment variables.
    pub fn collect<I, F>(&self, args: I, lookup: F) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnOnce(&str) -> Option<String>,
    {
        let mut collected = Vec::new();

        if let Some(embedded) = &self.embedded {
            collected.push(embedded.clone());
        }

        if self.envvars_enabled {
            if let Some(value) = lookup(&self.env_var) {
                log::debug!("GC options from ${}: {value:?}", self.env_var);
                collected.push(value);
            }
        }

        if self.cmdline_enabled {
            for arg in args {
                let arg = arg.as_ref();
                if arg == "--" {
                    break;
                }
                if let Some(value) = arg.strip_prefix(self.cmdline_prefix.as_str()) {
                    log::debug!("GC options from command line: {value:?}");
                    collected.push(value.to_owned());
                }
            }
        }

        collected
    }

    /// Build a record from defaults plus every collected string.
    ///
    /// # Errors
    ///
    /// Returns the first malformed assignment; strings after the failing one
    /// are not applied.
    pub fn load<I, F, S>(
        &self,
        parser: &OptionParser,
        args: I,
        lookup: F,
        sink: &mut S,
    ) -> GcOptResult<GcConfig>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnOnce(&str) -> Option<String>,
        S: DiagnosticSink + ?Sized,
    {
        let mut config = GcConfig::default();
        for opts in self.collect(args, lookup) {
            parser.parse(&mut config, &opts, sink)?;
        }
        Ok(config)
    }
}

/// Program arguments with every GC option argument removed.
///
/// Arguments after a bare `--` are passed through untouched.
pub fn strip_option_args<I>(args: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        let arg = arg.into();
        if !passthrough && arg == "--" {
            passthrough = true;
        } else if passthrough || !arg.starts_with(prefix) {
            out.push(arg);
        }
    }
    out
}
