use std::process;

use anyhow::Context;
use log::debug;
use vm_gc_config::{
    DEFAULT_CMDLINE_PREFIX, GcConfig, OptionParser, OptionSources, ParseMode, StderrSink,
};

#[derive(Debug, PartialEq)]
struct CliArgs {
    json: bool,
    silent: bool,
    env: bool,
    cmdline: bool,
    help: bool,
    embedded: Option<String>,
    /// Arguments searched for `--vm-gcopt=` options
    rest: Vec<String>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            json: false,
            silent: false,
            env: false,
            cmdline: true,
            help: false,
            embedded: None,
            rest: Vec::new(),
        }
    }
}

/// Parse the tool's own flags; `args` excludes the program name.
///
/// Everything after a bare `--` is kept verbatim in `rest`.
fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => {
                parsed.json = true;
            }
            "--silent" => {
                parsed.silent = true;
            }
            "--env" => {
                parsed.env = true;
            }
            "--no-cmdline" => {
                parsed.cmdline = false;
            }
            "--embedded" => match iter.next() {
                Some(opts) => parsed.embedded = Some(opts),
                None => return Err("Missing value for --embedded".to_owned()),
            },
            "--help" | "-h" => {
                parsed.help = true;
            }
            "--" => {
                parsed.rest.push(arg);
                parsed.rest.extend(iter.by_ref());
            }
            _ if arg.starts_with(DEFAULT_CMDLINE_PREFIX) => {
                parsed.rest.push(arg);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(parsed)
}

fn print_usage() {
    println!("GC option inspector");
    println!();
    println!("USAGE:");
    println!("    vm-gcopt [OPTIONS] [--vm-gcopt=<ASSIGNMENTS>...]");
    println!();
    println!("OPTIONS:");
    println!("    --json                   Print the configuration as JSON");
    println!("    --silent                 Suppress GC option diagnostics");
    println!("    --env                    Also read options from $VM_GCOPT");
    println!("    --no-cmdline             Ignore --vm-gcopt= arguments");
    println!("    --embedded <OPTS>        Options applied before all other sources");
    println!("    -h, --help               Print this help message");
    println!();
    println!("Pass --vm-gcopt=help to list the GC options.");
}

fn print_table(config: &GcConfig) {
    println!("disable        = {}", config.disable);
    println!("profile        = {}", config.profile);
    println!("precise        = {}", config.precise);
    println!("concurrent     = {}", config.concurrent);
    println!("initReserve    = {} MB", config.init_reserve);
    println!("minPoolSize    = {} MB", config.min_pool_size);
    println!("maxPoolSize    = {} MB", config.max_pool_size);
    println!("incPoolSize    = {} MB", config.inc_pool_size);
    println!("heapSizeFactor = {}", config.heap_size_factor);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "error")).init();
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            process::exit(1);
        }
    };
    if args.help {
        print_usage();
        return Ok(());
    }

    let sources = OptionSources {
        embedded: args.embedded.clone(),
        envvars_enabled: args.env,
        cmdline_enabled: args.cmdline,
        ..OptionSources::default()
    };
    let mode = if args.silent {
        ParseMode::Silent
    } else {
        ParseMode::Report
    };
    debug!("collecting GC options: {:?}", sources);

    let parser = OptionParser::new(mode);
    let config = match sources.load(
        &parser,
        &args.rest,
        |name| std::env::var(name).ok(),
        &mut StderrSink,
    ) {
        Ok(config) => config,
        // the sink has already reported the failing assignment
        Err(_) => process::exit(1),
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&config).context("failed to serialize GC configuration")?;
        println!("{json}");
    } else {
        print_table(&config);
    }

    Ok(())
}
