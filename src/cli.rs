//! Command-line driver
//!
//! Wires configuration, input, sink and session together for the
//! `turtle-ps` binary.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use crate::config::{Config, OutputFormat};
use crate::interpreter::{RunSummary, Session};
use crate::parser::parse_program;
use crate::sink::{JsonSink, PostScriptSink, Sink};

/// Install the logger, using the configured level unless `RUST_LOG` is set.
pub fn init_logging(config: &Config) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    // A second init (tests, embedding) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Decode program bytes. Invalid UTF-8 becomes U+FFFD, which the parser
/// skips like any other unknown character.
pub fn decode_program(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Read the whole program from the configured input.
pub fn read_input(config: &Config) -> Result<String> {
    let bytes = match &config.input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
            bytes
        }
    };
    Ok(decode_program(&bytes))
}

fn open_output(config: &Config) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}

/// Build the sink for the configured format around `writer`.
pub fn make_sink<'w>(format: OutputFormat, writer: Box<dyn Write + 'w>) -> Box<dyn Sink + 'w> {
    match format {
        OutputFormat::Postscript => Box::new(PostScriptSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}

/// Parse only, reporting every malformed command on stderr.
pub fn check(src: &str) -> Result<()> {
    let program = parse_program(src);

    for err in &program.errors {
        eprintln!("{}", err);
    }

    log::info!(
        "{} commands, {} unknown characters, {} malformed",
        program.commands.len(),
        program.skipped,
        program.errors.len()
    );

    if !program.is_valid() {
        bail!("{} malformed command(s)", program.errors.len());
    }
    Ok(())
}

/// Interpret `src` into the configured output.
pub fn render(config: &Config, src: &str) -> Result<RunSummary> {
    let writer = open_output(config)?;
    let sink = make_sink(config.format, writer);
    let mut session = Session::new(sink, config.page, config.seed);
    let summary = session.run(src)?;
    Ok(summary)
}

/// Entry point of the binary.
pub fn run(config: Config) -> Result<()> {
    init_logging(&config);

    if let Some(path) = &config.config_file {
        log::debug!("using configuration file {}", path.display());
    }

    let src = read_input(&config)?;

    if config.check_only {
        return check(&src);
    }

    let summary = render(&config, &src)?;
    for err in &summary.diagnostics {
        eprintln!("warning: {}", err);
    }
    Ok(())
}
