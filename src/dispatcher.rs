//! Dispatcher Module
//!
//! Drives a command script through the engine and writes the report.
//!
//! ## Run Phases
//! 1. Load the record table (store is frozen afterwards)
//! 2. Open the script, then create the report file
//! 3. Write the header: author, title, separator
//! 4. For every script line: echo + result lines, then a separator
//!
//! The line counter counts every script line, including blank and unknown
//! ones, and is printed zero-padded to three digits.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::config::{Config, ErrorPolicy};
use crate::engine::Engine;
use crate::error::Result;
use crate::protocol::{decode_command, encode_error, encode_response, Status, SEPARATOR};
use crate::report::{FanOutSink, ReportSink, WriterSink};

/// Counters collected over one script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Script lines processed
    pub commands: usize,

    /// Queries that produced a result
    pub found: usize,

    /// Queries reported as NOT FOUND or MISSING
    pub not_found: usize,

    /// Lines with an unrecognised keyword
    pub unknown: usize,

    /// Lines skipped with an error under [`ErrorPolicy::Skip`]
    pub skipped: usize,
}

/// Executes script lines one by one
///
/// Holds no state between lines besides the summary counters.
pub struct Dispatcher<'a> {
    /// Query engine (read-only)
    engine: &'a Engine,

    /// Header lines written before the first command
    author: String,
    title: String,

    /// Per-command failure handling
    error_policy: ErrorPolicy,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher using the config's header and error policy
    pub fn new(engine: &'a Engine, config: &Config) -> Self {
        Self {
            engine,
            author: config.author.clone(),
            title: config.title.clone(),
            error_policy: config.error_policy,
        }
    }

    /// Write the header, then process every script line
    ///
    /// I/O failures always abort. Decode and argument failures abort under
    /// [`ErrorPolicy::Abort`]; lines already reported are flushed first.
    pub fn run<R, S>(&self, script: R, sink: &mut S) -> Result<RunSummary>
    where
        R: BufRead,
        S: ReportSink + ?Sized,
    {
        let result = self.run_inner(script, sink);

        match result {
            Ok(summary) => {
                sink.flush()?;
                Ok(summary)
            }
            Err(e) => {
                // Keep partial output on disk; the run error takes precedence
                if let Err(flush_err) = sink.flush() {
                    tracing::warn!("Failed to flush report after error: {}", flush_err);
                }
                Err(e)
            }
        }
    }

    fn run_inner<R, S>(&self, script: R, sink: &mut S) -> Result<RunSummary>
    where
        R: BufRead,
        S: ReportSink + ?Sized,
    {
        sink.write_line(&self.author)?;
        sink.write_line(&self.title)?;
        sink.write_line(SEPARATOR)?;

        let mut summary = RunSummary::default();

        for (offset, line) in script.lines().enumerate() {
            let line = line?;
            let index = offset + 1;

            self.dispatch_line(index, &line, sink, &mut summary)?;
            sink.write_line(SEPARATOR)?;
            summary.commands += 1;
        }

        tracing::debug!(
            "Processed {} commands ({} found, {} not found, {} unknown, {} skipped)",
            summary.commands,
            summary.found,
            summary.not_found,
            summary.unknown,
            summary.skipped
        );

        Ok(summary)
    }

    /// Process one script line (without the trailing separator)
    fn dispatch_line<S>(
        &self,
        index: usize,
        line: &str,
        sink: &mut S,
        summary: &mut RunSummary,
    ) -> Result<()>
    where
        S: ReportSink + ?Sized,
    {
        let response = decode_command(line, index)
            .and_then(|command| {
                tracing::trace!("Command {}: {:?}", index, command);
                self.engine.execute(&command)
            });

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_command_error() && self.error_policy == ErrorPolicy::Skip => {
                tracing::warn!("Skipping command {}: {}", index, e);
                summary.skipped += 1;
                return sink.write_line(&encode_error(index, &e));
            }
            Err(e) => return Err(e),
        };

        match response.status() {
            Status::Found => summary.found += 1,
            Status::NotFound => summary.not_found += 1,
            Status::Unknown => summary.unknown += 1,
        }

        for report_line in encode_response(index, &response) {
            sink.write_line(&report_line)?;
        }

        Ok(())
    }
}

/// Run a full session as described by `config`
///
/// Loads the record table, then writes the report to the output file and,
/// if enabled, to stdout.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let engine = Engine::open(config)?;
    tracing::info!(
        "Loaded {} records from {}",
        engine.store().len(),
        config.sequences_path.display()
    );

    let script = BufReader::new(File::open(&config.commands_path)?);

    let mut sink = FanOutSink::new();
    if config.echo_console {
        sink.push(WriterSink::stdout());
    }
    sink.push(WriterSink::create(&config.output_path)?);

    let summary = Dispatcher::new(&engine, config).run(script, &mut sink)?;
    tracing::info!(
        "Wrote report for {} commands to {}",
        summary.commands,
        config.output_path.display()
    );

    Ok(summary)
}
