//! Line-oriented console driver.
//!
//! Feeds one line at a time from any reader into a [`Dashboard`] and writes
//! each view to a writer. Bytes that are not valid UTF-8 are replaced rather
//! than ending the session.

use crate::commands::Dashboard;
use crate::executor::Sleeper;
use log::{info, warn};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Runs the console until `quit` or end of input.
///
/// Writes the initial dashboard and help text first. Only I/O failures of
/// the reader or writer themselves are returned as errors.
pub fn run<S, R, W>(dashboard: &mut Dashboard<S>, mut reader: R, mut writer: W) -> io::Result<()>
where
    S: Sleeper,
    R: BufRead,
    W: Write,
{
    write!(writer, "{}\n{}", dashboard.render(), dashboard.dispatch("help").output)?;
    prompt(&mut writer)?;

    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            // EOF behaves like quit.
            info!("End of input");
            writeln!(writer)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buffer);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line contained invalid UTF-8, replaced with U+FFFD");
        }

        let outcome = dashboard.dispatch(line.trim_end_matches(['\r', '\n']));
        write!(writer, "{}", outcome.output)?;
        if outcome.quit {
            return Ok(());
        }
        prompt(&mut writer)?;
    }
}

fn prompt<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", PROMPT)?;
    writer.flush()
}
