use anyhow::Result;
use serde::Serialize;
use std::{collections::BTreeMap, io::Write};

pub const MAX_VERBOSITY: u8 = 2;

/// Renders a command result according to `-v/--verbosity`.
///
/// - 0: nothing
/// - 1: the result as pretty JSON
/// - 2: `key=value` environment lines, a `----- / -----` separator, then the JSON
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    verbosity: u8,
}

impl Printer {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn print<S: Serialize>(&self, env: &BTreeMap<&str, String>, payload: &S) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_to(&mut stdout.lock(), env, payload)
    }

    pub fn write_to<W: Write, S: Serialize>(
        &self,
        out: &mut W,
        env: &BTreeMap<&str, String>,
        payload: &S,
    ) -> Result<()> {
        if self.verbosity == 0 {
            return Ok(());
        }
        if self.verbosity >= 2 {
            for (key, value) in env {
                writeln!(out, "{key}={value}")?;
            }
            writeln!(out, "----- / -----")?;
        }
        writeln!(out, "{}", serde_json::to_string_pretty(payload)?)?;
        Ok(())
    }
}
