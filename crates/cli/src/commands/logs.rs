//! Print the admin log.

use anyhow::Result;
use clap::Parser;

use crate::session::Session;

/// Print the admin log (administrators only)
#[derive(Parser)]
pub struct Logs {
    /// Only print the last N entries
    #[arg(short = 'n', long, value_name = "N")]
    tail: Option<usize>,
}

impl Logs {
    pub fn execute(self, session: &Session) -> Result<()> {
        let entries = session.manager.admin_logs(session.role)?;
        let skip = self
            .tail
            .map_or(0, |tail| entries.len().saturating_sub(tail));
        for entry in entries.iter().skip(skip) {
            println!("{entry}");
        }
        Ok(())
    }
}
