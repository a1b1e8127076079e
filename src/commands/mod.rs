pub mod dashboard;
pub mod export;
pub mod init;

use std::io::{self, Write};

use crate::error::Result;

/// Print `label` and read one trimmed line from stdin.
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
