//! Command-line entry: generate one default password and print it.

pub mod prompts;

use std::io::{self, Write};

use passgen::{Password, generate_default};
use tracing::debug;

/// Write the single output line for `pass`.
pub fn write_password<W: Write>(out: &mut W, pass: &Password) -> io::Result<()> {
    writeln!(out, "Your random password is: {pass}")?;
    out.flush()
}

/// Run the CLI. Arguments are not consulted; the default settings always apply.
pub fn run() -> io::Result<()> {
    let pass = generate_default();
    debug!(length = pass.len(), "generated password");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_password(&mut out, &pass)
}
