//! Generation of bowtie2 command listings for batch execution.
//!
//! The listing itself is plain text with one independently executable
//! command per line; running the aligner is left to the user or to the
//! cluster launcher script.

pub mod files;
pub mod launcher;
pub mod spec;

pub use spec::{InvocationSpec, InvocationSpecBuilder};

use anyhow::{Context, Result};
use fgoxide::io::Io;

/// Formats one aligner invocation per input file, preserving the order of
/// the listing given.
pub fn generate_commands(spec: &InvocationSpec, files: &[String]) -> Vec<String> {
    files.iter().map(|file| spec.bowtie2_command(file)).collect()
}

/// Writes the command listing to the spec's output path, one command per
/// line, newline-terminated, overwriting any previous listing.  An empty
/// batch still produces the (empty) file.
pub fn write_commands(spec: &InvocationSpec, commands: &[String]) -> Result<()> {
    Io::default()
        .write_lines(&spec.output_path(), commands.iter())
        .with_context(|| format!("failed to write command listing to {}", spec.output_path()))
}
