use super::command::Command;
use anyhow::Result;
use clap::Parser;
use log::info;
use mapgen::generate::{self, files, launcher, InvocationSpec, InvocationSpecBuilder};
use mapgen::util::version::built_info;

/// Generates a listing of bowtie2 commands, one per input file in the
/// working directory, to be executed later by hand or wrapped into a
/// cluster job with `launcher_creator.py`.
///
/// Input files are selected by a suffix match on their names.  Each command
/// aligns one file locally against the reference index and writes a SAM
/// file next to the input.  By default the SAM header, sequence dictionary,
/// and unaligned records are suppressed; `--keep_unal` retains them.  With
/// `--split`, aligned and unaligned reads are additionally routed to
/// separate per-file outputs under `--aldir`/`--undir`.
#[derive(Parser, Debug, Clone)]
#[clap(name = "mapgen", version = built_info::VERSION.as_str(), term_width = 0)]
pub struct Generate {
    /// Suffix of the input files to map, without a leading dot (e.g. fastq).
    #[clap(short = 'f', default_value = "trim", display_order = 1)]
    file_suffix: String,

    /// Path to the reference genome index.
    #[clap(short = 'g', default_value = "", display_order = 2)]
    reference: String,

    /// Keep unaligned reads in the SAM alignment files.
    #[clap(long = "keep_unal", display_order = 3)]
    keep_unal: bool,

    /// Split reads into separate aligned and unaligned files.
    #[clap(long, display_order = 4)]
    split: bool,

    /// Name appended to aligned-read output files.
    #[clap(short = 'a', default_value = "aligned", display_order = 5)]
    aligned_name: String,

    /// Name appended to unaligned-read output files.
    #[clap(short = 'u', default_value = "unaligned", display_order = 6)]
    unaligned_name: String,

    /// Directory for unaligned reads when splitting.
    #[clap(long = "undir", default_value = ".", display_order = 7)]
    unaligned_dir: String,

    /// Directory for aligned reads when splitting.
    #[clap(long = "aldir", default_value = ".", display_order = 8)]
    aligned_dir: String,

    /// Name of the output file to write the commands to.
    #[clap(short = 'n', default_value = "maps", display_order = 9)]
    output: String,

    /// Create a cluster submission script with launcher_creator.py.
    #[clap(long, display_order = 10)]
    launcher: bool,

    /// Email address for job status notifications.
    #[clap(short = 'e', requires = "launcher", display_order = 11)]
    email: Option<String>,
}

impl Generate {
    fn invocation_spec(&self) -> Result<InvocationSpec> {
        let spec = InvocationSpecBuilder::default()
            .file_suffix(self.file_suffix.clone())
            .reference_path(self.reference.clone())
            .keep_unaligned(self.keep_unal)
            .split_mode(self.split)
            .aligned_suffix(self.aligned_name.clone())
            .unaligned_suffix(self.unaligned_name.clone())
            .aligned_dir(self.aligned_dir.clone())
            .unaligned_dir(self.unaligned_dir.clone())
            .output_path(self.output.clone())
            .make_launcher(self.launcher)
            .notify_email(self.email.clone())
            .build()?;
        Ok(spec)
    }

    pub fn execute(&self) -> Result<()> {
        let spec = self.invocation_spec()?;

        let input_files = files::find_input_files(&".", spec.file_suffix())?;
        info!(
            "Found {} input file(s) ending with {}",
            input_files.len(),
            spec.file_suffix()
        );

        let commands = generate::generate_commands(&spec, &input_files);
        generate::write_commands(&spec, &commands)?;
        info!("Wrote {} command(s) to {}", commands.len(), spec.output_path());

        if *spec.make_launcher() {
            launcher::create_launcher(spec.output_path(), spec.notify_email().as_deref());
        }

        Ok(())
    }
}

impl Command for Generate {
    fn execute(&self) -> Result<()> {
        Generate::execute(self)
    }
}
