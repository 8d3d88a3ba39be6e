use derive_builder::Builder;
use derive_getters::Getters;
use itertools::Itertools;

/// Immutable description of one generation run: which files to select, how
/// to invoke the aligner on each, and where the resulting command listing
/// goes.  Constructed once from the command line and never mutated.
#[derive(Clone, Debug, Builder, Getters)]
pub struct InvocationSpec {
    #[builder(default = "String::from(\"trim\")")]
    file_suffix: String,
    // never validated; a bad path fails inside the aligner run, not here
    #[builder(default)]
    reference_path: String,
    #[builder(default = "false")]
    keep_unaligned: bool,
    #[builder(default = "false")]
    split_mode: bool,
    #[builder(default = "String::from(\"aligned\")")]
    aligned_suffix: String,
    #[builder(default = "String::from(\"unaligned\")")]
    unaligned_suffix: String,
    #[builder(default = "String::from(\".\")")]
    aligned_dir: String,
    #[builder(default = "String::from(\".\")")]
    unaligned_dir: String,
    #[builder(default = "String::from(\"maps\")")]
    output_path: String,
    #[builder(default = "false")]
    make_launcher: bool,
    #[builder(default)]
    notify_email: Option<String>,
}

impl InvocationSpec {
    /// Formats the aligner invocation for a single input file.
    ///
    /// The base command maps the file locally against the reference and
    /// writes `<file>.sam` next to it.  Unless unaligned reads are kept,
    /// the SAM header, sequence dictionary, and unaligned records are
    /// suppressed.  In split mode the aligner additionally writes the
    /// aligned and unaligned reads to `<dir>/<file>.<suffix>` outputs.
    pub fn bowtie2_command(&self, file: &str) -> String {
        let mut tokens: Vec<String> = vec![
            "bowtie2".to_string(),
            "--local".to_string(),
            "-x".to_string(),
            self.reference_path.clone(),
            "-U".to_string(),
            file.to_string(),
            "-S".to_string(),
            format!("{}.sam", file),
        ];
        if !self.keep_unaligned {
            for flag in ["--no-hd", "--no-sq", "--no-unal"] {
                tokens.push(flag.to_string());
            }
        }
        if self.split_mode {
            tokens.push("--al".to_string());
            tokens.push(format!("{}/{}.{}", self.aligned_dir, file, self.aligned_suffix));
            tokens.push("--un".to_string());
            tokens.push(format!("{}/{}.{}", self.unaligned_dir, file, self.unaligned_suffix));
        }
        tokens.iter().join(" ")
    }
}

#[cfg(test)]
pub mod tests {
    use super::{InvocationSpec, InvocationSpecBuilder};
    use rstest::rstest;

    fn spec(split_mode: bool, keep_unaligned: bool) -> InvocationSpec {
        InvocationSpecBuilder::default()
            .reference_path("ref.fa".to_string())
            .split_mode(split_mode)
            .keep_unaligned(keep_unaligned)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let spec = InvocationSpecBuilder::default().build().unwrap();
        assert_eq!(spec.file_suffix(), "trim");
        assert_eq!(spec.reference_path(), "");
        assert!(!spec.keep_unaligned());
        assert!(!spec.split_mode());
        assert_eq!(spec.aligned_suffix(), "aligned");
        assert_eq!(spec.unaligned_suffix(), "unaligned");
        assert_eq!(spec.aligned_dir(), ".");
        assert_eq!(spec.unaligned_dir(), ".");
        assert_eq!(spec.output_path(), "maps");
        assert!(!spec.make_launcher());
        assert!(spec.notify_email().is_none());
    }

    #[rstest]
    #[case::keep(
        true,
        "bowtie2 --local -x ref.fa -U s1.trim -S s1.trim.sam"
    )]
    #[case::drop_unaligned(
        false,
        "bowtie2 --local -x ref.fa -U s1.trim -S s1.trim.sam --no-hd --no-sq --no-unal"
    )]
    fn test_combined_output(#[case] keep_unaligned: bool, #[case] expected: &str) {
        assert_eq!(spec(false, keep_unaligned).bowtie2_command("s1.trim"), expected);
    }

    #[rstest]
    #[case::keep(
        true,
        "bowtie2 --local -x ref.fa -U s1.trim -S s1.trim.sam \
         --al ./s1.trim.aligned --un ./s1.trim.unaligned"
    )]
    #[case::drop_unaligned(
        false,
        "bowtie2 --local -x ref.fa -U s1.trim -S s1.trim.sam --no-hd --no-sq --no-unal \
         --al ./s1.trim.aligned --un ./s1.trim.unaligned"
    )]
    fn test_split_output(#[case] keep_unaligned: bool, #[case] expected: &str) {
        assert_eq!(spec(true, keep_unaligned).bowtie2_command("s1.trim"), expected);
    }

    #[test]
    fn test_split_output_custom_names_and_dirs() {
        let spec = InvocationSpecBuilder::default()
            .reference_path("ref.fa".to_string())
            .split_mode(true)
            .keep_unaligned(true)
            .aligned_suffix("al".to_string())
            .unaligned_suffix("un".to_string())
            .aligned_dir("mapped".to_string())
            .unaligned_dir("unmapped".to_string())
            .build()
            .unwrap();
        assert_eq!(
            spec.bowtie2_command("s1.trim"),
            "bowtie2 --local -x ref.fa -U s1.trim -S s1.trim.sam \
             --al mapped/s1.trim.al --un unmapped/s1.trim.un"
        );
    }

    /// An unset reference leaves an empty `-x` argument behind, so the
    /// command carries two consecutive spaces.  Callers are expected to
    /// supply a reference for a usable run.
    #[test]
    fn test_empty_reference_path() {
        let spec = InvocationSpecBuilder::default()
            .keep_unaligned(true)
            .build()
            .unwrap();
        assert_eq!(
            spec.bowtie2_command("s1.trim"),
            "bowtie2 --local -x  -U s1.trim -S s1.trim.sam"
        );
    }
}
