use log::{info, warn};
use std::process::Command;

/// Queue that generated launcher scripts submit to.
pub const LAUNCHER_QUEUE: &str = "shortq7";
/// Wall-clock limit requested for the batch job.
pub const LAUNCHER_TIME_LIMIT: &str = "6:00:00";
/// Environment module providing the launcher toolchain.
const LAUNCHER_MODULE: &str = "launcher/3.5";

/// Builds the argument list for `launcher_creator.py`.  The command listing
/// path doubles as the job name and the job file.
pub fn launcher_args(output_path: &str, notify_email: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "-j".to_string(),
        output_path.to_string(),
        "-n".to_string(),
        output_path.to_string(),
        "-q".to_string(),
        LAUNCHER_QUEUE.to_string(),
        "-t".to_string(),
        LAUNCHER_TIME_LIMIT.to_string(),
    ];
    if let Some(email) = notify_email {
        args.push("-e".to_string());
        args.push(email.to_string());
    }
    args
}

/// Wraps the written command listing into a cluster submission script by
/// loading the launcher environment module and running
/// `launcher_creator.py` over the listing.
///
/// Failures of either external tool are reported but do not fail the run:
/// the listing itself is already on disk and remains usable by hand.
pub fn create_launcher(output_path: &str, notify_email: Option<&str>) {
    // `module` is a shell function, not an executable, so it goes through sh
    let mut load = Command::new("sh");
    load.arg("-c").arg(format!("module load {}", LAUNCHER_MODULE));
    run_logged(load);

    let mut create = Command::new("launcher_creator.py");
    create.args(launcher_args(output_path, notify_email));
    run_logged(create);
}

/// Runs an external command to completion, surfacing a non-zero exit or a
/// spawn failure in the log.
fn run_logged(mut cmd: Command) {
    let rendered = command_to_string(&cmd);
    info!("Running: {}", rendered);
    match cmd.status() {
        Ok(status) if status.success() => (),
        Ok(status) => warn!("{} exited with {}", rendered, status),
        Err(e) => warn!("failed to run {}: {}", rendered, e),
    }
}

fn command_to_string(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {}", program, args)
}
