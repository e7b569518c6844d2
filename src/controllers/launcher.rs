use std::{
    io::ErrorKind,
    process::{Command, Stdio},
};

/// Outcome of handing a URL to the platform opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Exited(i32),
    /// The opener was killed before reporting an exit code.
    Terminated,
    /// None of the opener candidates could be started.
    NotStarted,
}

impl LaunchStatus {
    pub fn code(&self) -> i32 {
        match self {
            LaunchStatus::Exited(code) => *code,
            LaunchStatus::Terminated | LaunchStatus::NotStarted => 1,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == 0
    }
}

pub fn open(url: &str) -> LaunchStatus {
    launch_with(::open::commands(url))
}

/// Runs the first candidate that can be spawned and waits for it. Candidates
/// that are not installed are skipped.
pub fn launch_with(candidates: impl IntoIterator<Item = Command>) -> LaunchStatus {
    for mut command in candidates {
        match command.stdin(Stdio::null()).status() {
            Ok(status) => {
                return status
                    .code()
                    .map(LaunchStatus::Exited)
                    .unwrap_or(LaunchStatus::Terminated);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(_) => return LaunchStatus::NotStarted,
        }
    }
    LaunchStatus::NotStarted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LaunchStatus::Exited(0).code(), 0);
        assert_eq!(LaunchStatus::Exited(7).code(), 7);
        assert_eq!(LaunchStatus::Terminated.code(), 1);
        assert_eq!(LaunchStatus::NotStarted.code(), 1);
        assert!(!LaunchStatus::NotStarted.success());
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(launch_with(Vec::new()), LaunchStatus::NotStarted);
    }

    #[test]
    fn test_missing_opener_is_not_started() {
        let missing = Command::new("cloudmonitoring-dig-no-such-opener");
        assert_eq!(launch_with([missing]), LaunchStatus::NotStarted);
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_through_to_installed_opener() {
        let missing = Command::new("cloudmonitoring-dig-no-such-opener");
        let installed = Command::new("true");
        assert_eq!(launch_with([missing, installed]), LaunchStatus::Exited(0));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_is_passed_through() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);
        assert_eq!(launch_with([command]), LaunchStatus::Exited(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_killed_opener_is_terminated() {
        let mut command = Command::new("sh");
        command.args(["-c", "kill -9 $$"]);
        assert_eq!(launch_with([command]), LaunchStatus::Terminated);
    }
}
