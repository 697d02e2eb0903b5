//! Read-only command table for the Batcomputer terminal.

/// Working directory every session starts in.
pub const ROOT_DIRECTORY: &str = "/batcave";

const ROOT_LISTING: [&str; 10] = [
    "batmobile/",
    "batwing/",
    "batarangs/",
    "gadgets/",
    "surveillance/",
    "evidence/",
    "case_files/",
    "wayne_tech/",
    "gotham_map/",
    "criminal_database/",
];

const ENTERABLE_DIRECTORIES: [&str; 4] = ["batmobile", "batwing", "gadgets", "surveillance"];

const HELP: [&str; 17] = [
    "Available Commands:",
    "  who am i, whoami  - Show current user (Dark Knight)",
    "  pwd               - Print working directory",
    "  ls, ls -la        - List directory contents",
    "  cd <dir>          - Change directory",
    "  cat <file>        - Display file contents",
    "  ps                - Show running processes",
    "  top               - Show system resources",
    "  df                - Show disk usage",
    "  free              - Show memory usage",
    "  date              - Show current date/time",
    "  uptime            - Show system uptime",
    "  uname             - Show system information",
    "  clear             - Clear terminal",
    "  help              - Show this help message",
    "",
    "Note: This is a read-only terminal. File creation/deletion is disabled.",
];

/// Lines shown when a session starts or is cleared.
pub const BANNER: [&str; 3] = [
    "Batcomputer Terminal v.978.0.06.51 - Read Only Mode",
    "Welcome, Dark Knight. All systems are operational.",
    "Type \"help\" for available commands.",
];

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Lines to append under the echoed command.
    Output(Vec<String>),
    /// Wipe the transcript.
    Clear,
    /// Blank input; nothing is echoed.
    Ignored,
}

/// Per-window shell state: the working directory and the command history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    cwd: String,
    history: Vec<String>,
    cursor: Option<usize>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            cwd: ROOT_DIRECTORY.to_string(),
            history: Vec::new(),
            cursor: None,
        }
    }
}

impl TerminalSession {
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Runs `line` against the command table. `now` renders the `date` output.
    pub fn execute(&mut self, line: &str, now: impl FnOnce() -> String) -> CommandOutcome {
        let command = line.trim();
        if command.is_empty() {
            return CommandOutcome::Ignored;
        }
        self.history.push(command.to_string());
        self.cursor = None;

        let output: Vec<String> = match command {
            "clear" => return CommandOutcome::Clear,
            "who am i" | "whoami" => lines(&["Dark Knight"]),
            "pwd" => vec![self.cwd.clone()],
            "ls" => lines(&ROOT_LISTING),
            "ls -la" => ROOT_LISTING
                .iter()
                .map(|entry| format!("drwxr-xr-x  2 darkknight  batfamily  4096 Jan 15 10:30 {entry}"))
                .collect(),
            "cd" => lines(&["Usage: cd <directory>"]),
            "cat" => lines(&["Usage: cat <filename>"]),
            "ps" => lines(&[
                "PID TTY          TIME CMD",
                "1234 pts/0    00:00:01 batcomputer",
                "1235 pts/0    00:00:00 surveillance",
                "1236 pts/0    00:00:00 gps_tracking",
                "1237 pts/0    00:00:00 comm_system",
                "1238 pts/0    00:00:00 security_protocols",
            ]),
            "top" => lines(&[
                "top - 18:30:45 up 3 days, 3:15, 1 user, load average: 0.52, 0.48, 0.45",
                "Tasks: 15 total, 1 running, 14 sleeping, 0 stopped, 0 zombie",
                "%Cpu(s): 12.5 us, 8.2 sy, 0.0 ni, 79.3 id, 0.0 wa, 0.0 hi, 0.0 si, 0.0 st",
                "MiB Mem : 32768.0 total, 12500.0 free, 8500.0 used, 11768.0 buff/cache",
                "",
                "PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND",
                "1234 darkknight  20   0  204800  12500   8500 S  12.5   0.4   0:01.23 batcomputer",
                "1235 darkknight  20   0  102400   8500   4250 S   8.2   0.3   0:00.45 surveillance",
            ]),
            "df" => lines(&[
                "Filesystem     1K-blocks    Used Available Use% Mounted on",
                "/dev/batcave   104857600  8500000  96357600   9% /batcave",
                "/dev/evidence   52428800  1250000  51178800   2% /evidence",
                "/dev/surveillance 26214400  850000  25364400   3% /surveillance",
            ]),
            "free" => lines(&[
                "              total        used        free      shared  buff/cache   available",
                "Mem:       33554432    8704000   12582912     1048576   12267520   22544384",
                "Swap:             0          0          0",
            ]),
            "date" => vec![now()],
            "uptime" => lines(&["up 3 days, 3 hours, 15 minutes"]),
            "uname" => lines(&["BatOS v.978.0.06.51"]),
            "uname -a" => lines(&[
                "BatOS v.978.0.06.51 #1 SMP PREEMPT Jan 15 10:30:00 UTC 2024 x86_64 BatOS",
            ]),
            "help" => lines(&HELP),
            _ => {
                if let Some(dir) = command.strip_prefix("cd ") {
                    self.change_directory(dir.trim())
                } else if let Some(file) = command.strip_prefix("cat ") {
                    read_file(file.trim())
                } else {
                    vec![format!("bash: {command}: command not found")]
                }
            }
        };
        CommandOutcome::Output(output)
    }

    /// Steps backwards through history, returning the entry to show in the input.
    pub fn history_previous(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.history.get(index).map(String::as_str)
    }

    /// Steps forwards through history; `None` once past the newest entry.
    pub fn history_next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.history.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(index);
        self.history.get(index).map(String::as_str)
    }

    fn change_directory(&mut self, dir: &str) -> Vec<String> {
        if dir == ".." {
            if self.cwd == ROOT_DIRECTORY {
                return lines(&["Already at root directory"]);
            }
            self.cwd = ROOT_DIRECTORY.to_string();
            return vec![format!("Changed directory to {ROOT_DIRECTORY}")];
        }
        if ENTERABLE_DIRECTORIES.contains(&dir) {
            self.cwd = format!("{ROOT_DIRECTORY}/{dir}");
            return vec![format!("Changed directory to {}", self.cwd)];
        }
        vec![format!("cd: {dir}: No such file or directory")]
    }
}

fn read_file(file: &str) -> Vec<String> {
    match file {
        "batmobile/status" => lines(&[
            "Batmobile Status Report:",
            "Engine: Operational",
            "Fuel: 95%",
            "Armor: Intact",
            "Weapons: Armed",
            "Navigation: GPS Active",
            "Last Maintenance: 2 days ago",
        ]),
        "surveillance/active_targets" => lines(&[
            "Active Surveillance Targets:",
            "1. Joker - Last seen: Gotham City Bank",
            "2. Penguin - Last seen: Iceberg Lounge",
            "3. Riddler - Last seen: Gotham Museum",
            "4. Two-Face - Last seen: Gotham Courthouse",
            "5. Scarecrow - Last seen: Gotham University",
        ]),
        "case_files/joker_case" => lines(&[
            "Case File: The Joker",
            "Status: Active",
            "Last Crime: Bank robbery at Gotham Central Bank",
            "Victims: 0 (prevented)",
            "Evidence: Playing cards, green hair dye",
            "Pattern: Chemical weapons, psychological warfare",
            "Threat Level: EXTREME",
        ]),
        _ => vec![format!("cat: {file}: No such file or directory")],
    }
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(session: &mut TerminalSession, line: &str) -> CommandOutcome {
        session.execute(line, || "01/01/2024, 00:00:00".to_string())
    }

    fn output(session: &mut TerminalSession, line: &str) -> Vec<String> {
        match run(session, line) {
            CommandOutcome::Output(lines) => lines,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn identity_and_listing_commands() {
        let mut session = TerminalSession::default();

        assert_eq!(output(&mut session, "whoami"), vec!["Dark Knight"]);
        assert_eq!(output(&mut session, "who am i"), vec!["Dark Knight"]);
        assert_eq!(output(&mut session, "pwd"), vec!["/batcave"]);
        assert_eq!(output(&mut session, "ls").len(), 10);
        assert!(output(&mut session, "ls -la")[0].ends_with("batmobile/"));
        assert_eq!(output(&mut session, "date"), vec!["01/01/2024, 00:00:00"]);
    }

    #[test]
    fn cd_moves_between_known_directories() {
        let mut session = TerminalSession::default();

        assert_eq!(
            output(&mut session, "cd ..")[0],
            "Already at root directory"
        );
        assert_eq!(
            output(&mut session, "cd gadgets")[0],
            "Changed directory to /batcave/gadgets"
        );
        assert_eq!(session.cwd(), "/batcave/gadgets");
        assert_eq!(output(&mut session, "cd ..")[0], "Changed directory to /batcave");
        assert_eq!(
            output(&mut session, "cd arkham")[0],
            "cd: arkham: No such file or directory"
        );
        assert_eq!(session.cwd(), ROOT_DIRECTORY);
    }

    #[test]
    fn cat_reads_canned_files() {
        let mut session = TerminalSession::default();

        assert_eq!(
            output(&mut session, "cat case_files/joker_case").last().map(String::as_str),
            Some("Threat Level: EXTREME")
        );
        assert_eq!(
            output(&mut session, "cat diary"),
            vec!["cat: diary: No such file or directory"]
        );
    }

    #[test]
    fn unknown_clear_and_blank_lines() {
        let mut session = TerminalSession::default();

        assert_eq!(
            output(&mut session, "  rm -rf /  "),
            vec!["bash: rm -rf /: command not found"]
        );
        assert_eq!(run(&mut session, "clear"), CommandOutcome::Clear);
        assert_eq!(run(&mut session, "   "), CommandOutcome::Ignored);
    }

    #[test]
    fn history_walks_back_and_forward() {
        let mut session = TerminalSession::default();
        assert_eq!(session.history_previous(), None);
        run(&mut session, "pwd");
        run(&mut session, "ls");

        assert_eq!(session.history_previous(), Some("ls"));
        assert_eq!(session.history_previous(), Some("pwd"));
        assert_eq!(session.history_previous(), Some("pwd"));
        assert_eq!(session.history_next(), Some("ls"));
        assert_eq!(session.history_next(), None);
        assert_eq!(session.history_next(), None);
    }
}
