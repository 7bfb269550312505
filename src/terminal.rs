//! The simulated shell: a fixed command table writing into a scrollback log.

use chrono::Local;

const COMMAND_HISTORY_LIMIT: usize = 50;

const HELP_TEXT: &str = "Available commands:
  help - Show this help message
  clear - Clear the terminal
  echo [text] - Display text
  ls - List files
  pwd - Print working directory
  date - Show current date and time
  version - Show version information";

const LS_TEXT: &str = "src/
public/
package.json
tsconfig.json
README.md";

const VERSION_TEXT: &str = "VS Code v1.85.0
Node.js v18.16.0
TypeScript 5.5.3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandOutput {
    Text(String),
    Clear,
}

/// Looks up a trimmed, lowercased command in the fixed table.
pub(crate) fn run_command(command: &str) -> CommandOutput {
    let text = match command {
        "help" => HELP_TEXT.to_string(),
        "clear" => return CommandOutput::Clear,
        "ls" => LS_TEXT.to_string(),
        "pwd" => "/home/project".to_string(),
        "date" => Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        "version" => VERSION_TEXT.to_string(),
        _ => match command.strip_prefix("echo ") {
            Some(rest) => rest.to_string(),
            None => {
                format!("Command not found: {command}. Type \"help\" for available commands.")
            }
        },
    };
    CommandOutput::Text(text)
}

#[derive(Debug, Clone)]
pub(crate) struct TerminalSession {
    pub(crate) open: bool,
    pub(crate) maximized: bool,
    pub(crate) input: String,
    pub(crate) scrollback: Vec<String>,
    /// Most recent first.
    pub(crate) history: Vec<String>,
    history_index: Option<usize>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            open: false,
            maximized: false,
            input: String::new(),
            scrollback: vec![
                "Welcome to VS Code Terminal".to_string(),
                "Type \"help\" for available commands".to_string(),
                String::new(),
            ],
            history: Vec::new(),
            history_index: None,
        }
    }
}

impl TerminalSession {
    pub(crate) fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub(crate) fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub(crate) fn backspace(&mut self) {
        self.input.pop();
    }

    /// Runs the pending input line. Blank input is ignored.
    pub(crate) fn submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.input);
        let command = raw.trim().to_lowercase();
        tracing::debug!(command = %command, "terminal command");
        match run_command(&command) {
            CommandOutput::Clear => {
                self.scrollback = vec![String::new()];
                return;
            }
            CommandOutput::Text(text) => {
                self.scrollback.push(format!("$ {raw}"));
                self.scrollback.extend(text.lines().map(str::to_string));
                self.scrollback.push(String::new());
            }
        }
        if !self.history.contains(&raw) {
            self.history.insert(0, raw);
            self.history.truncate(COMMAND_HISTORY_LIMIT);
        }
        self.history_index = None;
    }

    /// Recalls the next older command.
    pub(crate) fn history_up(&mut self) {
        let next = self.history_index.map_or(0, |i| i + 1);
        if next < self.history.len() {
            self.history_index = Some(next);
            self.input = self.history[next].clone();
        }
    }

    /// Steps back toward the newest command; past it the input is cleared.
    pub(crate) fn history_down(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                self.input.clear();
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.input = self.history[i - 1].clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(term: &mut TerminalSession, line: &str) {
        term.input = line.to_string();
        term.submit();
    }

    #[test]
    fn fixed_commands_produce_canned_output() {
        let text = |s: &str| CommandOutput::Text(s.to_string());
        assert_eq!(run_command("pwd"), text("/home/project"));
        assert_eq!(run_command("ls"), text(LS_TEXT));
        assert_eq!(run_command("version"), text(VERSION_TEXT));
        assert_eq!(run_command("clear"), CommandOutput::Clear);
        assert_eq!(run_command("echo hi there"), text("hi there"));
    }

    #[test]
    fn unknown_command_returns_fallback_text() {
        assert_eq!(
            run_command("make"),
            CommandOutput::Text(
                "Command not found: make. Type \"help\" for available commands.".to_string()
            )
        );
        // no argument means no echo
        assert!(matches!(
            run_command("echo"),
            CommandOutput::Text(t) if t.starts_with("Command not found")
        ));
    }

    #[test]
    fn date_is_not_empty() {
        match run_command("date") {
            CommandOutput::Text(t) => assert!(t.contains("GMT")),
            CommandOutput::Clear => panic!("date must print"),
        }
    }

    #[test]
    fn submit_appends_prompt_output_and_blank_line() {
        let mut term = TerminalSession::default();
        submit(&mut term, "  PWD ");
        let n = term.scrollback.len();
        let tail: Vec<&str> = term.scrollback[n - 3..].iter().map(String::as_str).collect();
        assert_eq!(tail, vec!["$   PWD ", "/home/project", ""]);
        assert!(term.input.is_empty());
        assert_eq!(term.history, vec!["  PWD ".to_string()]);
    }

    #[test]
    fn echo_output_is_lowercased_like_the_command() {
        let mut term = TerminalSession::default();
        submit(&mut term, "echo Hello World");
        assert!(term.scrollback.contains(&"hello world".to_string()));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut term = TerminalSession::default();
        let before = term.scrollback.clone();
        submit(&mut term, "   ");
        assert_eq!(term.scrollback, before);
        assert!(term.history.is_empty());
    }

    #[test]
    fn clear_resets_scrollback_and_skips_history() {
        let mut term = TerminalSession::default();
        submit(&mut term, "ls");
        submit(&mut term, "clear");
        assert_eq!(term.scrollback, vec![String::new()]);
        assert_eq!(term.history, vec!["ls".to_string()]);
        assert!(term.input.is_empty());
    }

    #[test]
    fn history_skips_duplicates_and_is_capped() {
        let mut term = TerminalSession::default();
        submit(&mut term, "pwd");
        submit(&mut term, "ls");
        submit(&mut term, "pwd");
        assert_eq!(term.history, vec!["ls".to_string(), "pwd".to_string()]);
        for i in 0..60 {
            submit(&mut term, &format!("echo {i}"));
        }
        assert_eq!(term.history.len(), COMMAND_HISTORY_LIMIT);
        assert_eq!(term.history[0], "echo 59");
    }

    #[test]
    fn history_navigation_walks_older_then_back_to_empty() {
        let mut term = TerminalSession::default();
        submit(&mut term, "pwd");
        submit(&mut term, "ls");
        term.history_up();
        assert_eq!(term.input, "ls");
        term.history_up();
        assert_eq!(term.input, "pwd");
        term.history_up();
        assert_eq!(term.input, "pwd");
        term.history_down();
        assert_eq!(term.input, "ls");
        term.history_down();
        assert!(term.input.is_empty());
        term.history_down();
        assert!(term.input.is_empty());
    }
}
