#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Warning,
    Info,
}

/// A lint marker over a single line. Columns are 1-based, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Marker {
    pub(crate) severity: Severity,
    pub(crate) message: &'static str,
    pub(crate) line: usize,
    pub(crate) start_col: usize,
    pub(crate) end_col: usize,
}

fn wants_semicolon(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty()
        && !t.ends_with(';')
        && !t.ends_with('{')
        && !t.ends_with('}')
        && !t.starts_with("//")
        && !t.starts_with("import")
        && !t.starts_with("export")
        && !line.contains("function")
        && !line.contains("=>")
}

pub(crate) fn lint_lines(lines: &[String]) -> Vec<Marker> {
    let mut out = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if wants_semicolon(line) {
            out.push(Marker {
                severity: Severity::Warning,
                message: "Missing semicolon",
                line: idx + 1,
                start_col: 1,
                end_col: line.chars().count() + 1,
            });
        }
        if let Some(pos) = line.find("console.log") {
            let col = line[..pos].chars().count() + 1;
            out.push(Marker {
                severity: Severity::Info,
                message: "Consider removing console.log before production",
                line: idx + 1,
                start_col: col,
                end_col: col + "console.log".len(),
            });
        }
    }
    out
}

pub(crate) fn summary(markers: &[Marker]) -> String {
    match markers.len() {
        0 => "No issues detected".to_string(),
        1 => "1 issue found".to_string(),
        n => format!("{n} issues found"),
    }
}

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Checks that brackets pair up, skipping quoted text and `//` comments.
/// The error reads like a parser's: the offending token or end of input.
pub(crate) fn check_brackets(lines: &[String]) -> Result<(), String> {
    let mut open: Vec<char> = Vec::new();
    for line in lines {
        let mut quote: Option<char> = None;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if let Some(q) = quote {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '"' | '\'' | '`' => quote = Some(c),
                '/' if chars.peek() == Some(&'/') => break,
                '(' | '[' | '{' => open.push(c),
                ')' | ']' | '}' => {
                    if open.pop().map(closer_for) != Some(c) {
                        return Err(format!("Unexpected token '{c}'"));
                    }
                }
                _ => {}
            }
        }
    }
    if open.is_empty() {
        Ok(())
    } else {
        Err("Unexpected end of input".to_string())
    }
}
