use super::Terminal;
use crate::core::verb::Verb;

const MENU_WIDTH: usize = 60;
const COLUMN_WIDTH: usize = 20;
const VERBS_PER_ROW: usize = 3;

/// The command menu, one entry per output line.
pub fn banner() -> Vec<String> {
    let separator = "=".repeat(MENU_WIDTH);
    let mut lines = vec![
        separator.clone(),
        "Available Commands:".to_string(),
        separator.clone(),
    ];

    for row in Verb::ALL.chunks(VERBS_PER_ROW) {
        let line: String = row
            .iter()
            .map(|verb| format!("{:<width$}", verb.as_str(), width = COLUMN_WIDTH))
            .collect();
        lines.push(line);
    }

    lines.push(separator);
    lines
}

pub fn show(term: &mut dyn Terminal) {
    for line in banner() {
        term.say(&line);
    }
}
