//! Plan parsing and execution history.

/// Split plan text into steps: one step per line that is not blank.
///
/// Lines are returned exactly as written (numbering included), in order.
pub fn extract_steps(plan: &str) -> Vec<&str> {
    plan.split('\n').filter(|line| !line.trim().is_empty()).collect()
}

/// Append-only record of executed steps, handed to the synthesis stage.
#[derive(Debug, Clone, Default)]
pub struct ExecutionHistory {
    text: String,
    steps: usize,
}

impl ExecutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one executed step. `index` is 1-based.
    pub fn record(&mut self, index: usize, step: &str, result: &str) {
        self.text
            .push_str(&format!("\nStep {}: {}\nResult: {}\n", index, step, result));
        self.steps += 1;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of steps recorded
    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped_in_order() {
        let plan = "1. Brainstorm ocean imagery\n\n   \n2. Draft haiku\n\t\n3. Polish haiku\n";
        assert_eq!(
            extract_steps(plan),
            vec!["1. Brainstorm ocean imagery", "2. Draft haiku", "3. Polish haiku"]
        );
    }

    #[test]
    fn test_lines_are_kept_verbatim() {
        let plan = "Steps:\n  - indented bullet\n1. first\n1. first";
        let steps = extract_steps(plan);
        assert_eq!(steps, vec!["Steps:", "  - indented bullet", "1. first", "1. first"]);
    }

    #[test]
    fn test_empty_and_blank_plans_have_no_steps() {
        assert!(extract_steps("").is_empty());
        assert!(extract_steps("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_crlf_lines_count_once() {
        let steps = extract_steps("a\r\n\r\nb\r\n");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_history_format() {
        let mut history = ExecutionHistory::new();
        assert!(history.is_empty());

        history.record(1, "1. Boil water", "Water is boiling");
        history.record(2, "2. Add pasta", "Pasta added");

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.as_str(),
            "\nStep 1: 1. Boil water\nResult: Water is boiling\n\nStep 2: 2. Add pasta\nResult: Pasta added\n"
        );
    }
}
