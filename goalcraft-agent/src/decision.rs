//! Reading the critic's verdict out of a reflection.

use tracing::warn;

/// What the loop does after a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Stop,
}

impl Decision {
    /// `Stop` iff the text contains "STOP" in any letter case, anywhere.
    ///
    /// Anything else continues, including replies that name neither token;
    /// those are logged.
    pub fn from_reflection(text: &str) -> Self {
        let upper = text.to_uppercase();
        if upper.contains("STOP") {
            return Decision::Stop;
        }
        if !upper.contains("CONTINUE") {
            warn!(
                reply = %preview(text, 80),
                "reflection named neither CONTINUE nor STOP, continuing"
            );
        }
        Decision::Continue
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Decision::Stop)
    }
}

fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_in_any_case() {
        assert_eq!(Decision::from_reflection("STOP - goal already satisfied"), Decision::Stop);
        assert_eq!(Decision::from_reflection("stop"), Decision::Stop);
        assert_eq!(Decision::from_reflection("We should Stop here."), Decision::Stop);
    }

    #[test]
    fn test_substring_match_is_permissive() {
        // "nonstop" still contains the token
        assert_eq!(
            Decision::from_reflection("CONTINUE - nonstop progress so far"),
            Decision::Stop
        );
    }

    #[test]
    fn test_everything_else_continues() {
        assert_eq!(Decision::from_reflection("CONTINUE - more to do"), Decision::Continue);
        assert_eq!(Decision::from_reflection("Looks fine to me"), Decision::Continue);
        assert_eq!(Decision::from_reflection(""), Decision::Continue);
        assert!(!Decision::from_reflection("continue").is_stop());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("ocean 🌊 waves", 7), "ocean 🌊…");
        assert_eq!(preview("short", 80), "short");
    }
}
