//! Stage prompts.
//!
//! Each builder returns the system instruction followed by the user turn.

use goalcraft_llm::ChatMessage;

pub const PLANNER: &str = "You are a strategic planner. Break the goal into clear numbered steps.";

pub const EXECUTOR: &str = "You are an executor. Perform the step clearly and practically.";

pub const CRITIC: &str = "You are a critic. Decide if the goal is achieved. \
                          Respond ONLY with CONTINUE or STOP and a short reason.";

pub const REPORTER: &str = "You are a final report generator. \
                            Based on all steps executed, produce a clear final answer \
                            that directly fulfills the original goal.";

/// (stage name, system instruction) in the order a run uses them
pub const STAGE_INSTRUCTIONS: [(&str, &str); 4] = [
    ("plan", PLANNER),
    ("execute", EXECUTOR),
    ("reflect", CRITIC),
    ("synthesize", REPORTER),
];

pub fn plan(goal: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(PLANNER),
        ChatMessage::user(format!("Create a step-by-step plan for this goal:\n{}", goal)),
    ]
}

pub fn execute(step: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(EXECUTOR),
        ChatMessage::user(format!("Execute this step:\n{}", step)),
    ]
}

pub fn reflect(goal: &str, step: &str, result: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(CRITIC),
        ChatMessage::user(format!(
            "\nGoal: {}\n\nStep: {}\n\nResult: {}\n\nShould we continue?\n",
            goal, step, result
        )),
    ]
}

pub fn synthesize(goal: &str, history: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(REPORTER),
        ChatMessage::user(format!(
            "\nOriginal Goal:\n{}\n\nExecution History:\n{}\n\nProvide the final consolidated answer.\n",
            goal, history
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalcraft_llm::Role;

    #[test]
    fn test_every_stage_is_system_then_user() {
        for messages in [
            plan("g"),
            execute("s"),
            reflect("g", "s", "r"),
            synthesize("g", "h"),
        ] {
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, Role::System);
            assert_eq!(messages[1].role, Role::User);
        }
    }

    #[test]
    fn test_reflect_carries_goal_step_and_result() {
        let messages = reflect("Write a haiku", "2. Draft haiku", "Waves fold into foam");
        assert_eq!(messages[0].content, CRITIC);
        assert_eq!(
            messages[1].content,
            "\nGoal: Write a haiku\n\nStep: 2. Draft haiku\n\nResult: Waves fold into foam\n\nShould we continue?\n"
        );
    }

    #[test]
    fn test_critic_asks_for_continue_or_stop() {
        assert!(CRITIC.contains("CONTINUE or STOP"));
        assert_eq!(STAGE_INSTRUCTIONS[2], ("reflect", CRITIC));
    }
}
