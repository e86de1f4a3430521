//! # goalcraft Agent
//!
//! The agent drives one goal through four stages:
//! 1. Plan - the LLM breaks the goal into numbered steps
//! 2. Execute - each plan line is carried out, up to `max_steps`
//! 3. Reflect - after every step the LLM says CONTINUE or STOP
//! 4. Synthesize - the executed steps are folded into a final answer
//!
//! Every stage produces one labeled [`LogEntry`]; the ordered entries are the
//! run's [`Transcript`].

mod agent;
mod decision;
mod plan;
pub mod prompts;
mod transcript;

#[cfg(test)]
mod test_support;

pub use agent::{AgentConfig, GoalAgent, EARLY_STOP_MESSAGE};
pub use decision::Decision;
pub use plan::{extract_steps, ExecutionHistory};
pub use transcript::{LogEntry, Stage, Transcript};

pub use goalcraft_llm::{Error, ErrorKind, Result, SamplingParams, TextGenerator};
