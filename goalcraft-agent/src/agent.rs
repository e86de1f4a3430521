//! Agent implementation - drives a goal through plan, execute, reflect, synthesize

use goalcraft_llm::{ChatMessage, Result, SamplingParams, TextGenerator};
use tracing::{debug, info, warn};

use crate::decision::Decision;
use crate::plan::{extract_steps, ExecutionHistory};
use crate::prompts;
use crate::transcript::{LogEntry, Stage, Transcript};

/// Text of the STATUS entry recorded when the critic stops the loop
pub const EARLY_STOP_MESSAGE: &str = "Agent decided to stop early.";

/// Configuration for a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Upper bound on executed steps; plan lines past it are dropped
    pub max_steps: usize,
    /// Applied to every stage
    pub sampling: SamplingParams,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_steps: 5,
            sampling: SamplingParams::default(),
        }
    }
}

impl AgentConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }
}

type EntryCallback = Box<dyn Fn(&LogEntry) + Send + Sync>;

/// The goal loop controller.
///
/// Holds no per-run state: every call to [`GoalAgent::run`] starts from an
/// empty history and transcript.
pub struct GoalAgent<G> {
    generator: G,
    config: AgentConfig,
    on_entry: Option<EntryCallback>,
}

impl<G: TextGenerator> GoalAgent<G> {
    pub fn new(generator: G, config: AgentConfig) -> Self {
        Self {
            generator,
            config,
            on_entry: None,
        }
    }

    /// Called with every entry as soon as it is recorded.
    ///
    /// Entries seen here before a failed run are the only record of it.
    pub fn with_entry_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&LogEntry) + Send + Sync + 'static,
    {
        self.on_entry = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Run a goal to its final answer.
    ///
    /// Any generator failure aborts the run; the error carries the label of the
    /// stage being produced and how many entries were recorded before it.
    pub async fn run(&self, goal: &str) -> Result<Transcript> {
        if goal.trim().is_empty() {
            warn!("goal is blank, running anyway");
        }
        info!(max_steps = self.config.max_steps, "starting run");

        let mut transcript = Transcript::new();
        let mut history = ExecutionHistory::new();

        let plan = self
            .generate(Stage::Plan, prompts::plan(goal), &transcript)
            .await?;
        let steps: Vec<String> = extract_steps(&plan).into_iter().map(String::from).collect();
        if steps.is_empty() {
            warn!("plan has no steps, going straight to synthesis");
        } else if steps.len() > self.config.max_steps {
            info!(
                planned = steps.len(),
                max_steps = self.config.max_steps,
                "plan exceeds max_steps, dropping the tail"
            );
        }
        self.record(&mut transcript, Stage::Plan, plan);

        for (i, step) in steps.iter().take(self.config.max_steps).enumerate() {
            let index = i + 1;

            let result = self
                .generate(Stage::Execute(index), prompts::execute(step), &transcript)
                .await?;
            history.record(index, step, &result);
            let reflect_prompt = prompts::reflect(goal, step, &result);
            self.record(&mut transcript, Stage::Execute(index), result);

            let reflection = self
                .generate(Stage::Reflection(index), reflect_prompt, &transcript)
                .await?;
            let decision = Decision::from_reflection(&reflection);
            self.record(&mut transcript, Stage::Reflection(index), reflection);

            if decision.is_stop() {
                info!(step = index, "critic stopped the loop");
                self.record(&mut transcript, Stage::Status, EARLY_STOP_MESSAGE.to_string());
                break;
            }
        }

        let answer = self
            .generate(
                Stage::FinalAnswer,
                prompts::synthesize(goal, history.as_str()),
                &transcript,
            )
            .await?;
        self.record(&mut transcript, Stage::FinalAnswer, answer);

        info!(
            executed = history.len(),
            entries = transcript.len(),
            "run complete"
        );
        Ok(transcript)
    }

    async fn generate(
        &self,
        stage: Stage,
        messages: Vec<ChatMessage>,
        transcript: &Transcript,
    ) -> Result<String> {
        debug!(stage = %stage, "calling generator");
        self.generator
            .generate(messages, &self.config.sampling)
            .await
            .map_err(|e| {
                e.with_operation("agent::run")
                    .with_context("stage", stage.label())
                    .with_context("entries", transcript.len().to_string())
            })
    }

    fn record(&self, transcript: &mut Transcript, stage: Stage, text: String) {
        debug!(stage = %stage, chars = text.len(), "recorded");
        let entry = LogEntry::new(stage, text);
        if let Some(callback) = &self.on_entry {
            callback(&entry);
        }
        transcript.push(entry);
    }
}
