//! # goalcraft CLI
//!
//! Command-line host for the goal agent.
//!
//! Usage:
//!   goalcraft <goal>
//!   goalcraft run <goal>
//!   goalcraft prompts
//!
//! Examples:
//!   goalcraft "Write a haiku about the ocean"
//!   goalcraft --max-steps 2 --json "Plan a weekend trip to Lisbon"
//!   goalcraft --provider local --model llama3.2 "Outline a blog post on Rust lifetimes"

mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use goalcraft_agent::{prompts, AgentConfig, GoalAgent, LogEntry, Transcript};
use goalcraft_llm::{
    AnthropicProvider, Error, ErrorKind, LlmProvider, OpenAIProvider, ProviderConfig, Result,
    SamplingParams,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "goalcraft")]
#[command(author, version, about = "goalcraft - plan, execute, reflect, answer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Goal to pursue (when not using subcommands)
    goal: Vec<String>,

    /// Maximum number of plan steps to execute
    #[arg(long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    max_steps: u8,

    /// LLM backend
    #[arg(long, global = true, value_enum, default_value_t = Backend::Groq)]
    provider: Backend,

    /// Model identifier (defaults to the backend's default model)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override the backend's base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key; falls back to the backend's usual variable (GROQ_API_KEY, ...)
    #[arg(long, global = true, env = "GOALCRAFT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Sampling temperature, 0.0 - 1.0
    #[arg(long, global = true, default_value_t = 0.3)]
    temperature: f32,

    /// Maximum output tokens per stage
    #[arg(long, global = true, default_value_t = 600)]
    max_tokens: usize,

    /// Print the transcript as JSON
    #[arg(long, global = true, conflicts_with = "quiet")]
    json: bool,

    /// Quiet mode - only show the final answer
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the agent on a goal
    Run {
        /// The goal description
        #[arg(required = true)]
        goal: Vec<String>,
    },
    /// Show the system instruction used by each stage
    Prompts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Groq,
    Openai,
    Anthropic,
    /// OpenAI-compatible server without auth (Ollama, vLLM)
    Local,
}

impl Backend {
    /// Conventional environment variable holding this backend's key
    fn key_var(&self) -> Option<&'static str> {
        match self {
            Backend::Groq => Some("GROQ_API_KEY"),
            Backend::Openai => Some("OPENAI_API_KEY"),
            Backend::Anthropic => Some("ANTHROPIC_API_KEY"),
            Backend::Local => None,
        }
    }
}

/// Build the provider config from flags. `lookup` resolves environment variables.
fn provider_config(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<ProviderConfig> {
    let api_key = match (&cli.api_key, cli.provider.key_var()) {
        (Some(key), _) => Some(key.clone()),
        (None, Some(var)) => Some(lookup(var).ok_or_else(|| {
            Error::config_invalid(format!("{} is not set; export it or pass --api-key", var))
                .with_operation("cli::provider_config")
                .with_context("provider", format!("{:?}", cli.provider).to_lowercase())
        })?),
        (None, None) => None,
    };

    let mut config = match cli.provider {
        Backend::Groq => ProviderConfig::groq(api_key.unwrap_or_default()),
        Backend::Openai => ProviderConfig::openai(api_key.unwrap_or_default()),
        Backend::Anthropic => ProviderConfig::anthropic(api_key.unwrap_or_default()),
        Backend::Local => {
            let mut config = ProviderConfig::local("http://localhost:11434/v1", "llama3.2");
            config.api_key = api_key;
            config
        }
    };

    if let Some(model) = &cli.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }
    Ok(config)
}

fn agent_config(cli: &Cli) -> Result<AgentConfig> {
    let sampling = SamplingParams::new(cli.temperature, cli.max_tokens)?;
    Ok(AgentConfig::default()
        .with_max_steps(usize::from(cli.max_steps))
        .with_sampling(sampling))
}

fn print_entry(entry: &LogEntry) {
    println!("=== {} ===", entry.stage);
    println!("{}", entry.text);
    println!();
}

async fn run_with<P: LlmProvider>(provider: P, goal: &str, cli: &Cli) -> Result<Transcript> {
    info!(provider = provider.name(), model = provider.default_model(), "provider ready");

    let mut agent = GoalAgent::new(provider, agent_config(cli)?);
    if !cli.json && !cli.quiet {
        agent = agent.with_entry_callback(print_entry);
    }
    agent.run(goal).await
}

async fn run_goal(goal: &str, cli: &Cli) -> Result<()> {
    let config = provider_config(cli, |var| std::env::var(var).ok())?;

    let transcript = match cli.provider {
        Backend::Anthropic => run_with(AnthropicProvider::new(config)?, goal, cli).await?,
        _ => run_with(OpenAIProvider::new(config)?, goal, cli).await?,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&transcript).map_err(|e| {
            Error::new(ErrorKind::SerializationFailed, "could not encode transcript")
                .with_operation("cli::run_goal")
                .set_source(e)
        })?;
        println!("{}", json);
    } else if cli.quiet {
        println!("{}", transcript.final_answer().unwrap_or_default());
    }
    Ok(())
}

/// Join goal words; `None` when nothing but whitespace was given.
fn resolve_goal(words: &[String]) -> Option<String> {
    let goal = words.join(" ");
    if goal.trim().is_empty() {
        None
    } else {
        Some(goal)
    }
}

fn show_prompts() {
    for (stage, instruction) in prompts::STAGE_INSTRUCTIONS {
        println!("{:<11} {}", stage, instruction);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let words = match &cli.command {
        Some(Commands::Prompts) => {
            show_prompts();
            return;
        }
        Some(Commands::Run { goal }) => goal,
        None => &cli.goal,
    };

    let Some(goal) = resolve_goal(words) else {
        eprintln!("Error: No goal provided.");
        eprintln!("Usage: goalcraft [OPTIONS] <GOAL>...");
        eprintln!("       goalcraft run <GOAL>...");
        eprintln!("       goalcraft prompts");
        eprintln!("\nExamples:");
        eprintln!("  goalcraft \"Write a haiku about the ocean\"");
        eprintln!("  goalcraft --max-steps 2 --json \"Plan a picnic\"");
        eprintln!("  goalcraft --help");
        std::process::exit(1);
    };

    if let Err(e) = run_goal(&goal, &cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
