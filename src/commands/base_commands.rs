use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::report_yaml::OutputFormat;

#[derive(Parser)]
#[command(name = "roi", author, version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate integration cost savings for a scenario
    Calculate {
        /// Scenario YAML file
        #[arg(short, long, required_unless_present = "defaults", conflicts_with = "defaults")]
        input: Option<String>,
        /// Use the built-in default scenario instead of an input file
        #[arg(long)]
        defaults: bool,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Optional config YAML with improvement factors and report settings
        #[arg(short, long)]
        config: Option<String>,
        /// Output PNG chart (defaults to <output>.png)
        #[arg(long)]
        chart: Option<String>,
        /// Report file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Write the default scenario as an editable YAML template
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Calculate savings from generative-AI task automation
    Genai {
        /// Task automation YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Optional config YAML (currency symbol)
        #[arg(short, long)]
        config: Option<String>,
        /// Report file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Calculate revenue from additional underwriting capacity
    Underwriting {
        /// Underwriting YAML file
        #[arg(short, long)]
        input: String,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Optional config YAML (currency symbol)
        #[arg(short, long)]
        config: Option<String>,
        /// Report file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
