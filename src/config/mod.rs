pub mod env;

pub use env::AzureConfig;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "testgen")]
#[command(about = "Generate pytest unit tests for a code snippet via a hosted chat model")]
pub struct CliConfig {
    #[arg(
        long,
        help = "File containing the code snippet; a built-in sample is used when omitted"
    )]
    pub snippet_file: Option<String>,

    #[arg(long, default_value = "generated_tests.py")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
