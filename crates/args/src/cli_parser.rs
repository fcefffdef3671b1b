use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use kafka_config::Element;

#[derive(Parser, Debug)]
#[command(name = "Kafka Codecs")]
#[command(author)]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Shows which kafka message elements are encoded with a schema aware codec", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
    #[clap(value_enum, default_value_t=LogOutput::StdOut)]
    #[arg(short, long, global = true)]
    pub log_output: LogOutput,
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum LogOutput {
    StdOut,
    StdErr,
}

#[derive(clap::Subcommand, Debug)]
pub enum Action {
    /// Print the codec decisions for the message key and value
    Codecs(CodecsConfig),
}

#[derive(Args, Debug)]
pub struct CodecsConfig {
    /// Config file, or folder containing `.kafka.config.yaml` / `.kafka.config.json`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Only report this element
    #[arg(short, long, value_enum)]
    pub element: Option<ElementArg>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementArg {
    Key,
    Value,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<ElementArg> for Element {
    fn from(element: ElementArg) -> Self {
        match element {
            ElementArg::Key => Element::Key,
            ElementArg::Value => Element::Value,
        }
    }
}

impl CodecsConfig {
    /// The elements to report on, both unless one was asked for.
    pub fn elements(&self) -> Vec<Element> {
        match self.element {
            Some(element) => vec![element.into()],
            None => vec![Element::Key, Element::Value],
        }
    }
}
