use clap::Parser;
use env_logger::{Builder, Target};

mod report;

fn main() -> anyhow::Result<()> {
    let args = args::Cli::parse();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    let mut builder = Builder::from_default_env();
    builder.target(log_target(&args));
    builder.init();

    match args.action {
        args::Action::Codecs(ref codecs) => {
            let config = kafka_config::KafkaConfig::load(codecs.config.as_deref())?;
            if config.schema_registry_settings()?.is_some() {
                log::info!("Schema registry settings are valid");
            } else {
                log::warn!("No schema registry configured, keys and values are passed through untouched");
            }

            let report = report::CodecReport::new(&config, &codecs.elements());
            match codecs.format {
                args::OutputFormat::Text => print!("{report}"),
                args::OutputFormat::Json => println!("{}", report.to_json()?),
            }
        }
    }

    Ok(())
}

/// Stdout belongs to the report when it is machine readable, so logs go to stderr then.
fn log_target(args: &args::Cli) -> Target {
    match (&args.action, &args.log_output) {
        (args::Action::Codecs(codecs), _) if codecs.format == args::OutputFormat::Json => {
            Target::Stderr
        }
        (_, args::LogOutput::StdOut) => Target::Stdout,
        (_, args::LogOutput::StdErr) => Target::Stderr,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use env_logger::Target;

    use super::log_target;

    fn target(argv: &[&str]) -> Target {
        log_target(&args::Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_json_report_logs_to_stderr() {
        assert!(matches!(target(&["kafka-codecs", "codecs", "--format", "json"]), Target::Stderr));
        assert!(matches!(
            target(&["kafka-codecs", "codecs", "--format", "json", "--log-output", "std-out"]),
            Target::Stderr
        ));
    }

    #[test]
    fn test_text_report_follows_log_output() {
        assert!(matches!(target(&["kafka-codecs", "codecs"]), Target::Stdout));
        assert!(matches!(
            target(&["kafka-codecs", "codecs", "--log-output", "std-err"]),
            Target::Stderr
        ));
    }
}
