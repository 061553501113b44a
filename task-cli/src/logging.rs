use anyhow::Context;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::str::FromStr;

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Routes all log output to stderr so it never mixes with the menu on stdout.
pub fn init(level: &str) -> anyhow::Result<log4rs::Handle> {
    let level = parse_level(level)?;
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(log4rs::init_config(config)?)
}

fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    LevelFilter::from_str(level).with_context(|| format!("unknown log level '{level}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn parse_level_rejects_unknown_names() {
        let error = parse_level("loud").unwrap_err();

        assert_eq!(error.to_string(), "unknown log level 'loud'");
    }
}
