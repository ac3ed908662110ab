use crate::config::OptionOverrides;
use regex::Regex;
use std::sync::OnceLock;

fn option_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^dotenv_config_(encoding|path|debug)=(.+)$")
            .expect("option pattern is a valid regex")
    })
}

/// Collects `dotenv_config_<option>=<value>` arguments.
///
/// Other arguments, unknown option names and empty values are ignored. When an
/// option is given twice the last one wins.
pub fn parse<I, S>(args: I) -> OptionOverrides
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern = option_pattern();

    args.into_iter()
        .fold(OptionOverrides::default(), |mut overrides, arg| {
            if let Some(captures) = pattern.captures(arg.as_ref()) {
                overrides.set(&captures[1], captures[2].to_string());
            }
            overrides
        })
}
