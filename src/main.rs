use clap::{Parser as ClapParser, Subcommand};
use dotenv_parser::{
    cli, config, env, load, read_source, scan, ConfigOptions, Error, OptionOverrides, TargetEnv,
};
use std::process::{Command, ExitCode};

#[derive(ClapParser)]
#[command(author, version, about = "Parse and load .env files")]
struct Cli {
    /// Location of the .env file (defaults to ./.env)
    #[arg(long, global = true)]
    path: Option<String>,
    /// Text encoding of the .env file (utf8, latin1, utf16le, ...)
    #[arg(long, global = true)]
    encoding: Option<String>,
    /// Log every key that is set or skipped
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of the .env file as JSON
    Tokens {
        /// dotenv_config_<encoding|path|debug>=<value> settings
        settings: Vec<String>,
    },
    /// Print the parsed key/value pairs as JSON
    Parse {
        /// dotenv_config_<encoding|path|debug>=<value> settings
        settings: Vec<String>,
    },
    /// Load the .env file into the environment and run a command
    Run {
        /// dotenv_config_<encoding|path|debug>=<value> settings
        settings: Vec<String>,
        /// Command to execute, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

impl Cli {
    fn settings(&self) -> &[String] {
        match &self.command {
            Commands::Tokens { settings }
            | Commands::Parse { settings }
            | Commands::Run { settings, .. } => settings,
        }
    }

    /// Environment variables, then `dotenv_config_*` settings, then flags.
    fn overrides(&self) -> Result<OptionOverrides, Error> {
        let flags = OptionOverrides {
            encoding: self.encoding.clone(),
            path: self.path.clone(),
            debug: self.debug.then(|| "true".to_string()),
        };

        Ok(env::options()?.merge(cli::parse(self.settings())).merge(flags))
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, options: &ConfigOptions) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Tokens { .. } => {
            let tokens = scan(&read_source(options)?)?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        Commands::Parse { .. } => {
            let parsed = load(options, &mut TargetEnv::default())?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Run { command, .. } => {
            config(options)?;

            let (program, args) = command.split_first().ok_or("no command given")?;
            let status = Command::new(program).args(args).status()?;

            return Ok(match status.code() {
                Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
                None => ExitCode::FAILURE,
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.overrides().and_then(|overrides| overrides.resolve());

    init_logging(options.as_ref().map_or(false, |options| options.debug));

    let result = options
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
        .and_then(|options| run(&cli, &options));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
