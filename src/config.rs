use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Deserialize, Debug, Default)]
#[command(author, version, about)]
#[clap(disable_help_flag = true)]
#[serde(default)]
pub struct OptionalConfig {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Prints every executed instruction and its ALU result to stderr
    #[arg(long)]
    pub trace: bool,

    /// Prints the final state of the register file after execution
    #[arg(long)]
    pub print_state: bool,

    /// The program image to execute (one hex byte per line)
    pub file: Option<String>,
}

impl OptionalConfig {
    pub fn get_args() -> Self {
        Self::parse()
    }

    pub fn get_toml() -> Self {
        std::fs::read_to_string("monocycle.toml")
            .ok()
            .map(|config| toml::from_str(&config).expect("Failed to parse config file"))
            .unwrap_or_default()
    }

    pub fn merge(self, rhs: Self) -> Self {
        Self {
            help: self.help.or(rhs.help),
            trace: self.trace || rhs.trace,
            print_state: self.print_state || rhs.print_state,
            file: self.file.or(rhs.file),
        }
    }
}

#[derive(Debug, Default)]
pub struct Config {
    pub trace: bool,
    pub print_state: bool,
    pub file: String,
}

impl From<OptionalConfig> for Config {
    fn from(config: OptionalConfig) -> Self {
        Self {
            trace: config.trace,
            print_state: config.print_state,
            file: config.file.unwrap_or_else(|| {
                eprintln!("No file specified");
                std::process::exit(1);
            }),
        }
    }
}

impl Config {
    pub fn get() -> Self {
        OptionalConfig::get_toml()
            .merge(OptionalConfig::get_args())
            .into()
    }
}
