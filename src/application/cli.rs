use std::io;
use std::path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgGroup;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::Region;

/// The command selected on the command line, handed to the UI layer after
/// configuration is loaded.
pub enum AppCommand {
    Predict { image: PathBuf },
    Library { search: String, page: u32 },
    Food { name: String },
    Login { username: Option<String> },
    Register { username: Option<String> },
    Logout,
    WhoAmI,
    History { clear: bool, delete: Option<String> },
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_predict() -> Command {
    return Command::new("predict")
        .about("Uploads a photo of a dish and shows what the service makes of it.")
        .arg(
            Arg::new("image")
                .help("Path to the image to analyze.")
                .num_args(1)
                .required(true),
        );
}

fn subcommand_library() -> Command {
    return Command::new("library")
        .about("Browses the food library with search, region filter, and pagination. Requires login.")
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .help("Search text matched against dish names and descriptions.")
                .num_args(1),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .help("Page to fetch. [default: 1]")
                .num_args(1),
        );
}

fn subcommand_food() -> Command {
    return Command::new("food")
        .about("Shows the full record of one dish.")
        .arg(
            Arg::new("name")
                .help("The dish identifier, as listed in the library.")
                .num_args(1)
                .required(true),
        );
}

fn subcommand_login() -> Command {
    return Command::new("login")
        .about("Logs in and stores the session token locally.")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .help("Username to log in with. Prompted for when omitted.")
                .num_args(1),
        );
}

fn subcommand_register() -> Command {
    return Command::new("register")
        .about("Creates a new account. You still log in afterwards.")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .help("Username to register. Prompted for when omitted.")
                .num_args(1),
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Lists your saved predictions. Requires login.")
        .arg(
            Arg::new("clear")
                .long("clear")
                .help("Delete the entire prediction history.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("delete")
                .long("delete")
                .help("Delete a single history entry by its id.")
                .num_args(1),
        )
        .group(ArgGroup::new("history-args").args(["clear", "delete"]));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("foodlens")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_predict())
        .subcommand(subcommand_library())
        .subcommand(subcommand_food())
        .subcommand(subcommand_login())
        .subcommand(subcommand_register())
        .subcommand(Command::new("logout").about("Clears the stored session."))
        .subcommand(Command::new("whoami").about("Shows the logged-in username, if any."))
        .subcommand(subcommand_history())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ApiUrl.to_string())
                .long(ConfigKey::ApiUrl.to_string())
                .env("FOODLENS_API_URL")
                .num_args(1)
                .help(format!(
                    "Base URL of the food recognition service. [default: {}]",
                    Config::default(ConfigKey::ApiUrl)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::AuthFile.to_string())
                .long(ConfigKey::AuthFile.to_string())
                .env("FOODLENS_AUTH_FILE")
                .num_args(1)
                .help("Path of the file the session token is stored in after login.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FOODLENS_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .short('l')
                .long(ConfigKey::Language.to_string())
                .env("FOODLENS_LANGUAGE")
                .num_args(1)
                .help(format!(
                    "UI language for messages and service responses. [default: {}]",
                    Config::default(ConfigKey::Language)
                ))
                .value_parser(PossibleValuesParser::new(Language::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::PerPage.to_string())
                .long(ConfigKey::PerPage.to_string())
                .env("FOODLENS_PER_PAGE")
                .num_args(1)
                .help(format!(
                    "Number of library results per page. [default: {}]",
                    Config::default(ConfigKey::PerPage)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Region.to_string())
                .long(ConfigKey::Region.to_string())
                .env("FOODLENS_REGION")
                .num_args(1)
                .help(format!(
                    "Region filter for the library. [default: {}]",
                    Config::default(ConfigKey::Region)
                ))
                .value_parser(PossibleValuesParser::new(Region::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("FOODLENS_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time to wait in milliseconds before giving up on a request. [default: {}]",
                    Config::default(ConfigKey::RequestTimeout)
                ))
                .global(true),
        );
}

fn get_string(matches: &ArgMatches, id: &str) -> String {
    if let Some(val) = matches.get_one::<String>(id) {
        return val.to_string();
    }

    return "".to_string();
}

pub async fn parse() -> Result<Option<AppCommand>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }

            return Ok(None);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(None);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(None);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(None);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(None);
            }
        },
        Some(("predict", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let image = PathBuf::from(get_string(subcmd_matches, "image"));
            return Ok(Some(AppCommand::Predict { image }));
        }
        Some(("library", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let search = get_string(subcmd_matches, "search");
            let page = get_string(subcmd_matches, "page")
                .parse::<u32>()
                .unwrap_or(1);
            return Ok(Some(AppCommand::Library { search, page }));
        }
        Some(("food", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let name = get_string(subcmd_matches, "name");
            return Ok(Some(AppCommand::Food { name }));
        }
        Some(("login", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let username = subcmd_matches.get_one::<String>("username").cloned();
            return Ok(Some(AppCommand::Login { username }));
        }
        Some(("register", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let username = subcmd_matches.get_one::<String>("username").cloned();
            return Ok(Some(AppCommand::Register { username }));
        }
        Some(("logout", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(AppCommand::Logout));
        }
        Some(("whoami", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(AppCommand::WhoAmI));
        }
        Some(("history", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let clear = subcmd_matches.get_flag("clear");
            let delete = subcmd_matches.get_one::<String>("delete").cloned();
            return Ok(Some(AppCommand::History { clear, delete }));
        }
        _ => {
            build().print_long_help()?;
            return Ok(None);
        }
    }
}
