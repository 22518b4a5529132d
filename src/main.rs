use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use job_board_tui::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("job-board-tui")
        .version(crate_version!())
        .about("A terminal dashboard for browsing job board listings")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    if let Err(e) = config.load(matches.value_of("config")) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    App::start(config).await
}
