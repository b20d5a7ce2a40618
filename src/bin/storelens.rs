use clap::Parser;
use colored::Colorize;
use storelens_core::cli::{self, Cli};
use storelens_core::exit::StoreExit;
use storelens_core::logger;

fn main() -> StoreExit {
    let cli = Cli::parse();

    if cli.global.no_color {
        colored::control::set_override(false);
    }
    logger::init_logger(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(&cli.global, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(StoreExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            StoreExit::from_error(&e)
        }
    }
}
