use adjadv_cli::commands::Cli;
use adjadv_cli::CliResult;
use clap::Parser;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.extract.execute()
}
