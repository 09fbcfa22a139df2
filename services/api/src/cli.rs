use crate::demo::{
    run_demo, run_insurance, run_loans, run_subsidies, DemoArgs, InsuranceArgs, LoanArgs,
    SubsidyArgs,
};
use crate::server;
use agrivision::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AgriVision",
    about = "Farm advisory and rural finance eligibility for Kerala farmers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank loan products for a farmer profile
    Loans(LoanArgs),
    /// Compare crop insurance schemes for a plot
    Insurance(InsuranceArgs),
    /// List subsidy schemes a farmer qualifies for
    Subsidies(SubsidyArgs),
    /// Walk a sample coconut farmer through advisory and finance tools
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Loans(args) => run_loans(args),
        Command::Insurance(args) => run_insurance(args),
        Command::Subsidies(args) => run_subsidies(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["agrivision"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn loans_command_parses_profile_flags() {
        let cli = Cli::try_parse_from([
            "agrivision",
            "loans",
            "--land-acres",
            "2",
            "--crop",
            "Coconut",
            "--district",
            "Thrissur",
            "--annual-income",
            "200000",
            "--loan-amount-needed",
            "300000",
            "--category",
            "sc",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Loans(args)) => {
                let profile = args.profile();
                assert_eq!(profile.land_acres, 2.0);
                assert_eq!(profile.annual_income, 200_000);
                assert!(profile.category.is_scheduled());
            }
            other => panic!("expected loans command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Cli::try_parse_from([
            "agrivision",
            "subsidies",
            "--land-acres",
            "1",
            "--crop",
            "Paddy",
            "--category",
            "obc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["agrivision", "serve", "--port", "8080"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8080)),
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
