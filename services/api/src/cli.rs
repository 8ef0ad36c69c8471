use crate::demo::{run_demo, run_fields, run_schema, DemoArgs, FieldsArgs, SchemaArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use listing_wizard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Wizard",
    about = "Inspect and serve the property listing wizard from the command line",
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
    /// Print the wizard field registry grouped by column
    Fields(FieldsArgs),
    /// Show the onboarding schema for a property type and role
    Schema(SchemaArgs),
    /// Walk a condominium listing through onboarding and the field wizard
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
        Command::Fields(args) => run_fields(args),
        Command::Schema(args) => run_schema(args),
        Command::Demo(args) => run_demo(args),
    }
}
