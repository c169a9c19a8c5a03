// CLI tool for the custom token program
//
// Connection settings default to the Anchor provider environment
// (ANCHOR_PROVIDER_URL, ANCHOR_WALLET) and can be overridden per call.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::utils::ConnectionArgs;

#[derive(Parser)]
#[command(name = "custom-token")]
#[command(about = "Custom token program CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the zero-argument initialize instruction
    Init,

    /// Create a mint whose freeze authority is the program authority
    CreateMint(commands::token::CreateMintArgs),

    /// Approve a delegate on a token account owned by the wallet
    Delegate(commands::token::DelegateArgs),

    /// Freeze a token account (wallet must be the mint authority)
    Freeze(commands::token::FreezeThawArgs),

    /// Thaw a token account (wallet must be the mint authority)
    Thaw(commands::token::FreezeThawArgs),

    /// Print mint state as JSON
    MintInfo(commands::token::AddressArgs),

    /// Print token account state as JSON
    AccountInfo(commands::token::AddressArgs),

    /// Print the program authority PDA
    Authority,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// anchor-client's blocking API runs its own runtime, so main stays synchronous
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Pure derivation, no wallet or RPC needed
    if let Commands::Authority = cli.command {
        return commands::init::authority(&cli.connection);
    }

    let client = cli.connection.connect()?;

    match cli.command {
        Commands::Init => commands::init::execute(&client),
        Commands::CreateMint(args) => commands::token::create_mint(&client, args),
        Commands::Delegate(args) => commands::token::delegate(&client, args),
        Commands::Freeze(args) => commands::token::freeze(&client, args),
        Commands::Thaw(args) => commands::token::thaw(&client, args),
        Commands::MintInfo(args) => commands::token::mint_info(&client, args),
        Commands::AccountInfo(args) => commands::token::account_info(&client, args),
        Commands::Authority => commands::init::authority(&cli.connection),
    }
}
