use clap::{Parser, Subcommand};
use coffeeshop_cli::seeder;
use coffeeshop_config::DatabaseConfig;
use coffeeshop_db::{PgPool, init_db_pool, run_migrations};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "coffeeshop-cli")]
#[command(about = "Coffee Shop CLI - Database tools for the drinks API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Seed the starter menu (existing titles are left alone)
    Seed,
    /// Delete every drink, restart ids, then seed the starter menu
    Reset {
        /// Leave the table empty after clearing it
        #[arg(long)]
        no_seed: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed => handle_seed(&pool).await,
        Commands::Reset { no_seed } => handle_reset(&pool, no_seed).await,
    }
}

async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config).await?;
    Ok(pool)
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(_) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool) {
    match seeder::seed_drinks(pool, &seeder::default_drinks()).await {
        Ok(inserted) => println!("✅ Seeded {} drinks", inserted),
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_reset(pool: &PgPool, no_seed: bool) {
    if let Err(e) = seeder::reset(pool).await {
        eprintln!("\n❌ Error clearing drinks: {}", e);
        std::process::exit(1);
    }

    if !no_seed {
        handle_seed(pool).await;
    }
}
