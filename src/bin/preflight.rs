//! Startup environment check: configuration, secret retrieval, database
//! connectivity and table row counts. Exits non-zero when anything the
//! server would need at boot is missing.

use dealership_api::infra::{config, secrets};
use dealership_api::Database;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars:\n\
           DATABASE_URL (or SECRETS_URL + SECRET_NAME)\n\
           AWS_S3NAME, AWS_REGION, S3_ENDPOINT, BIND_ADDR\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    println!("> Preflight:");
    println!("  SECRET_NAME={}", config::secret_name());
    println!("  AWS_S3NAME={}", config::s3_bucket());
    println!("  AWS_REGION={}", config::aws_region());
    println!("  BIND_ADDR={}", config::bind_addr());
    match config::s3_endpoint() {
        Some(endpoint) => println!("  S3_ENDPOINT={}", endpoint),
        None => println!("  S3_ENDPOINT=(unset, deriving AWS endpoint)"),
    }

    if config::database_url_override().is_some() {
        println!("  DATABASE_URL is set (secret store will be skipped).");
    } else {
        match config::secrets_url() {
            Some(url) => println!("  SECRETS_URL={}", url),
            None => {
                return Err(anyhow::anyhow!(
                    "Neither DATABASE_URL nor SECRETS_URL is set"
                ))
            }
        }
    }

    let database_url = secrets::resolve_database_url().await?;
    println!("  Database credentials resolved.");

    let db = Database::connect(&database_url).await?;
    db.ping().await?;
    println!("  Database reachable, schema ensured.");

    let cars: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(db.pool())
        .await?;
    let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
        .fetch_one(db.pool())
        .await?;
    println!("  cars: {} rows, sales: {} rows", cars, sales);

    println!("> Preflight OK.");
    Ok(())
}
