//! Seeds the demo dataset used for manual testing and load generation:
//! ten cars and fifteen sales. Creates the tables first when missing.
//!
//! Sale rows are inserted directly, without the stock side effect; the
//! seeded stock numbers already account for the demo sales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use dealership_api::infra::secrets;
use dealership_api::Database;

const CARS: &[(&str, &str, i32, i64, i32)] = &[
    ("Toyota", "Corolla", 2022, 25_000_00, 10),
    ("Honda", "Civic", 2023, 27_000_00, 8),
    ("Ford", "F-150", 2022, 45_000_00, 5),
    ("Chevrolet", "Malibu", 2023, 28_000_00, 7),
    ("Nissan", "Altima", 2022, 26_000_00, 9),
    ("Hyundai", "Elantra", 2023, 24_000_00, 12),
    ("Kia", "Forte", 2022, 23_000_00, 6),
    ("Mazda", "CX-5", 2023, 32_000_00, 4),
    ("Subaru", "Outback", 2022, 35_000_00, 3),
    ("Volkswagen", "Jetta", 2023, 26_000_00, 8),
];

const SALES: &[(i32, &str, &str, i64)] = &[
    (1, "2025-05-01", "John Doe", 24_500_00),
    (2, "2025-05-02", "Jane Smith", 26_800_00),
    (3, "2025-05-03", "Mike Johnson", 44_500_00),
    (4, "2025-05-04", "Emily Brown", 27_800_00),
    (5, "2025-05-05", "David Wilson", 25_800_00),
    (6, "2025-05-06", "Sarah Davis", 23_800_00),
    (7, "2025-05-07", "Tom Taylor", 22_800_00),
    (8, "2025-05-08", "Lisa Anderson", 31_800_00),
    (9, "2025-05-09", "Chris Martinez", 34_800_00),
    (10, "2025-05-10", "Karen Thompson", 25_800_00),
    (1, "2025-05-11", "Robert Garcia", 24_600_00),
    (2, "2025-05-12", "Patricia Lee", 26_900_00),
    (3, "2025-05-13", "Daniel Clark", 44_600_00),
    (4, "2025-05-14", "Nancy Rodriguez", 27_900_00),
    (5, "2025-05-15", "Paul Wright", 25_900_00),
];

fn parse_day(day: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d")?;
    Ok(DateTime::from_naive_utc_and_offset(
        date.and_time(chrono::NaiveTime::MIN),
        Utc,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let database_url = secrets::resolve_database_url().await?;
    let db = Database::connect(&database_url).await?;

    for &(make, model, year, price_cents, stock) in CARS {
        sqlx::query(
            "INSERT INTO cars (make, model, year, price, stock) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(Decimal::new(price_cents, 2))
        .bind(stock)
        .execute(db.pool())
        .await?;
    }
    println!("> Cars seeded successfully");

    for &(car_id, day, customer, price_cents) in SALES {
        sqlx::query(
            "INSERT INTO sales (car_id, sale_date, customer_name, sale_price) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(car_id)
        .bind(parse_day(day)?)
        .bind(customer)
        .bind(Decimal::new(price_cents, 2))
        .execute(db.pool())
        .await?;
    }
    println!("> Sales seeded successfully");

    println!("> Seeding complete");
    Ok(())
}
