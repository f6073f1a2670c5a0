use oldcarhat_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    ensure_user(&pool, "admin-uid-1", "admin@oldcarhat.example", "admin").await?;
    ensure_user(&pool, "seller-uid-1", "seller@oldcarhat.example", "seller").await?;
    ensure_user(&pool, "buyer-uid-1", "buyer@oldcarhat.example", "buyer").await?;
    seed_catalog(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    uid: &str,
    email: &str,
    role: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, uid, email, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (uid) DO UPDATE SET role = EXCLUDED.role
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(uid)
    .bind(email)
    .bind(role)
    .execute(pool)
    .await?;

    println!("Ensured user {uid} (role={role})");
    Ok(())
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Catalog already seeded");
        return Ok(());
    }

    let categories = [
        (Uuid::new_v4(), "Sedan"),
        (Uuid::new_v4(), "SUV"),
        (Uuid::new_v4(), "Pickup"),
    ];

    for (id, name) in &categories {
        sqlx::query("INSERT INTO categories (id, category_name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await?;
    }

    let products = [
        ("Toyota Corolla 2015", "Single owner, full service history", 7200_i64, categories[0].0),
        ("Honda CR-V 2017", "New tires, minor scratches", 13500, categories[1].0),
        ("Ford Ranger 2014", "Workhorse, runs great", 9800, categories[2].0),
    ];

    for (name, desc, price, category_id) in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, seller_uid, category_id, name, description, resell_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind("seller-uid-1")
        .bind(category_id)
        .bind(name)
        .bind(desc)
        .bind(price)
        .execute(pool)
        .await?;
    }

    println!("Seeded catalog");
    Ok(())
}
