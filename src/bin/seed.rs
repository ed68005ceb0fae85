//! Seeds the back-office admin account, the store settings row and a small
//! bilingual catalog so a fresh database is usable end to end.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use restaurant_orders_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let admin_id = ensure_admin(&pool, &email, &password).await?;

    ensure_settings(&pool).await?;
    seed_catalog(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_admin(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, role)
        VALUES ($1, $2, $3, 'admin')
        ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email.to_lowercase())
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn ensure_settings(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM store_settings LIMIT 1")
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO store_settings (
            id, store_name_ar, store_name_en, whatsapp_number,
            delivery_fee, minimum_order, is_open
        )
        VALUES ($1, $2, $3, $4, $5, $6, true)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("مطعم الرومنسية")
    .bind("Romansiah Restaurant")
    .bind("966552065055")
    .bind(1500_i64)
    .bind(0_i64)
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let count: (i64,) = sqlx::query_as("SELECT count(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if count.0 > 0 {
        return Ok(());
    }

    let rice_id = insert_category(pool, "الأرز والمندي", "Rice & Mandi", 1).await?;
    let grills_id = insert_category(pool, "المشويات", "Grills", 2).await?;
    let drinks_id = insert_category(pool, "المشروبات", "Drinks", 3).await?;

    // Prices in halalas.
    let mandi_id = insert_item(pool, rice_id, "مندي دجاج", "Chicken Mandi", 3500, true).await?;
    insert_item(pool, rice_id, "مندي لحم", "Lamb Mandi", 5500, true).await?;
    insert_item(pool, grills_id, "شيش طاووق", "Shish Tawook", 2800, false).await?;
    insert_item(pool, drinks_id, "عصير برتقال", "Orange Juice", 800, false).await?;

    let size_group: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO modifier_groups (id, name_ar, name_en, is_required, is_multiple)
        VALUES ($1, 'الحجم', 'Size', true, false)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .fetch_one(pool)
    .await?;

    for (name_ar, name_en, price, sort) in [
        ("نص", "Half", 0_i64, 1),
        ("كامل", "Full", 1500_i64, 2),
    ] {
        sqlx::query(
            r#"
            INSERT INTO modifiers (id, group_id, name_ar, name_en, price, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(size_group.0)
        .bind(name_ar)
        .bind(name_en)
        .bind(price)
        .bind(sort)
        .execute(pool)
        .await?;
    }

    sqlx::query(
        r#"
        INSERT INTO menu_item_modifier_groups (id, menu_item_id, modifier_group_id)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(mandi_id)
    .bind(size_group.0)
    .execute(pool)
    .await?;

    Ok(())
}

async fn insert_category(
    pool: &sqlx::PgPool,
    name_ar: &str,
    name_en: &str,
    sort_order: i32,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO categories (id, name_ar, name_en, sort_order)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name_ar)
    .bind(name_en)
    .bind(sort_order)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn insert_item(
    pool: &sqlx::PgPool,
    category_id: Uuid,
    name_ar: &str,
    name_en: &str,
    base_price: i64,
    is_featured: bool,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO menu_items (id, category_id, name_ar, name_en, base_price, is_featured)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(category_id)
    .bind(name_ar)
    .bind(name_en)
    .bind(base_price)
    .bind(is_featured)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
