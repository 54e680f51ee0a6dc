//! Schema migrations for the BizTime tables
//!
//! Every statement is idempotent so `run` is safe on each startup.

use sqlx::PgPool;

use super::DbError;

/// Create all tables if they do not exist yet
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running BizTime migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id SERIAL PRIMARY KEY,
            comp_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
            amt DOUBLE PRECISION NOT NULL CHECK (amt > 0),
            paid BOOLEAN NOT NULL DEFAULT FALSE,
            add_date DATE NOT NULL DEFAULT CURRENT_DATE,
            paid_date DATE,
            CONSTRAINT invoices_paid_date_matches_paid
                CHECK ((paid AND paid_date IS NOT NULL) OR (NOT paid AND paid_date IS NULL))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS industries (
            code TEXT PRIMARY KEY,
            industry TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies_industries (
            company_code TEXT NOT NULL REFERENCES companies(code) ON DELETE CASCADE,
            industry_code TEXT NOT NULL REFERENCES industries(code) ON DELETE CASCADE,
            PRIMARY KEY (company_code, industry_code)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("BizTime migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_comp_code ON invoices(comp_code)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_companies_industries_industry ON companies_industries(industry_code)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the sample data set. Existing rows are left untouched.
pub async fn seed(pool: &PgPool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO companies (code, name, description) VALUES
            ('apple', 'Apple Computer', 'Maker of OSX.'),
            ('ibm', 'IBM', 'Big blue.')
        ON CONFLICT DO NOTHING
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Only seed invoices into an empty table so reruns don't duplicate them
    sqlx::query(
        r#"
        INSERT INTO invoices (comp_code, amt, paid, paid_date)
        SELECT v.comp_code, v.amt, v.paid, v.paid_date
        FROM (VALUES
            ('apple', 100::float8, false, NULL::date),
            ('apple', 200::float8, false, NULL::date),
            ('apple', 300::float8, true, '2018-01-01'::date),
            ('ibm', 400::float8, false, NULL::date)
        ) AS v(comp_code, amt, paid, paid_date)
        WHERE NOT EXISTS (SELECT 1 FROM invoices)
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO industries (code, industry) VALUES
            ('tech', 'Technology'),
            ('acct', 'Accounting')
        ON CONFLICT DO NOTHING
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO companies_industries (company_code, industry_code) VALUES
            ('apple', 'tech'),
            ('ibm', 'tech')
        ON CONFLICT DO NOTHING
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!("Sample data seeded");
    Ok(())
}
