//! PgStore against a live database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p biztime-server -- --ignored

use biztime_server::db::{create_pool, migrations, BizStore, DbError, PgStore};
use biztime_server::models::{CompanyUpdate, InvoiceUpdate, NewCompany, NewIndustry, NewInvoice};

async fn store() -> PgStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    PgStore::new(pool)
}

/// Company name unique to this process and test
fn unique_name(test: &str) -> String {
    format!("Test {} {}", test, std::process::id())
}

#[tokio::test]
#[ignore = "requires database"]
async fn company_lifecycle() {
    let store = store().await;
    let new = NewCompany::new(&unique_name("lifecycle"), Some("Temp.".into())).unwrap();
    let code = new.code.as_str().to_owned();

    let created = store.create_company(&new).await.unwrap();
    assert_eq!(created.code, code);

    let dup = store.create_company(&new).await.unwrap_err();
    assert!(matches!(dup, DbError::Conflict(_)));

    let inv = store
        .create_invoice(&NewInvoice::new(&code, 100.0).unwrap())
        .await
        .unwrap();
    let detail = store.company_with_invoices(&code).await.unwrap();
    assert_eq!(detail.invoices, vec![inv.id]);

    let update = CompanyUpdate::new(&unique_name("renamed"), None).unwrap();
    let updated = store.update_company(&code, &update).await.unwrap();
    assert_eq!(updated.name, update.name);
    assert_eq!(updated.description, None);

    store.delete_company(&code).await.unwrap();
    let gone = store.get_invoice(inv.id).await.unwrap_err();
    assert!(matches!(gone, DbError::NotFound { .. }));
    let again = store.delete_company(&code).await.unwrap_err();
    assert!(matches!(again, DbError::NotFound { .. }));

    store.close().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn invoice_paid_date_tracks_paid() {
    let store = store().await;
    let new = NewCompany::new(&unique_name("paid"), None).unwrap();
    let code = new.code.as_str().to_owned();
    store.create_company(&new).await.unwrap();

    let inv = store
        .create_invoice(&NewInvoice::new(&code, 100.0).unwrap())
        .await
        .unwrap();
    assert!(!inv.paid);
    assert_eq!(inv.paid_date, None);

    let paid = store
        .update_invoice(inv.id, &InvoiceUpdate::new(150.0, true).unwrap())
        .await
        .unwrap();
    assert!(paid.paid);
    assert!(paid.paid_date.is_some());
    assert_eq!(paid.amt, 150.0);

    let repaid = store
        .update_invoice(inv.id, &InvoiceUpdate::new(150.0, true).unwrap())
        .await
        .unwrap();
    assert_eq!(repaid.paid_date, paid.paid_date);

    let unpaid = store
        .update_invoice(inv.id, &InvoiceUpdate::new(150.0, false).unwrap())
        .await
        .unwrap();
    assert_eq!(unpaid.paid_date, None);

    store.delete_company(&code).await.unwrap();
    store.close().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_company_invoice_is_conflict() {
    let store = store().await;
    let err = store
        .create_invoice(&NewInvoice::new("no-such-company-xyz", 10.0).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Conflict(_)));
    store.close().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn industry_without_companies_lists_empty() {
    let store = store().await;
    let code = format!("empty{}", std::process::id());
    let industry = NewIndustry::new(&code, &format!("Empty industry {code}")).unwrap();
    store.create_industry(&industry).await.unwrap();

    let listed = store.list_industries().await.unwrap();
    let row = listed.iter().find(|i| i.code == code).unwrap();
    assert!(row.companies.is_empty());

    sqlx::query("DELETE FROM industries WHERE code = $1")
        .bind(&code)
        .execute(store.pool())
        .await
        .unwrap();
    store.close().await;
}
