use promohub_core::booster::VALID_CATEGORIES;
use promohub_db::repositories::BoosterRepo;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema and seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    promohub_db::health_check(&pool).await.unwrap();

    // Catalog must be seeded, in display order.
    let definitions = BoosterRepo::list_active_definitions(&pool).await.unwrap();
    assert!(!definitions.is_empty(), "booster catalog should be seeded");
    assert!(definitions
        .windows(2)
        .all(|pair| pair[0].sort_order <= pair[1].sort_order));

    // Every seeded entry must score: known category, positive points.
    for def in &definitions {
        assert!(
            VALID_CATEGORIES.contains(&def.category.as_str()),
            "unexpected seeded category: {}",
            def.category
        );
        assert!(def.points > 0, "{} has non-positive points", def.key);
    }
}

/// The portfolio booster is load-bearing for the scoring cap; the seed must
/// provide it, active.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_portfolio_booster_seeded(pool: PgPool) {
    let definitions = BoosterRepo::list_active_definitions(&pool).await.unwrap();
    assert!(
        definitions.iter().any(|d| d.key == "portfolio"),
        "portfolio booster must be seeded and active"
    );
}
