//! Runs against a live database: `DATABASE_URL=... cargo test -- --ignored`

use axum::http::StatusCode;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use library_catalog::repository::Repository;

use crate::common::{app_with, get, post_form};

#[tokio::test]
#[ignore]
async fn test_genre_lifecycle_on_postgres() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    let repository = Repository::new(pool);

    let name = format!("Genre {}", Uuid::new_v4().simple());
    let created = post_form(
        app_with(repository.clone()),
        "/catalog/genre/create",
        &format!("name={}", name.replace(' ', "+")),
    )
    .await;
    assert_eq!(created.status, StatusCode::SEE_OTHER);
    let location = created.location.unwrap();

    let again = post_form(
        app_with(repository.clone()),
        "/catalog/genre/create",
        &format!("name={}", name.replace(' ', "+")),
    )
    .await;
    assert_eq!(again.location.as_deref(), Some(location.as_str()));

    let detail = get(app_with(repository.clone()), &location).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains(&name));

    let genre = repository.genres.find_by_name(&name).await.unwrap().unwrap();
    let deleted = post_form(
        app_with(repository.clone()),
        "/catalog/genre/delete",
        &format!("genreid={}", genre.id),
    )
    .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert!(repository.genres.find_by_id(genre.id).await.unwrap().is_none());
}
