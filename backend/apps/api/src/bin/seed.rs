//! Demo Fixture Loader
//!
//! Seeds a handful of users (one per role), a few posts and comments so
//! a fresh database has something to browse. Safe to re-run: existing
//! usernames and slugs are skipped.
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```

use accounts::domain::entity::{NewUser, User};
use accounts::domain::repository::UserRepository;
use accounts::domain::value_object::Username;
use accounts::infra::postgres::PgAccountsRepository;
use chrono::{Duration, Utc};
use content::domain::entities::{NewComment, NewPost};
use content::domain::repository::{CommentRepository, PostRepository};
use content::infra::postgres::PgContentRepository;
use kernel::principal::{Role, RoleSet};
use platform::password::ClearTextPassword;
use sqlx::postgres::PgPoolOptions;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Every demo account gets the same password.
const DEMO_PASSWORD: &str = "ChangeMe123!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    let accounts = PgAccountsRepository::new(pool.clone());
    let content = PgContentRepository::new(pool.clone());

    let users = seed_users(&accounts).await?;
    seed_content(&content, &users).await?;

    tracing::info!("Seeding completed");

    Ok(())
}

async fn seed_users(repo: &PgAccountsRepository) -> anyhow::Result<Vec<User>> {
    let fixtures = [
        ("amanda01", "Amanda Reed", Role::SuperAdmin),
        ("brian02", "Brian Cole", Role::Admin),
        ("carla03", "Carla Mendez", Role::Editor),
        ("daniel04", "Daniel Roy", Role::Writer),
        ("elena05", "Elena Brook", Role::Commentator),
    ];

    let mut users = Vec::new();

    for (username, display_name, role) in fixtures {
        let username = Username::new(username)?;

        if let Some(existing) = repo.find_by_username(&username).await? {
            tracing::info!(username = %existing.username, "User already seeded");
            users.push(existing);
            continue;
        }

        let password_hash = ClearTextPassword::new(DEMO_PASSWORD.to_string())?.hash(None)?;

        let user = repo
            .create(
                &NewUser::new(username, display_name.to_string(), password_hash)
                    .with_roles(RoleSet::new([role])),
            )
            .await?;

        tracing::info!(user_id = %user.user_id, username = %user.username, role = %role, "User seeded");
        users.push(user);
    }

    Ok(users)
}

async fn seed_content(repo: &PgContentRepository, users: &[User]) -> anyhow::Result<()> {
    let writer = users
        .iter()
        .find(|u| u.roles.contains(Role::Writer))
        .ok_or_else(|| anyhow::anyhow!("no writer among seeded users"))?;
    let commentator = users
        .iter()
        .find(|u| u.roles.contains(Role::Commentator))
        .ok_or_else(|| anyhow::anyhow!("no commentator among seeded users"))?;
    let editor = users
        .iter()
        .find(|u| u.roles.contains(Role::Editor))
        .ok_or_else(|| anyhow::anyhow!("no editor among seeded users"))?;

    let now = Utc::now();

    let posts = [
        (
            "Hello Rust",
            "hello-rust",
            "Kicking the tires on the new backend.",
            now - Duration::days(6),
        ),
        (
            "On Axum",
            "on-axum",
            "Routers, extractors and a pleasant amount of type-checking.",
            now - Duration::days(3),
        ),
        (
            "Weeknotes",
            "weeknotes-1",
            "Short update on what changed this week.",
            now - Duration::days(1),
        ),
    ];

    for (title, slug, body, published) in posts {
        if repo.find_post_by_slug(slug).await?.is_some() {
            tracing::info!(slug = %slug, "Post already seeded");
            continue;
        }

        let post = repo
            .create_post(&NewPost {
                title: title.to_string(),
                slug: slug.to_string(),
                content: body.to_string(),
                published,
                author_id: writer.user_id,
            })
            .await?;

        tracing::info!(post_id = %post.post_id, slug = %post.slug, "Post seeded");

        for (author, text, offset_hours) in [
            (commentator, "Looking forward to more of these.", 4_i64),
            (editor, "Fixed a typo in the second paragraph.", 9),
        ] {
            let comment = repo
                .create_comment(&NewComment {
                    content: text.to_string(),
                    post_id: post.post_id,
                    author_id: author.user_id,
                    published: published + Duration::hours(offset_hours),
                })
                .await?;

            tracing::info!(comment_id = %comment.comment_id, "Comment seeded");
        }
    }

    Ok(())
}
