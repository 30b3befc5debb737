use community_backend::{
    api::router::create_router,
    config::Config,
    domain::models::{
        coupon::{Coupon, NewCouponParams},
        event::{Event, NewEventParams},
        ticket::EventTicket,
        user::User,
    },
    infra::repositories::{
        sqlite_coupon_repo::SqliteCouponRepo, sqlite_donation_repo::SqliteDonationRepo,
        sqlite_event_repo::SqliteEventRepo, sqlite_family_repo::SqliteFamilyRepo,
        sqlite_registration_repo::SqliteRegistrationRepo, sqlite_ticket_repo::SqliteTicketRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            ticket_repo: Arc::new(SqliteTicketRepo::new(pool.clone())),
            coupon_repo: Arc::new(SqliteCouponRepo::new(pool.clone())),
            registration_repo: Arc::new(SqliteRegistrationRepo::new(pool.clone())),
            family_repo: Arc::new(SqliteFamilyRepo::new(pool.clone())),
            donation_repo: Arc::new(SqliteDonationRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Inserts a user and returns its id. Role 1 = member, 2 = moderator.
    pub async fn seed_user(&self, role: i32) -> String {
        let n = Uuid::new_v4().simple().to_string();
        let user = User::new(
            "Test".to_string(),
            format!("User{}", &n[..8]),
            format!("user_{}@example.com", &n[..8]),
            role,
        );
        let created = self.state.user_repo.create(&user).await.unwrap();
        created.id
    }

    pub async fn seed_event(&self, max_capacity: Option<i64>) -> String {
        self.seed_event_with_deadline(max_capacity, Some(Utc::now() + Duration::days(7)))
            .await
    }

    pub async fn seed_event_with_deadline(
        &self,
        max_capacity: Option<i64>,
        registration_deadline: Option<DateTime<Utc>>,
    ) -> String {
        let event = Event::new(NewEventParams {
            title: "Summer Picnic".to_string(),
            description: "Annual gathering".to_string(),
            event_date: Utc::now() + Duration::days(14),
            location: "Riverside Park".to_string(),
            max_capacity,
            registration_deadline,
        });
        let created = self.state.event_repo.create(&event).await.unwrap();
        created.id
    }

    pub async fn seed_ticket(&self, event_id: &str, price: f64, is_active: bool) -> String {
        let ticket = EventTicket::new(
            event_id.to_string(),
            "General Admission".to_string(),
            price,
            is_active,
        );
        let created = self.state.ticket_repo.create(&ticket).await.unwrap();
        created.id
    }

    pub async fn seed_coupon(&self, event_id: &str, params: CouponSeed) -> String {
        let coupon = Coupon::new(NewCouponParams {
            event_id: event_id.to_string(),
            code: params.code,
            discount_amount: params.discount_amount,
            usage_limit: params.usage_limit,
            one_per_user: params.one_per_user,
            expires_at: params.expires_at,
        });
        let created = self.state.coupon_repo.create(&coupon).await.unwrap();
        created.id
    }
}

pub struct CouponSeed {
    pub code: String,
    pub discount_amount: f64,
    pub usage_limit: Option<i64>,
    pub one_per_user: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Default for CouponSeed {
    fn default() -> Self {
        Self {
            code: format!("SAVE-{}", &Uuid::new_v4().simple().to_string()[..6]),
            discount_amount: 10.0,
            usage_limit: None,
            one_per_user: false,
            expires_at: None,
        }
    }
}

/// Session cookie header for a seeded user.
pub fn session_cookie(user_id: &str, role: i32) -> String {
    format!("user_id={}; user_role={}", user_id, role)
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
