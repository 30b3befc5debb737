use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, MySqlPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::repositories::{
    mysql_coupon_repo::MySqlCouponRepo, mysql_donation_repo::MySqlDonationRepo,
    mysql_event_repo::MySqlEventRepo, mysql_family_repo::MySqlFamilyRepo,
    mysql_registration_repo::MySqlRegistrationRepo, mysql_ticket_repo::MySqlTicketRepo,
    mysql_user_repo::MySqlUserRepo,
    sqlite_coupon_repo::SqliteCouponRepo, sqlite_donation_repo::SqliteDonationRepo,
    sqlite_event_repo::SqliteEventRepo, sqlite_family_repo::SqliteFamilyRepo,
    sqlite_registration_repo::SqliteRegistrationRepo, sqlite_ticket_repo::SqliteTicketRepo,
    sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("mysql://") {
        info!("Initializing MySQL connection...");

        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .expect("Failed to connect to MySQL");

        run_mysql_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(MySqlUserRepo::new(pool.clone())),
            event_repo: Arc::new(MySqlEventRepo::new(pool.clone())),
            ticket_repo: Arc::new(MySqlTicketRepo::new(pool.clone())),
            coupon_repo: Arc::new(MySqlCouponRepo::new(pool.clone())),
            registration_repo: Arc::new(MySqlRegistrationRepo::new(pool.clone())),
            family_repo: Arc::new(MySqlFamilyRepo::new(pool.clone())),
            donation_repo: Arc::new(MySqlDonationRepo::new(pool)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            ticket_repo: Arc::new(SqliteTicketRepo::new(pool.clone())),
            coupon_repo: Arc::new(SqliteCouponRepo::new(pool.clone())),
            registration_repo: Arc::new(SqliteRegistrationRepo::new(pool.clone())),
            family_repo: Arc::new(SqliteFamilyRepo::new(pool.clone())),
            donation_repo: Arc::new(SqliteDonationRepo::new(pool)),
        }
    }
}

async fn run_mysql_migrations(pool: &MySqlPool) {
    sqlx::migrate!("./migrations/mysql")
        .run(pool)
        .await
        .expect("Failed to run MySQL migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
