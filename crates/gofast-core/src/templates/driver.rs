//! Per-driver templates for `internal/db`

use super::Blob;
use crate::flags::DbDriver;

#[derive(Debug)]
pub struct DriverTemplates {
    /// Modules fetched with `go get -u`
    pub packages: &'static [&'static str],
    /// `internal/db/database.go`
    pub service: Blob,
    /// `internal/db/database_test.go`, absent for embedded databases
    pub tests: Option<Blob>,
    /// Lines appended to `.env`
    pub env: Blob,
    /// Compose file that starts the database server
    pub docker_compose: Option<Blob>,
}

static MYSQL: DriverTemplates = DriverTemplates {
    packages: &["github.com/go-sql-driver/mysql"],
    service: blob!("driver/mysql/service.go.tmpl"),
    tests: Some(blob!("driver/mysql/service_test.go.tmpl")),
    env: blob!("driver/mysql/env.tmpl"),
    docker_compose: Some(blob!("driver/mysql/docker-compose.yml.tmpl")),
};

static POSTGRES: DriverTemplates = DriverTemplates {
    packages: &["github.com/jackc/pgx/v5/stdlib"],
    service: blob!("driver/postgres/service.go.tmpl"),
    tests: Some(blob!("driver/postgres/service_test.go.tmpl")),
    env: blob!("driver/postgres/env.tmpl"),
    docker_compose: Some(blob!("driver/postgres/docker-compose.yml.tmpl")),
};

static SQLITE: DriverTemplates = DriverTemplates {
    packages: &["github.com/mattn/go-sqlite3"],
    service: blob!("driver/sqlite/service.go.tmpl"),
    tests: None,
    env: blob!("driver/sqlite/env.tmpl"),
    docker_compose: None,
};

static MONGO: DriverTemplates = DriverTemplates {
    packages: &["go.mongodb.org/mongo-driver"],
    service: blob!("driver/mongo/service.go.tmpl"),
    tests: Some(blob!("driver/mongo/service_test.go.tmpl")),
    env: blob!("driver/mongo/env.tmpl"),
    docker_compose: Some(blob!("driver/mongo/docker-compose.yml.tmpl")),
};

static REDIS: DriverTemplates = DriverTemplates {
    packages: &["github.com/redis/go-redis/v9"],
    service: blob!("driver/redis/service.go.tmpl"),
    tests: Some(blob!("driver/redis/service_test.go.tmpl")),
    env: blob!("driver/redis/env.tmpl"),
    docker_compose: Some(blob!("driver/redis/docker-compose.yml.tmpl")),
};

/// Templates for `driver`, or `None` for [`DbDriver::None`]
pub fn driver_templates(driver: DbDriver) -> Option<&'static DriverTemplates> {
    match driver {
        DbDriver::Mysql => Some(&MYSQL),
        DbDriver::Postgres => Some(&POSTGRES),
        DbDriver::Sqlite => Some(&SQLITE),
        DbDriver::Mongo => Some(&MONGO),
        DbDriver::Redis => Some(&REDIS),
        DbDriver::None => None,
    }
}
