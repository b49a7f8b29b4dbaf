use std::time::Duration;

use crate::{Result, TestInfraError};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;

/// Credentials of the phonebook database and how patiently to wait for it.
#[derive(Debug, Clone, TypedBuilder)]
pub struct MysqlConfig {
    #[builder(default = "phonebook".to_string())]
    database: String,
    #[builder(default = "phonebook".to_string())]
    username: String,
    #[builder(default = "phonebook".to_string())]
    password: String,
    /// The server logs "ready for connections" once for its init pass before
    /// restarting, so the first connects can still be refused.
    #[builder(default = 20)]
    connect_attempts: u32,
    #[builder(default = Duration::from_millis(500))]
    connect_interval: Duration,
}

impl MysqlConfig {
    fn url(&self, host: &str, port: u16) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.username, self.password, host, port, self.database
        )
    }
}

/// A disposable MySQL 8.4 server holding an empty phonebook database.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
    config: MysqlConfig,
}

impl MySqlServer {
    /// Starts a server with the default credentials.
    pub async fn start() -> Result<Self> {
        Self::new(MysqlConfig::builder().build()).await
    }

    pub async fn new(config: MysqlConfig) -> Result<Self> {
        let container = GenericImage::new("mysql", "8.4")
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container, config })
    }

    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?.to_string();
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(self.config.url(&host, port))
    }

    /// Connects to the server, retrying until it accepts connections or
    /// `connect_attempts` is used up.
    pub async fn pool(&self) -> Result<MySqlPool> {
        let url = self.database_url().await?;
        let mut attempts = 0;

        loop {
            attempts += 1;
            match MySqlPoolOptions::new().max_connections(5).connect(&url).await {
                Ok(pool) => return Ok(pool),
                Err(err) if attempts >= self.config.connect_attempts => {
                    return Err(TestInfraError::Unreachable { attempts, source: err });
                }
                Err(_) => tokio::time::sleep(self.config.connect_interval).await,
            }
        }
    }
}
