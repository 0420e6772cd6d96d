use std::path::PathBuf;

use anyhow::Context;
use spark_config::SparkConfig;
use spark_db::SparkDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SparkConfig,
    pub db: SparkDb,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Initialize all shared resources using the discovered project root.
    pub async fn init(project_root: PathBuf, config: SparkConfig) -> anyhow::Result<Self> {
        let db_path = project_root.join(&config.database.path);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let db_path_str = db_path.to_string_lossy();
        let db = SparkDb::open_local(&db_path_str)
            .await
            .context("failed to open spark-db database")?;

        Ok(Self {
            config,
            db,
            project_root,
        })
    }

    /// The project-local `.spark` directory (bulk file, rarity cache, db).
    #[must_use]
    pub fn spark_dir(&self) -> PathBuf {
        self.project_root.join(".spark")
    }

    /// Resolve a possibly-relative configured path against the project root.
    #[must_use]
    pub fn resolve_path(&self, configured: &str) -> PathBuf {
        let path = PathBuf::from(configured);
        if path.is_absolute() {
            path
        } else {
            self.project_root.join(path)
        }
    }
}
