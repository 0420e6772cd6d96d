use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load `.env` (project-local first) and then the layered config.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<spark_config::SparkConfig> {
    load_project_dotenv(flags)?;
    spark_config::SparkConfig::load().map_err(anyhow::Error::from)
}

fn load_project_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(project) = &flags.project {
        let env_path = PathBuf::from(project).join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(project_root) = crate::context::find_project_root(&cwd) {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
