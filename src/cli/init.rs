use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "My Wiki".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data/pages"))?;
    std::fs::create_dir_all(path.join("data/links"))?;
    std::fs::create_dir_all(path.join("data/votes"))?;

    let config = format!(
        r#"[site]
title = "{}"
description = "A tiny file-backed wiki"

[server]
host = "127.0.0.1"
port = 8080

[storage]
data_dir = "./data"
"#,
        site_name
    );

    std::fs::write(path.join("tubewiki.toml"), config)?;

    tracing::info!("Created new tubewiki site at {:?}", path);
    tracing::info!("Run 'tubewiki serve' to start the server");

    Ok(())
}
