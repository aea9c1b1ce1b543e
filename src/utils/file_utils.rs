use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Writes `results` as pretty-printed JSON, replacing any existing file.
pub async fn save_results<T: Serialize>(output_path: &Path, results: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(results).map_err(std::io::Error::from)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(output_path, json).await?;
    Ok(())
}
