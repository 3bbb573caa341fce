//! Loading heightmap sources from external files.

use image::ImageFormat;

use crate::{
    config::ImageLayout,
    data_structures::mesh::HeightMapMesh,
    error::{HeightMapError, Result},
    terrain::{self, HeightMapSource},
};

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("no location origin"))?;
    let base = reqwest::Url::parse(&format!("{}/assets/", origin))?;
    Ok(base.join(file_name)?)
}

/// Read an asset: from `./assets/` natively, relative to the page origin on the web.
pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        tokio::fs::read(path).await?
    };

    Ok(data)
}

/// Load a grayscale image asset and build its terrain mesh.
///
/// The file extension, when recognized, is used as the format hint.
pub async fn load_heightmap(file_name: &str, layout: ImageLayout) -> Result<HeightMapMesh> {
    let bytes = load_binary(file_name)
        .await
        .map_err(|e| HeightMapError::AssetRead {
            name: file_name.to_string(),
            source: e
                .downcast::<std::io::Error>()
                .unwrap_or_else(std::io::Error::other),
        })?;
    let format = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension);

    log::info!("Loaded heightmap asset {} ({} bytes)", file_name, bytes.len());
    terrain::build_mesh(&HeightMapSource::Image {
        bytes: &bytes,
        format,
        layout,
    })
}
