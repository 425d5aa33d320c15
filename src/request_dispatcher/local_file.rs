use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::http_client::error::Error;

/// Reads the file behind a `file:` URL. Local reads have no status code.
pub(crate) async fn read_local_file(url: &Url) -> Result<Bytes, Error> {
    let path = url
        .to_file_path()
        .map_err(|_| Error::File(format!("{} is not a local path", url)))?;

    debug!("Reading {}", path.display());

    tokio::fs::read(&path)
        .await
        .map(Bytes::from)
        .map_err(|e| Error::File(format!("{}: {}", path.display(), e)))
}
