use anyhow::Result;

/// Fetches raw dataset bytes from a URL.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::blocking::get(url)?;
    Ok(resp.bytes()?.to_vec())
}
