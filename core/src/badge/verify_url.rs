use url::Url;

use crate::error::{CoreError, CoreResult};

/// Host the public verification page is served from.
pub const VERIFY_HOST: &str = "verify.qlx.app";

/// `https://<host>/badge/<badge_id>?hash=<combined_digest>`
pub fn build_verification_url(badge_id: &str, combined_digest: &str) -> CoreResult<String> {
    let url = Url::parse(&format!(
        "https://{}/badge/{}?hash={}",
        VERIFY_HOST, badge_id, combined_digest
    ))?;
    Ok(url.to_string())
}

/// Pull the badge id and the expected digest back out of a verification
/// URL. The `hash` query parameter is optional; anything else about the
/// path shape is not.
pub fn parse_verification_url(raw: &str) -> CoreResult<(String, Option<String>)> {
    let url = Url::parse(raw)?;
    let mut segments = url
        .path_segments()
        .ok_or_else(|| CoreError::InvalidInput("verification url has no path".to_string()))?;
    match (segments.next(), segments.next()) {
        (Some("badge"), Some(id)) if !id.is_empty() => {
            let expected = url
                .query_pairs()
                .find(|(key, _)| key == "hash")
                .map(|(_, value)| value.into_owned());
            Ok((id.to_string(), expected))
        }
        _ => Err(CoreError::InvalidInput(
            "verification url path must be /badge/<badge_id>".to_string(),
        )),
    }
}
