use hyper::Uri;

use crate::error::FetchError;

/// Resolves a `location` header against the uri that answered with it.
pub fn resolve_location(current_uri: &str, location: &str) -> Result<String, FetchError> {
    let location = location.trim();
    let location_uri: Uri = location.parse()
        .map_err(|_| FetchError::InvalidUri(location.to_string()))?;
    if location_uri.scheme().is_some() {
        return Ok(location.to_string());
    }

    let current: Uri = current_uri.parse()
        .map_err(|_| FetchError::InvalidUri(current_uri.to_string()))?;
    let (scheme, authority) = match (current.scheme_str(), current.authority()) {
        (Some(scheme), Some(authority)) => (scheme, authority.as_str()),
        _ => return Err(FetchError::InvalidUri(current_uri.to_string())),
    };

    if location.starts_with("//") {
        return Ok(format!("{}:{}", scheme, location));
    }
    if location.starts_with('/') {
        return Ok(format!("{}://{}{}", scheme, authority, location));
    }
    let directory = match current.path().rfind('/') {
        Some(index) => &current.path()[..=index],
        None => "/",
    };
    Ok(format!("{}://{}{}{}", scheme, authority, directory, location))
}
