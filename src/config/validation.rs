use url::Url;

/// Validate that the provider base URL is an absolute http(s) URL with a host.
pub(super) fn validate_base_url(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let url = Url::parse(base_url)
        .map_err(|e| format!("Invalid OPENAI_BASE_URL '{base_url}': {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "OPENAI_BASE_URL must use http or https, got: {}",
            url.scheme()
        )
        .into());
    }

    if url.host_str().is_none() {
        return Err(format!("OPENAI_BASE_URL must have a host: {base_url}").into());
    }

    Ok(())
}

/// Validate that the timeout and upload limits are usable.
pub(super) fn validate_limits(
    upstream_timeout_seconds: u64,
    max_upload_bytes: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if upstream_timeout_seconds == 0 {
        return Err("UPSTREAM_TIMEOUT_SECONDS must be greater than zero".into());
    }
    if max_upload_bytes == 0 {
        return Err("MAX_UPLOAD_BYTES must be greater than zero".into());
    }
    Ok(())
}

/// An origin list may not mix `*` with explicit origins.
pub(super) fn validate_cors_origins(origins: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(origins) = origins else {
        return Ok(());
    };

    let entries: Vec<&str> = origins.split(',').map(str::trim).collect();
    if entries.len() > 1 && entries.contains(&"*") {
        return Err(format!(
            "CORS_ALLOWED_ORIGINS must be either \"*\" or a list of origins, got: {origins}"
        )
        .into());
    }

    Ok(())
}

/// TLS needs both a certificate and a key; one without the other is a misconfiguration.
pub(super) fn validate_tls_paths(
    cert_path: Option<String>,
    key_path: Option<String>,
) -> Result<Option<(String, String)>, Box<dyn std::error::Error>> {
    match (cert_path, key_path) {
        (Some(cert), Some(key)) => Ok(Some((cert, key))),
        (None, None) => Ok(None),
        (Some(_), None) => Err("TLS_CERT_PATH is set but TLS_KEY_PATH is missing".into()),
        (None, Some(_)) => Err("TLS_KEY_PATH is set but TLS_CERT_PATH is missing".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_accepts_http_and_https() {
        assert!(validate_base_url("https://api.openai.com/v1").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_validate_base_url_rejects_bad_input() {
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("ws://api.openai.com/v1").is_err());
    }

    #[test]
    fn test_validate_limits() {
        assert!(validate_limits(60, 1024).is_ok());
        assert!(validate_limits(0, 1024).is_err());
        assert!(validate_limits(60, 0).is_err());
    }

    #[test]
    fn test_validate_cors_origins() {
        assert!(validate_cors_origins(None).is_ok());
        assert!(validate_cors_origins(Some("*")).is_ok());
        assert!(validate_cors_origins(Some("https://a.example.com, https://b.example.com")).is_ok());

        let err = validate_cors_origins(Some("https://app.example.com,*")).unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGINS"));
        assert!(validate_cors_origins(Some("*, https://app.example.com")).is_err());
    }

    #[test]
    fn test_validate_tls_paths() {
        assert!(validate_tls_paths(None, None).unwrap().is_none());
        assert!(
            validate_tls_paths(Some("c".to_string()), Some("k".to_string()))
                .unwrap()
                .is_some()
        );
        assert!(validate_tls_paths(Some("c".to_string()), None).is_err());
        assert!(validate_tls_paths(None, Some("k".to_string())).is_err());
    }
}
