use serde::Deserialize;
use std::time::Duration;

use crate::log;

pub const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org?format=json";
pub const IP_ERROR_TEXT: &str = "Error fetching IP";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpEchoResponse {
    pub ip: String,
}

/// Pulls the address out of an IP-echo response body.
pub fn parse_ip_response(body: &str) -> Result<String, String> {
    let response: IpEchoResponse = serde_json::from_str(body)
        .map_err(|e| format!("Malformed IP echo response: {}", e))?;
    if response.ip.trim().is_empty() {
        return Err("IP echo response has an empty ip field".to_string());
    }
    Ok(response.ip)
}

/// One blocking GET against an IP-echo service. No retries.
pub fn fetch_public_ip(url: &str) -> Result<String, String> {
    let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
    let body = agent
        .get(url)
        .call()
        .map_err(|e| format!("Request to {} failed: {}", url, e))?
        .into_string()
        .map_err(|e| format!("Failed to read response from {}: {}", url, e))?;

    let ip = parse_ip_response(&body)?;
    log!("Public IP resolved: {}", ip);
    Ok(ip)
}

/// Display text for the widget: the address, or the fallback string.
pub fn display_text(result: &Result<String, String>) -> String {
    match result {
        Ok(ip) => ip.clone(),
        Err(e) => {
            log!("Error fetching IP address: {}", e);
            IP_ERROR_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_response() {
        assert_eq!(parse_ip_response(r#"{"ip":"203.0.113.7"}"#).unwrap(), "203.0.113.7");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"ip":"2001:db8::1","country":"NL"}"#;

        assert_eq!(parse_ip_response(body).unwrap(), "2001:db8::1");
    }

    #[test]
    fn test_missing_ip_is_an_error() {
        assert!(parse_ip_response(r#"{"address":"203.0.113.7"}"#).is_err());
        assert!(parse_ip_response("not json").is_err());
        assert!(parse_ip_response(r#"{"ip":""}"#).is_err());
    }

    #[test]
    fn test_display_text_fallback() {
        assert_eq!(display_text(&Ok("198.51.100.1".to_string())), "198.51.100.1");
        assert_eq!(display_text(&Err("offline".to_string())), IP_ERROR_TEXT);
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        assert!(fetch_public_ip("http://127.0.0.1:9/").is_err());
    }
}
