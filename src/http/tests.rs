use super::{HttpDispatcher, content_type_for, resolve_auth};
use crate::config::types::EndpointConfig;
use crate::error::DispatchError;

fn config_with(endpoint: &str, auth_type: &str) -> EndpointConfig {
    EndpointConfig {
        api_endpoint: endpoint.to_owned(),
        dynamic_path: false,
        auth_type: auth_type.to_owned(),
        username: "user".to_owned(),
        password: "pass".to_owned(),
    }
}

#[test]
fn content_type_covers_json_and_xml() -> Result<(), String> {
    let json = content_type_for("JSON").map_err(|err| format!("json failed: {}", err))?;
    if json != "application/json" {
        return Err(format!("Unexpected json content type: {}", json));
    }
    let xml = content_type_for("xml").map_err(|err| format!("xml failed: {}", err))?;
    if xml != "application/xml" {
        return Err(format!("Unexpected xml content type: {}", xml));
    }
    Ok(())
}

#[test]
fn content_type_rejects_other_formats() -> Result<(), String> {
    match content_type_for("csv") {
        Err(DispatchError::UnsupportedFormat { format }) if format == "csv" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(value) => Err(format!("'csv' resolved to {}", value)),
    }
}

#[test]
fn basic_auth_header_is_base64_of_credentials() -> Result<(), String> {
    let config = config_with("http://localhost:3000", "basic");
    let header = resolve_auth(&config)
        .map_err(|err| format!("resolve_auth failed: {}", err))?
        .ok_or("Expected an auth header")?;
    // "user:pass" base64-encoded
    if header.to_str().map_err(|err| format!("header: {}", err))? != "Basic dXNlcjpwYXNz" {
        return Err("Unexpected basic auth header".to_owned());
    }
    Ok(())
}

#[test]
fn anonymous_auth_variants_send_no_header() -> Result<(), String> {
    for auth_type in ["", "none", "anonymous", "None"] {
        let config = config_with("http://localhost:3000", auth_type);
        let header =
            resolve_auth(&config).map_err(|err| format!("resolve_auth failed: {}", err))?;
        if header.is_some() {
            return Err(format!("Auth type '{}' produced a header", auth_type));
        }
    }
    Ok(())
}

#[test]
fn oauth_is_accepted_but_unauthenticated() -> Result<(), String> {
    let config = config_with("http://localhost:3000", "oauth");
    let header = resolve_auth(&config).map_err(|err| format!("resolve_auth failed: {}", err))?;
    if header.is_some() {
        return Err("OAuth should not produce a header yet".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_auth_type_is_rejected() -> Result<(), String> {
    let config = config_with("http://localhost:3000", "digest");
    match resolve_auth(&config) {
        Err(DispatchError::UnhandledAuthType { value }) if value == "digest" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected rejection".to_owned()),
    }
}

#[test]
fn dynamic_path_joins_message_type() -> Result<(), String> {
    let mut config = config_with("http://localhost:3000/api", "none");
    config.dynamic_path = true;
    let dispatcher =
        HttpDispatcher::new(&config).map_err(|err| format!("dispatcher failed: {}", err))?;
    let url = dispatcher
        .target_url("OrderCreated")
        .map_err(|err| format!("target_url failed: {}", err))?;
    if url.as_str() != "http://localhost:3000/api/OrderCreated" {
        return Err(format!("Unexpected url: {}", url));
    }
    Ok(())
}

#[test]
fn static_path_ignores_message_type() -> Result<(), String> {
    let config = config_with("http://localhost:3000/api", "none");
    let dispatcher =
        HttpDispatcher::new(&config).map_err(|err| format!("dispatcher failed: {}", err))?;
    let url = dispatcher
        .target_url("OrderCreated")
        .map_err(|err| format!("target_url failed: {}", err))?;
    if url.as_str() != "http://localhost:3000/api" {
        return Err(format!("Unexpected url: {}", url));
    }
    Ok(())
}

#[test]
fn invalid_endpoint_url_is_rejected() -> Result<(), String> {
    let config = config_with("not a url", "none");
    match HttpDispatcher::new(&config) {
        Err(DispatchError::InvalidUrl { .. }) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected rejection".to_owned()),
    }
}
