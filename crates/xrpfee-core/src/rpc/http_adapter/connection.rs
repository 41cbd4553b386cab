use reqwest::Url;

use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid rpc url `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported rpc url scheme `{other}`; expected http or https"
        ))),
    }
}
