//! Google Input Tools client for Romanized → Devanagari transliteration.
//!
//! Request: `GET <endpoint>?text=<chunk>&itc=<input tool>&num=<n>`
//! Response: `["SUCCESS", [[<input>, [<best>, ...], ...]]]`

use preeti_core::settings::{settings, TransliterationSettings};
use preeti_core::translit::{TranslitError, Transliterator};

pub struct InputToolsClient {
    agent: ureq::Agent,
    endpoint: String,
    input_tool: String,
    num: u32,
}

impl InputToolsClient {
    pub fn new(config: &TransliterationSettings) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            endpoint: config.endpoint.clone(),
            input_tool: config.input_tool.clone(),
            num: config.num,
        }
    }

    /// Client configured from the global settings.
    pub fn from_settings() -> Self {
        Self::new(&settings().transliteration)
    }
}

impl Transliterator for InputToolsClient {
    fn transliterate_chunk(&self, chunk: &str) -> Result<String, TranslitError> {
        let body = self
            .agent
            .get(self.endpoint.as_str())
            .query("text", chunk)
            .query("itc", &self.input_tool)
            .query("num", self.num.to_string())
            .call()
            .map_err(|e| TranslitError::Http(format!("{}: {e}", self.endpoint)))?
            .into_body()
            .read_to_string()
            .map_err(|e| TranslitError::Http(format!("{}: {e}", self.endpoint)))?;
        parse_response(&body)
    }
}

/// Extract the best candidate from an Input Tools JSON response.
pub fn parse_response(json: &str) -> Result<String, TranslitError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| TranslitError::Malformed(e.to_string()))?;

    let status = value[0]
        .as_str()
        .ok_or_else(|| TranslitError::Malformed("missing status".to_string()))?;
    if status != "SUCCESS" {
        return Err(TranslitError::Status(status.to_string()));
    }

    value[1][0][1][0]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TranslitError::Malformed("missing candidate".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let json = r#"["SUCCESS",[["namaste",["नमस्ते","नमस्तें"],[],{"candidate_type":[0,0]}]]]"#;
        assert_eq!(parse_response(json).unwrap(), "नमस्ते");
    }

    #[test]
    fn test_parse_multi_word_chunk() {
        let json = r#"["SUCCESS",[["ma ghar jaanchhu",["म घर जान्छु"],[],{}]]]"#;
        assert_eq!(parse_response(json).unwrap(), "म घर जान्छु");
    }

    #[test]
    fn test_parse_failure_status() {
        let err = parse_response(r#"["FAILED_TO_PROCESS_REQUEST",[]]"#).unwrap_err();
        assert!(matches!(err, TranslitError::Status(ref s) if s == "FAILED_TO_PROCESS_REQUEST"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_response("<html>"),
            Err(TranslitError::Malformed(_))
        ));
        assert!(matches!(
            parse_response("{}"),
            Err(TranslitError::Malformed(_))
        ));
        assert!(matches!(
            parse_response(r#"["SUCCESS",[]]"#),
            Err(TranslitError::Malformed(_))
        ));
    }

    #[test]
    fn test_client_from_settings() {
        let client = InputToolsClient::from_settings();
        assert_eq!(client.endpoint, "https://inputtools.google.com/request");
        assert_eq!(client.input_tool, "ne-t-i0-und");
        assert_eq!(client.num, 1);
    }
}
