use chrono::Utc;
#[cfg(feature = "json")]
use serde::Serialize;

use crate::domain::ntp::ProbeOutcome;
use crate::error::ProbeError;

#[cfg(feature = "json")]
#[derive(Serialize)]
pub struct JsonOutcome {
    pub server: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(feature = "json")]
#[derive(Serialize)]
pub struct JsonRun {
    pub schema_version: u8,
    pub run_ts: String,
    pub results: Vec<JsonOutcome>,
}

/// Serialize probe outcomes into a JSON string.
#[allow(unused_variables)]
pub fn to_json(outcomes: &[ProbeOutcome], pretty: bool) -> Result<String, ProbeError> {
    #[cfg(feature = "json")]
    {
        let results = outcomes
            .iter()
            .map(|o| match o {
                ProbeOutcome::Success(time) => JsonOutcome {
                    server: time.target.name.clone(),
                    reachable: true,
                    ip: Some(time.target.ip.to_string()),
                    port: Some(time.target.port),
                    utc: Some(time.utc.to_rfc3339()),
                    local: Some(time.local.format("%Y-%m-%d %H:%M:%S").to_string()),
                    reason: None,
                },
                ProbeOutcome::Failure { server, reason } => JsonOutcome {
                    server: server.clone(),
                    reachable: false,
                    ip: None,
                    port: None,
                    utc: None,
                    local: None,
                    reason: Some(reason.clone()),
                },
            })
            .collect();
        let run = JsonRun {
            schema_version: 1,
            run_ts: Utc::now().to_rfc3339(),
            results,
        };
        let text = if pretty {
            serde_json::to_string_pretty(&run).map_err(|e| ProbeError::Other(e.to_string()))?
        } else {
            serde_json::to_string(&run).map_err(|e| ProbeError::Other(e.to_string()))?
        };
        Ok(text)
    }
    #[cfg(not(feature = "json"))]
    {
        let _ = outcomes;
        let _ = pretty;
        Err(ProbeError::Other("json feature disabled".into()))
    }
}
