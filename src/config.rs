use std::net::IpAddr;

// Placeholder endpoint from the original deployment. Point FOLIO_WEBHOOK_URL
// at a live webhook to receive inquiries.
const DEFAULT_WEBHOOK_URL: &str = "https://discord.com/api/webhooks/1349090248558252083/SnqV35xGK77moLAMqLEmZd2kVqre8lL8giMun7uu5pigSYLoy1tfAi1P_Apx_fP_umx";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub webhook_url: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("FOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = env_or("FOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_PORT: {e}"))?;

        let webhook_url = env_or("FOLIO_WEBHOOK_URL", DEFAULT_WEBHOOK_URL);

        let max_body_size: usize = env_or("FOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FOLIO_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            webhook_url,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
