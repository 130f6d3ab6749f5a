use serde::{Deserialize, Serialize};

/// One provider's balance snapshot from `GET /api/balances`.
///
/// Every provider reports a different shape, so all fields are optional
/// and [`ServiceBalance::form`] picks the card to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceBalance {
    pub error: Option<String>,
    /// Key-status check, e.g. "Active" (OpenAI).
    pub status: Option<String>,
    pub models_available: Option<u64>,
    pub info: Option<String>,
    pub link: Option<String>,
    /// Character/credit usage (DeepL, ElevenLabs).
    pub used: Option<f64>,
    pub limit: Option<f64>,
    pub remaining: Option<f64>,
    pub percentage: Option<f64>,
    pub unit: Option<String>,
    pub tier: Option<String>,
}

/// Which card layout a balance payload maps to. Checked in the same order
/// the panel always used: error, then status, then usage, then info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceForm {
    Error,
    Status,
    Usage,
    Info,
    Empty,
}

impl ServiceBalance {
    pub fn form(&self) -> BalanceForm {
        if self.error.is_some() {
            BalanceForm::Error
        } else if self.status.is_some() {
            BalanceForm::Status
        } else if self.used.is_some() && self.limit.is_some() {
            BalanceForm::Usage
        } else if self.info.is_some() {
            BalanceForm::Info
        } else {
            BalanceForm::Empty
        }
    }
}

/// Balances keyed by provider; absent providers are not configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Balances {
    pub openai: Option<ServiceBalance>,
    pub deepl: Option<ServiceBalance>,
    pub elevenlabs: Option<ServiceBalance>,
    pub yandex: Option<ServiceBalance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub balances: Balances,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_other_fields() {
        let balance = ServiceBalance {
            error: Some("timeout".into()),
            status: Some("Active".into()),
            ..Default::default()
        };
        assert_eq!(balance.form(), BalanceForm::Error);
    }

    #[test]
    fn usage_needs_both_used_and_limit() {
        let mut balance = ServiceBalance {
            used: Some(100.0),
            ..Default::default()
        };
        assert_eq!(balance.form(), BalanceForm::Empty);
        balance.limit = Some(500.0);
        assert_eq!(balance.form(), BalanceForm::Usage);
    }

    #[test]
    fn info_only_card() {
        let balance = ServiceBalance {
            info: Some("Billing API not public".into()),
            link: Some("https://cloud.yandex.com/".into()),
            ..Default::default()
        };
        assert_eq!(balance.form(), BalanceForm::Info);
    }
}
