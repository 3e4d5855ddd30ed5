use serde::{Deserialize, Serialize};

/// Response of `GET /api/wallet/balance/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(default)]
    pub balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "NGN".to_string()
}

impl Default for WalletBalance {
    fn default() -> Self {
        Self {
            balance: 0.0,
            currency: default_currency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_defaults_to_ngn() {
        let w: WalletBalance = serde_json::from_str(r#"{"balance":1200.5}"#).unwrap();
        assert_eq!(w.currency, "NGN");
        assert_eq!(w.balance, 1200.5);
    }
}
