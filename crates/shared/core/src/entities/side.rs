use serde::{Deserialize, Serialize};

/// Direction of the planned trade.
///
/// Both impact models are symmetric in side; it is carried through to the
/// status view so callers see the request as they submitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Lowercase wire representation, matching the serde encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        let side: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, Side::Sell);
        assert_eq!(side.as_str(), "sell");
    }
}
