use serde::{Deserialize, Serialize};

pub const DATA_WIPE_FEE: u32 = 10;
pub const CERTIFICATE_FEE: u32 = 5;

/// Optional paid services ticked on the pickup form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSelection {
    #[serde(default)]
    pub data_wipe: bool,
    #[serde(default)]
    pub certificate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeeQuote {
    pub total: u32,
    pub services: Vec<&'static str>,
}

impl FeeQuote {
    /// Tariffs are additive, no bundle discount.
    pub fn for_selection(selection: FeeSelection) -> Self {
        let mut quote = FeeQuote::default();
        if selection.data_wipe {
            quote.total += DATA_WIPE_FEE;
            quote.services.push("Data Wiping");
        }
        if selection.certificate {
            quote.total += CERTIFICATE_FEE;
            quote.services.push("Disposal Certificate");
        }
        quote
    }

    /// Breakdown shown to the user, `None` when nothing is charged
    pub fn summary(&self) -> Option<String> {
        (self.total > 0).then(|| {
            format!(
                "Additional services: {} - Total: ${}",
                self.services.join(", "),
                self.total
            )
        })
    }
}
