use crate::constants::SCANNED_RECEIPT_DESCRIPTION;
use crate::error::LedgerError;
use crate::models::{Category, Currency};
use async_trait::async_trait;
use log::{debug, error, warn};
use serde_json::Value;
use std::time::Duration;

/// External service that reads a receipt image and answers with a JSON
/// object carrying `description`, `amount`, `currency` and `category`.
#[async_trait]
pub trait ReceiptScanner: Send + Sync {
    async fn scan(&self, image: &[u8]) -> Result<Value, LedgerError>;
}

/// Runs the scanner with a deadline. Failures and timeouts yield `None`.
pub async fn scan_receipt(
    scanner: &dyn ReceiptScanner,
    image: &[u8],
    timeout: Duration,
) -> Option<Value> {
    debug!("Scanning receipt of {} bytes", image.len());
    match tokio::time::timeout(timeout, scanner.scan(image)).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            error!("Receipt scan failed: {}", e);
            None
        }
        Err(_) => {
            error!("Receipt scan timed out after {:?}", timeout);
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptDefaults {
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
}

impl ReceiptDefaults {
    pub fn for_currency(currency: Currency) -> Self {
        ReceiptDefaults {
            description: SCANNED_RECEIPT_DESCRIPTION.to_string(),
            amount: 0.0,
            currency,
            category: Category::Others,
        }
    }
}

/// Expense fields pre-filled from a scan, ready for the user to review.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptDraft {
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
}

/// Validates untrusted scanner output field by field, falling back to
/// `defaults` for anything missing or malformed.
pub fn apply_scan(scan: Option<&Value>, defaults: ReceiptDefaults) -> ReceiptDraft {
    let Some(scan) = scan else {
        return ReceiptDraft {
            description: defaults.description,
            amount: defaults.amount,
            currency: defaults.currency,
            category: defaults.category,
        };
    };

    let description = scan
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or(defaults.description);

    let amount = scan
        .get("amount")
        .and_then(coerce_amount)
        .unwrap_or_else(|| {
            warn!("Scanned amount missing or invalid, using default");
            defaults.amount
        });

    let currency = match scan.get("currency").and_then(Value::as_str) {
        Some(code) => code.parse().unwrap_or_else(|_| {
            warn!("Scanned currency {} is not supported, using default", code);
            defaults.currency
        }),
        None => defaults.currency,
    };

    let category = scan
        .get("category")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(Category::from_label)
        .unwrap_or(defaults.category);

    ReceiptDraft {
        description,
        amount,
        currency,
        category,
    }
}

fn coerce_amount(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}
