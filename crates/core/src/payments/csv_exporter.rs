//! CSV serialization of the filtered payment view.
//!
//! Every field is wrapped in double quotes; embedded quotes are doubled
//! per RFC 4180. The header row is always present, even for an empty view.

use csv::{QuoteStyle, WriterBuilder};

use crate::errors::{Error, Result};

use super::payments_model::Payment;

/// Column order expected by the download/handoff consumers.
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "広告主名",
    "キャンペーン名",
    "金額",
    "ステータス",
    "請求日",
    "支払期限",
    "入金日",
    "備考",
];

/// Serializes the given payments, in order, to CSV text.
///
/// Amounts are plain decimal strings, the status is its raw enum token,
/// and absent paid dates/notes become empty fields.
pub fn export_payments_csv(payments: &[Payment]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;

    for payment in payments {
        let amount = payment.amount.to_string();
        let invoice_date = payment.invoice_date.to_string();
        let due_date = payment.due_date.to_string();
        let paid_date = payment
            .paid_date
            .map(|d| d.to_string())
            .unwrap_or_default();

        writer.write_record([
            payment.id.as_str(),
            payment.advertiser_name.as_str(),
            payment.campaign_name.as_str(),
            amount.as_str(),
            payment.status.as_str(),
            invoice_date.as_str(),
            due_date.as_str(),
            paid_date.as_str(),
            payment.notes.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::payments_model::PaymentStatus;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn payment(id: &str, notes: Option<&str>) -> Payment {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        Payment {
            id: id.to_string(),
            advertiser_id: "adv1".to_string(),
            advertiser_name: "カフェ青山".to_string(),
            area: "渋谷区".to_string(),
            campaign_name: "春のキャンペーン".to_string(),
            amount: 50000,
            status: PaymentStatus::Unpaid,
            invoice_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            paid_date: None,
            invoice_url: None,
            notes: notes.map(str::to_string),
            contract_start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            contract_period: "6ヶ月".to_string(),
            contract_store_count: 3,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_empty_view_exports_header_only() {
        let csv = export_payments_csv(&[]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("\"ID\",\"広告主名\""));
    }

    #[test]
    fn test_every_field_is_quoted() {
        let csv = export_payments_csv(&[payment("p1", None)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"p1\",\"カフェ青山\",\"春のキャンペーン\",\"50000\",\"unpaid\",\
             \"2025-01-15\",\"2025-02-15\",\"\",\"\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = export_payments_csv(&[payment("p1", Some("店舗名は\"青山\"支店"))]).unwrap();
        assert!(csv.contains("\"店舗名は\"\"青山\"\"支店\""));
    }

    #[test]
    fn test_row_count_matches_input() {
        let payments = vec![payment("p1", None), payment("p2", Some("入金確認済み"))];
        let csv = export_payments_csv(&payments).unwrap();
        assert_eq!(csv.lines().count(), payments.len() + 1);
        // Header and data rows carry the same field count.
        for line in csv.lines() {
            assert_eq!(line.matches("\",\"").count(), CSV_HEADERS.len() - 1);
        }
    }
}
