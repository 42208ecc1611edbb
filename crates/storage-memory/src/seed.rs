//! Boot fixtures.
//!
//! The application holds all state in volatile memory and reseeds these
//! collections on every start.

use adlocal_core::ad_locations::AdLocation;
use adlocal_core::advertisers::Advertiser;
use adlocal_core::inquiries::{Inquiry, InquiryPriority, InquiryStatus, SenderType};
use adlocal_core::payments::{Payment, PaymentStatus, PaymentStatusHistory};
use adlocal_core::sales_reps::SalesRep;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    advertiser_id: &str,
    advertiser_name: &str,
    area: &str,
    campaign_name: &str,
    amount: i64,
    status: PaymentStatus,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    paid_date: Option<NaiveDate>,
) -> Payment {
    Payment {
        id: id.to_string(),
        advertiser_id: advertiser_id.to_string(),
        advertiser_name: advertiser_name.to_string(),
        area: area.to_string(),
        campaign_name: campaign_name.to_string(),
        amount,
        status,
        invoice_date,
        due_date,
        paid_date,
        invoice_url: None,
        notes: None,
        contract_start_date: date(2025, 1, 1),
        contract_period: "6ヶ月".to_string(),
        contract_store_count: 5,
        created_at: timestamp(2025, 1, 1, 9),
        updated_at: timestamp(2025, 1, 1, 9),
    }
}

/// Payment fixtures and the matching transition history.
pub fn seed_payments() -> (Vec<Payment>, Vec<PaymentStatusHistory>) {
    let payments = vec![
        payment(
            "p1",
            "adv1",
            "カフェ青山",
            "渋谷区",
            "新装開店キャンペーン",
            120000,
            PaymentStatus::Paid,
            date(2025, 1, 15),
            date(2025, 2, 15),
            Some(date(2025, 2, 10)),
        ),
        payment(
            "p2",
            "adv2",
            "ラーメン一番",
            "新宿区",
            "深夜営業開始の告知",
            80000,
            PaymentStatus::Unpaid,
            date(2025, 2, 1),
            date(2025, 3, 1),
            None,
        ),
        payment(
            "p3",
            "adv3",
            "英会話スクールABC",
            "港区",
            "春の入会キャンペーン",
            200000,
            PaymentStatus::Pending,
            date(2025, 2, 20),
            date(2025, 3, 20),
            None,
        ),
        payment(
            "p4",
            "adv1",
            "カフェ青山",
            "渋谷区",
            "季節限定メニュー告知",
            60000,
            PaymentStatus::Overpaid,
            date(2025, 3, 1),
            date(2025, 4, 1),
            Some(date(2025, 3, 28)),
        ),
        payment(
            "p5",
            "adv4",
            "整骨院はるかぜ",
            "武蔵野市",
            "開院一周年キャンペーン",
            45000,
            PaymentStatus::Unpaid,
            date(2025, 3, 10),
            date(2025, 4, 10),
            None,
        ),
    ];

    let history = vec![
        PaymentStatusHistory {
            id: "hist1".to_string(),
            payment_id: "p1".to_string(),
            previous_status: PaymentStatus::Unpaid,
            new_status: PaymentStatus::Pending,
            updated_by: "管理者".to_string(),
            updated_at: timestamp(2025, 2, 5, 10),
            notes: Some("振込予定の連絡あり".to_string()),
        },
        PaymentStatusHistory {
            id: "hist2".to_string(),
            payment_id: "p1".to_string(),
            previous_status: PaymentStatus::Pending,
            new_status: PaymentStatus::Paid,
            updated_by: "管理者".to_string(),
            updated_at: timestamp(2025, 2, 10, 14),
            notes: None,
        },
        PaymentStatusHistory {
            id: "hist3".to_string(),
            payment_id: "p4".to_string(),
            previous_status: PaymentStatus::Unpaid,
            new_status: PaymentStatus::Overpaid,
            updated_by: "管理者".to_string(),
            updated_at: timestamp(2025, 3, 28, 11),
            notes: Some("超過入金。差額は翌月分に充当".to_string()),
        },
    ];

    (payments, history)
}

/// Advertiser fixtures.
pub fn seed_advertisers() -> Vec<Advertiser> {
    vec![
        Advertiser {
            id: "adv1".to_string(),
            name: "カフェ青山".to_string(),
            ad_content: "新装開店の告知ポスター".to_string(),
            preferred_area: vec!["渋谷区".to_string(), "港区".to_string()],
            period: "6ヶ月".to_string(),
            budget: 180000,
            contact_person: "青山太郎".to_string(),
            contact_info: "aoyama@example.com".to_string(),
            created_at: date(2024, 12, 20),
        },
        Advertiser {
            id: "adv2".to_string(),
            name: "ラーメン一番".to_string(),
            ad_content: "深夜営業開始のチラシ".to_string(),
            preferred_area: vec!["新宿区".to_string()],
            period: "3ヶ月".to_string(),
            budget: 90000,
            contact_person: "一番健太".to_string(),
            contact_info: "03-5555-0102".to_string(),
            created_at: date(2025, 1, 8),
        },
        Advertiser {
            id: "adv3".to_string(),
            name: "英会話スクールABC".to_string(),
            ad_content: "春の入会キャンペーン案内".to_string(),
            preferred_area: vec!["港区".to_string(), "千代田区".to_string()],
            period: "12ヶ月".to_string(),
            budget: 400000,
            contact_person: "鈴木英子".to_string(),
            contact_info: "suzuki@abc-english.example.com".to_string(),
            created_at: date(2025, 2, 1),
        },
        Advertiser {
            id: "adv4".to_string(),
            name: "整骨院はるかぜ".to_string(),
            ad_content: "開院一周年の割引案内".to_string(),
            preferred_area: vec!["武蔵野市".to_string()],
            period: "3ヶ月".to_string(),
            budget: 60000,
            contact_person: "春風治".to_string(),
            contact_info: "0422-00-1111".to_string(),
            created_at: date(2025, 2, 25),
        },
    ]
}

/// Placement-location fixtures.
pub fn seed_ad_locations() -> Vec<AdLocation> {
    vec![
        AdLocation {
            id: "loc1".to_string(),
            name: "美容室シエル".to_string(),
            address: "東京都渋谷区神南1-2-3".to_string(),
            business_type: "美容室".to_string(),
            has_agreement: true,
            fee: 15000,
            contact_person: "田中美咲".to_string(),
            contact_info: "03-1111-2222".to_string(),
            created_at: date(2024, 11, 15),
        },
        AdLocation {
            id: "loc2".to_string(),
            name: "クリーニング白洋".to_string(),
            address: "東京都新宿区西新宿7-8".to_string(),
            business_type: "クリーニング".to_string(),
            has_agreement: true,
            fee: 12000,
            contact_person: "白井洋一".to_string(),
            contact_info: "03-3333-4444".to_string(),
            created_at: date(2024, 12, 1),
        },
        AdLocation {
            id: "loc3".to_string(),
            name: "書店ブックス港".to_string(),
            address: "東京都港区六本木5-1".to_string(),
            business_type: "書店".to_string(),
            has_agreement: false,
            fee: 18000,
            contact_person: "港読子".to_string(),
            contact_info: "03-5555-6666".to_string(),
            created_at: date(2025, 1, 20),
        },
        AdLocation {
            id: "loc4".to_string(),
            name: "パン工房こむぎ".to_string(),
            address: "武蔵野市吉祥寺本町2-4".to_string(),
            business_type: "ベーカリー".to_string(),
            has_agreement: true,
            fee: 10000,
            contact_person: "小麦健".to_string(),
            contact_info: "0422-22-3333".to_string(),
            created_at: date(2025, 2, 14),
        },
    ]
}

/// Sales representative fixtures.
pub fn seed_sales_reps() -> Vec<SalesRep> {
    vec![
        SalesRep {
            id: "rep1".to_string(),
            name: "山田太郎".to_string(),
            contact: "090-1111-2222".to_string(),
            area: "渋谷区".to_string(),
            notes: "飲食店の開拓に強い".to_string(),
            sales_total: 450000,
            incentive_amount: 45000,
            contracted_advertisers: vec!["adv1".to_string(), "adv2".to_string()],
            contracted_ad_locations: vec!["loc1".to_string(), "loc2".to_string()],
            created_at: date(2024, 10, 1),
        },
        SalesRep {
            id: "rep2".to_string(),
            name: "佐藤花子".to_string(),
            contact: "090-3333-4444".to_string(),
            area: "港区".to_string(),
            notes: String::new(),
            sales_total: 620000,
            incentive_amount: 62000,
            contracted_advertisers: vec!["adv3".to_string()],
            contracted_ad_locations: vec!["loc3".to_string()],
            created_at: date(2024, 12, 10),
        },
    ]
}

/// Inquiry fixtures.
pub fn seed_inquiries() -> Vec<Inquiry> {
    vec![
        Inquiry {
            id: "inq1".to_string(),
            sender_name: "青山太郎".to_string(),
            sender_email: "aoyama@example.com".to_string(),
            sender_type: SenderType::Advertiser,
            subject: "掲載内容の変更について".to_string(),
            content: "来月分のポスター内容を差し替えたいです。".to_string(),
            status: InquiryStatus::Unread,
            priority: InquiryPriority::High,
            created_at: timestamp(2025, 3, 18, 9),
            sales_rep_id: None,
        },
        Inquiry {
            id: "inq2".to_string(),
            sender_name: "田中美咲".to_string(),
            sender_email: "tanaka@ciel.example.com".to_string(),
            sender_type: SenderType::AdLocation,
            subject: "掲出スペースの追加".to_string(),
            content: "店内にもう1枠掲出できそうです。".to_string(),
            status: InquiryStatus::Read,
            priority: InquiryPriority::Medium,
            created_at: timestamp(2025, 3, 15, 14),
            sales_rep_id: Some("rep1".to_string()),
        },
        Inquiry {
            id: "inq3".to_string(),
            sender_name: "匿名希望".to_string(),
            sender_email: "info@example.org".to_string(),
            sender_type: SenderType::General,
            subject: "広告掲載の料金について".to_string(),
            content: "チラシ設置の料金体系を教えてください。".to_string(),
            status: InquiryStatus::Resolved,
            priority: InquiryPriority::Low,
            created_at: timestamp(2025, 3, 10, 11),
            sales_rep_id: None,
        },
    ]
}
