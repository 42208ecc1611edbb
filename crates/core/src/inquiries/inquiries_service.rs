use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::errors::Result;

use super::inquiries_model::{
    Inquiry, InquiryFilters, InquiryPriority, InquiryStatus, InquiryStatusFilter, SenderType,
};
use super::inquiries_traits::{InquiryRepositoryTrait, InquiryServiceTrait};

/// Service for triaging inbound inquiries.
pub struct InquiryService {
    inquiry_repository: Arc<dyn InquiryRepositoryTrait>,
    filters: RwLock<InquiryFilters>,
}

impl InquiryService {
    pub fn new(inquiry_repository: Arc<dyn InquiryRepositoryTrait>) -> Self {
        InquiryService {
            inquiry_repository,
            filters: RwLock::new(InquiryFilters::default()),
        }
    }
}

#[async_trait]
impl InquiryServiceTrait for InquiryService {
    fn get_inquiries(&self) -> Result<Vec<Inquiry>> {
        self.inquiry_repository.get_inquiries()
    }

    fn get_inquiry(&self, id: &str) -> Result<Inquiry> {
        self.inquiry_repository.get_inquiry(id)
    }

    async fn update_inquiry_status(&self, id: &str, status: InquiryStatus) -> Result<Inquiry> {
        self.inquiry_repository.update_status(id, status).await
    }

    async fn delete_inquiry(&self, id: &str) -> Result<()> {
        self.inquiry_repository.delete_inquiry(id).await
    }

    fn set_search_query(&self, query: &str) {
        self.filters.write().unwrap().search_query = query.to_string();
    }

    fn set_status_filter(&self, status: InquiryStatusFilter) {
        self.filters.write().unwrap().status = status;
    }

    fn set_priority_filter(&self, priority: Option<InquiryPriority>) {
        self.filters.write().unwrap().priority = priority;
    }

    fn set_sender_type_filter(&self, sender_type: Option<SenderType>) {
        self.filters.write().unwrap().sender_type = sender_type;
    }

    fn filters(&self) -> InquiryFilters {
        self.filters.read().unwrap().clone()
    }

    fn filtered_inquiries(&self) -> Result<Vec<Inquiry>> {
        let filters = self.filters.read().unwrap().clone();
        let mut inquiries: Vec<Inquiry> = self
            .inquiry_repository
            .get_inquiries()?
            .into_iter()
            .filter(|i| filters.matches(i))
            .collect();
        // Newest first.
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(inquiries)
    }

    fn unread_count(&self) -> Result<usize> {
        Ok(self
            .inquiry_repository
            .get_inquiries()?
            .iter()
            .filter(|i| i.status == InquiryStatus::Unread)
            .count())
    }

    fn pending_count(&self) -> Result<usize> {
        Ok(self
            .inquiry_repository
            .get_inquiries()?
            .iter()
            .filter(|i| matches!(i.status, InquiryStatus::Unread | InquiryStatus::Read))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::{TimeZone, Utc};

    struct MockInquiryRepository {
        inquiries: RwLock<Vec<Inquiry>>,
    }

    impl MockInquiryRepository {
        fn new(inquiries: Vec<Inquiry>) -> Self {
            MockInquiryRepository {
                inquiries: RwLock::new(inquiries),
            }
        }
    }

    #[async_trait]
    impl InquiryRepositoryTrait for MockInquiryRepository {
        fn get_inquiries(&self) -> Result<Vec<Inquiry>> {
            Ok(self.inquiries.read().unwrap().clone())
        }

        fn get_inquiry(&self, id: &str) -> Result<Inquiry> {
            self.inquiries
                .read()
                .unwrap()
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("inquiry {}", id)))
        }

        async fn update_status(&self, id: &str, status: InquiryStatus) -> Result<Inquiry> {
            let mut inquiries = self.inquiries.write().unwrap();
            let inquiry = inquiries
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| Error::not_found(format!("inquiry {}", id)))?;
            inquiry.status = status;
            Ok(inquiry.clone())
        }

        async fn delete_inquiry(&self, id: &str) -> Result<()> {
            let mut inquiries = self.inquiries.write().unwrap();
            let before = inquiries.len();
            inquiries.retain(|i| i.id != id);
            if inquiries.len() == before {
                return Err(Error::not_found(format!("inquiry {}", id)));
            }
            Ok(())
        }
    }

    fn inquiry(id: &str, status: InquiryStatus, priority: InquiryPriority, day: u32) -> Inquiry {
        Inquiry {
            id: id.to_string(),
            sender_name: "高橋".to_string(),
            sender_email: "takahashi@example.com".to_string(),
            sender_type: SenderType::Advertiser,
            subject: "掲載内容の変更について".to_string(),
            content: "来月分の内容を差し替えたいです。".to_string(),
            status,
            priority,
            created_at: Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap(),
            sales_rep_id: None,
        }
    }

    fn make_service(inquiries: Vec<Inquiry>) -> InquiryService {
        InquiryService::new(Arc::new(MockInquiryRepository::new(inquiries)))
    }

    #[tokio::test]
    async fn test_update_status_no_audit_trail() {
        let service = make_service(vec![inquiry(
            "i1",
            InquiryStatus::Unread,
            InquiryPriority::Medium,
            1,
        )]);
        let updated = service
            .update_inquiry_status("i1", InquiryStatus::Read)
            .await
            .unwrap();
        assert_eq!(updated.status, InquiryStatus::Read);
    }

    #[tokio::test]
    async fn test_update_missing_inquiry_is_not_found() {
        let service = make_service(vec![]);
        let err = service
            .update_inquiry_status("ghost", InquiryStatus::Read)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_outstanding_filter_selects_unread_and_read() {
        let service = make_service(vec![
            inquiry("i1", InquiryStatus::Unread, InquiryPriority::High, 1),
            inquiry("i2", InquiryStatus::Read, InquiryPriority::Low, 2),
            inquiry("i3", InquiryStatus::Resolved, InquiryPriority::Low, 3),
            inquiry("i4", InquiryStatus::Pending, InquiryPriority::Low, 4),
        ]);

        service.set_status_filter(InquiryStatusFilter::Outstanding);
        let ids: Vec<String> = service
            .filtered_inquiries()
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["i2", "i1"]);
    }

    #[test]
    fn test_filters_compose() {
        let mut sales_rep_inquiry =
            inquiry("i2", InquiryStatus::Unread, InquiryPriority::High, 2);
        sales_rep_inquiry.sender_type = SenderType::SalesRep;

        let service = make_service(vec![
            inquiry("i1", InquiryStatus::Unread, InquiryPriority::High, 1),
            sales_rep_inquiry,
            inquiry("i3", InquiryStatus::Unread, InquiryPriority::Low, 3),
        ]);

        service.set_priority_filter(Some(InquiryPriority::High));
        service.set_sender_type_filter(Some(SenderType::Advertiser));
        let filtered = service.filtered_inquiries().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "i1");
    }

    #[test]
    fn test_filtered_inquiries_newest_first() {
        let service = make_service(vec![
            inquiry("i1", InquiryStatus::Unread, InquiryPriority::Low, 1),
            inquiry("i3", InquiryStatus::Unread, InquiryPriority::Low, 3),
            inquiry("i2", InquiryStatus::Unread, InquiryPriority::Low, 2),
        ]);

        let ids: Vec<String> = service
            .filtered_inquiries()
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["i3", "i2", "i1"]);
    }

    #[test]
    fn test_search_covers_sender_subject_and_email() {
        let mut other = inquiry("i2", InquiryStatus::Unread, InquiryPriority::Low, 2);
        other.sender_name = "伊藤".to_string();
        other.sender_email = "ito@example.com".to_string();
        other.subject = "請求書の再発行".to_string();

        let service = make_service(vec![
            inquiry("i1", InquiryStatus::Unread, InquiryPriority::Low, 1),
            other,
        ]);

        service.set_search_query("請求書");
        let filtered = service.filtered_inquiries().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "i2");

        service.set_search_query("takahashi");
        let filtered = service.filtered_inquiries().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "i1");
    }

    #[test]
    fn test_counts() {
        let service = make_service(vec![
            inquiry("i1", InquiryStatus::Unread, InquiryPriority::Low, 1),
            inquiry("i2", InquiryStatus::Read, InquiryPriority::Low, 2),
            inquiry("i3", InquiryStatus::Resolved, InquiryPriority::Low, 3),
        ]);

        assert_eq!(service.unread_count().unwrap(), 1);
        assert_eq!(service.pending_count().unwrap(), 2);
    }
}
