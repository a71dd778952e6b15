//! Report pipeline: fetch all sales, render the PDF, upload it.

use chrono::Utc;

use crate::app::error::ServiceError;
use crate::app::sale_service::SaleService;
use crate::domain::report;
use crate::infra::object_store::ObjectStoreClient;

/// Where an uploaded report ended up.
#[derive(Debug, Clone)]
pub struct ReportLocation {
    pub location: String,
    pub key: String,
}

#[derive(Clone)]
pub struct ReportService {
    sales: SaleService,
    store: ObjectStoreClient,
}

impl ReportService {
    pub fn new(sales: SaleService, store: ObjectStoreClient) -> Self {
        Self { sales, store }
    }

    /// Builds the object key for a report generated at `unix_millis`.
    pub fn report_key(unix_millis: i64) -> String {
        format!("reports/sales-report-{}.pdf", unix_millis)
    }

    /// Fetches all sales, renders the report and uploads it. Synchronous
    /// with the request; an upload failure surfaces as an error, no retry.
    pub async fn generate(&self) -> Result<ReportLocation, ServiceError> {
        let sales = self.sales.find_all().await?;

        let generated_at = Utc::now();
        let bytes = report::render(&sales, generated_at)?;

        let key = Self::report_key(generated_at.timestamp_millis());
        let location = self.store.put(&key, bytes, "application/pdf").await?;

        Ok(ReportLocation { location, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_key_is_timestamped_pdf_under_reports() {
        let key = ReportService::report_key(1_715_000_000_000);
        assert_eq!(key, "reports/sales-report-1715000000000.pdf");
    }
}
