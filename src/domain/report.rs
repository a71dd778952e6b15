//! Sales report rendering.
//!
//! Produces the multi-page tabular PDF served by `GET /api/report`: a title,
//! the generation timestamp, a repeated header row, 15 sale rows per page and
//! the grand total on the last page. Rendering is pure (bytes in, bytes out)
//! so it can be tested without a database or object storage.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use rust_decimal::Decimal;

use crate::domain::sale::SaleWithCar;

pub const ROWS_PER_PAGE: usize = 15;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const ROW_STEP_MM: f32 = 9.0;

// Column x-offsets, mirroring the report's ID / Car / Customer / Price / Date table.
const COL_ID: f32 = 18.0;
const COL_CAR: f32 = 35.0;
const COL_CUSTOMER: f32 = 85.0;
const COL_PRICE: f32 = 135.0;
const COL_DATE: f32 = 168.0;

/// Number of pages a report over `rows` sales occupies (at least one).
pub fn page_count(rows: usize) -> usize {
    if rows == 0 {
        1
    } else {
        (rows + ROWS_PER_PAGE - 1) / ROWS_PER_PAGE
    }
}

/// Sum of all sale prices, zero when there are none.
pub fn total_amount(sales: &[SaleWithCar]) -> Decimal {
    sales.iter().map(|s| s.sale_price).sum()
}

fn table_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.use_text("ID", 11.0, Mm(COL_ID), Mm(y), bold);
    layer.use_text("Car", 11.0, Mm(COL_CAR), Mm(y), bold);
    layer.use_text("Customer", 11.0, Mm(COL_CUSTOMER), Mm(y), bold);
    layer.use_text("Price", 11.0, Mm(COL_PRICE), Mm(y), bold);
    layer.use_text("Date", 11.0, Mm(COL_DATE), Mm(y), bold);
}

/// Renders the full report document and returns the PDF bytes.
pub fn render(sales: &[SaleWithCar], generated_at: DateTime<Utc>) -> anyhow::Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Sales Report", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    layer.use_text("Sales Report", 20.0, Mm(82.0), Mm(278.0), &bold);
    layer.use_text(
        format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        10.0,
        Mm(130.0),
        Mm(268.0),
        &font,
    );

    let mut table_top: f32 = 255.0;
    table_header(&layer, &bold, table_top);

    let mut rows_on_page = 0usize;
    for sale in sales {
        if rows_on_page >= ROWS_PER_PAGE {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            layer = doc.get_page(page).get_layer(page_layer);
            table_top = 278.0;
            table_header(&layer, &bold, table_top);
            rows_on_page = 0;
        }

        let y = table_top - (rows_on_page as f32 + 1.0) * ROW_STEP_MM;
        layer.use_text(sale.id.to_string(), 10.0, Mm(COL_ID), Mm(y), &font);
        layer.use_text(
            format!("{} {}", sale.make, sale.model),
            10.0,
            Mm(COL_CAR),
            Mm(y),
            &font,
        );
        layer.use_text(sale.customer_name.clone(), 10.0, Mm(COL_CUSTOMER), Mm(y), &font);
        layer.use_text(
            format!("${:.2}", sale.sale_price),
            10.0,
            Mm(COL_PRICE),
            Mm(y),
            &font,
        );
        layer.use_text(
            sale.sale_date.format("%Y-%m-%d").to_string(),
            10.0,
            Mm(COL_DATE),
            Mm(y),
            &font,
        );
        rows_on_page += 1;
    }

    let total_y = table_top - (rows_on_page as f32 + 2.0) * ROW_STEP_MM;
    layer.use_text(
        format!("Total Sales: ${:.2}", total_amount(sales)),
        14.0,
        Mm(130.0),
        Mm(total_y.max(12.0)),
        &bold,
    );

    let bytes = doc.save_to_bytes()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sales(n: usize) -> Vec<SaleWithCar> {
        let now = Utc::now();
        (0..n)
            .map(|i| SaleWithCar {
                id: i as i32 + 1,
                car_id: 1,
                sale_date: now,
                customer_name: format!("Customer {}", i + 1),
                sale_price: Decimal::new(25_000_00, 2),
                created_at: now,
                updated_at: now,
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
            })
            .collect()
    }

    #[test]
    fn page_count_is_fifteen_rows_per_page() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(15), 1);
        assert_eq!(page_count(16), 2);
        assert_eq!(page_count(45), 3);
        assert_eq!(page_count(46), 4);
    }

    #[test]
    fn total_amount_sums_prices() {
        assert_eq!(total_amount(&[]), Decimal::ZERO);
        let sales = sample_sales(3);
        assert_eq!(total_amount(&sales), Decimal::new(75_000_00, 2));
    }

    #[test]
    fn render_produces_a_pdf_even_with_no_sales() {
        let bytes = render(&[], Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_handles_multiple_pages() {
        let bytes = render(&sample_sales(40), Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // Three pages of content render to a noticeably larger document
        // than the empty report.
        let empty = render(&[], Utc::now()).unwrap();
        assert!(bytes.len() > empty.len());
    }
}
