//! # PDF Documents
//!
//! Renders the quotation handed to clients and the purchase order for a
//! confirmed training. Both are A4 documents set in the built-in Helvetica
//! faces, so no font files ship with the server.
//!
//! ## Quotation Layout
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            <Company name>                    │
//! │              QUOTATION                       │
//! │  Quotation #: QT-…        Date: 2024-05-01   │
//! │ ──────────────────────────────────────────── │
//! │  Client Details                              │
//! │  Company / Contact / Email / Phone           │
//! │ ──────────────────────────────────────────── │
//! │  #  Item              Qty   Unit     Total   │
//! │  1  Trainer Cost ...    3   ...      ...     │
//! │ ──────────────────────────────────────────── │
//! │                    Subtotal        ...       │
//! │                    GST (18%)       ...       │
//! │                    Total           ...       │
//! │  Additional Notes                            │
//! │  Terms and Conditions (1..3)                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Rows continue on a new page when the current one is full.

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use coursedesk_core::{
    totalize_items, DailyRates, Money, QuantityPolicy, Quotation, TaxCalculator, Training,
    CURRENCY_SYMBOL,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;
const TOP: f32 = 282.0;
const BOTTOM: f32 = 20.0;

/// Longest item description printed before it is cut off.
const MAX_DESCRIPTION_CHARS: usize = 48;

/// Fixed terms printed at the foot of every quotation.
pub const QUOTATION_TERMS: [&str; 3] = [
    "1. This quotation is valid for 30 days from the date of issue.",
    "2. Payment terms: 50% advance payment required to confirm the booking.",
    "3. Cancellation policy: Cancellations made less than 7 days before the training date will incur a 25% fee.",
];

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

// =============================================================================
// Page Writer
// =============================================================================

/// Top-down text cursor over a growing document.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, PdfError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Render(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Render(e.to_string()))?;

        Ok(PageWriter {
            doc,
            layer,
            regular,
            bold,
            y: TOP,
        })
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    /// Roughly centres `text` using an average Helvetica glyph width.
    fn centered(&self, text: &str, size: f32, bold: bool) {
        let approx_width = text.chars().count() as f32 * size * 0.18;
        let x = ((PAGE_WIDTH - approx_width) / 2.0).max(MARGIN_LEFT);
        self.text(text, size, x, bold);
    }

    fn down(&mut self, mm: f32) {
        self.y -= mm;
        if self.y < BOTTOM {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP;
    }

    fn rule(&mut self) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.y)), false),
                (Point::new(Mm(MARGIN_RIGHT), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    fn heading(&mut self, text: &str) {
        self.text(text, 13.0, MARGIN_LEFT, true);
        self.down(7.0);
    }

    fn field(&mut self, label: &str, value: &str) {
        self.text(&format!("{}: {}", label, value), 11.0, MARGIN_LEFT, false);
        self.down(5.5);
    }

    fn finish(self) -> Result<Vec<u8>, PdfError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| PdfError::Render(e.to_string()))
    }
}

/// Amounts as printed; the rupee sign is outside the built-in fonts' charset.
fn amount(money: Money) -> String {
    money.to_string().replacen(CURRENCY_SYMBOL, "Rs. ", 1)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// Renders the client-facing quotation.
pub fn render_quotation(
    quotation: &Quotation,
    company_name: &str,
    tax: &TaxCalculator,
) -> Result<Vec<u8>, PdfError> {
    let mut w = PageWriter::new(&format!("Quotation {}", quotation.quotation_number))?;

    w.centered(company_name, 22.0, true);
    w.down(10.0);
    w.centered("QUOTATION", 16.0, true);
    w.down(12.0);

    let date = quotation
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| quotation.created_at.date_naive().to_string());
    let number = if quotation.quotation_number.is_empty() {
        quotation.id.as_str()
    } else {
        quotation.quotation_number.as_str()
    };
    w.text(&format!("Quotation #: {}", number), 11.0, MARGIN_LEFT, false);
    w.text(&format!("Date: {}", date), 11.0, 140.0, false);
    w.down(4.0);
    w.rule();
    w.down(8.0);

    w.heading("Client Details");
    w.field("Company", or_dash(&quotation.client_name));
    w.field("Contact Person", or_dash(&quotation.contact_person));
    w.field("Email", or_dash(&quotation.email));
    w.field("Phone", or_dash(&quotation.phone));
    w.down(4.0);

    // Items
    let columns = [
        (MARGIN_LEFT, "#"),
        (23.0, "Item"),
        (120.0, "Qty"),
        (138.0, "Unit Cost"),
        (170.0, "Total"),
    ];
    w.heading("Items");
    for (x, label) in columns {
        w.text(label, 10.0, x, true);
    }
    w.down(2.5);
    w.rule();
    w.down(6.0);

    let totals = totalize_items(&quotation.items, QuantityPolicy::Quotation);
    let rows = quotation.items.iter().zip(&totals.per_item_totals);
    for (idx, (item, line_total)) in rows.enumerate() {
        let label = if item.description.trim().is_empty() {
            item.category.label().to_string()
        } else {
            format!("{} - {}", item.category.label(), item.description)
        };
        let qty = item.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string());
        let unit = item.unit_cost.map(amount).unwrap_or_else(|| "-".to_string());

        w.text(&(idx + 1).to_string(), 10.0, MARGIN_LEFT, false);
        w.text(&truncate(&label, MAX_DESCRIPTION_CHARS), 10.0, 23.0, false);
        w.text(&qty, 10.0, 120.0, false);
        w.text(&unit, 10.0, 138.0, false);
        w.text(&amount(*line_total), 10.0, 170.0, true);
        w.down(6.0);
    }

    w.rule();
    w.down(8.0);
    w.text("Subtotal", 11.0, 130.0, false);
    w.text(&amount(quotation.subtotal), 11.0, 170.0, false);
    w.down(6.0);
    w.text(&format!("GST ({})", tax.rate()), 11.0, 130.0, false);
    w.text(&amount(quotation.gst), 11.0, 170.0, false);
    w.down(6.0);
    w.text("Total", 12.0, 130.0, true);
    w.text(&amount(quotation.total), 12.0, 170.0, true);
    w.down(12.0);

    if let Some(notes) = quotation.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        w.heading("Additional Notes");
        for line in notes.lines() {
            w.text(line, 10.0, MARGIN_LEFT, false);
            w.down(5.0);
        }
        w.down(5.0);
    }

    w.heading("Terms and Conditions");
    for term in QUOTATION_TERMS {
        w.text(term, 9.0, MARGIN_LEFT, false);
        w.down(5.0);
    }

    w.finish()
}

// =============================================================================
// Training Purchase Order
// =============================================================================

/// Renders the purchase order for a confirmed training.
pub fn render_training_po(training: &Training, company_name: &str) -> Result<Vec<u8>, PdfError> {
    let mut w = PageWriter::new(&format!("Purchase Order {}", training.id))?;

    w.centered(company_name, 18.0, true);
    w.down(10.0);
    w.centered("Purchase Order", 20.0, true);
    w.down(14.0);

    w.field("Training ID", &training.id);
    w.field("Client", or_dash(&training.client_name));
    w.field("Training Type", or_dash(&training.training_type));
    w.field(
        "Dates",
        &format!("{} to {}", training.start_date, training.end_date),
    );
    w.field("Trainer", or_dash(&training.trainer));
    w.down(6.0);

    rates_section(&mut w, "Cost Details (per day)", &training.costs);
    rates_section(&mut w, "Sales Price (per day)", &training.prices);

    w.finish()
}

fn rates_section(w: &mut PageWriter, title: &str, rates: &DailyRates) {
    w.heading(title);
    w.field("Trainer", &amount(rates.trainer_per_day));
    w.field("Lab", &amount(rates.lab_per_day));
    w.field("Platform", &amount(rates.platform_per_day));
    w.down(6.0);
}
