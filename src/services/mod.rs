pub mod identifier;
pub mod text_extractor;

pub use identifier::{
    extract_order_number, extract_tracking_number, OrderNumberMatcher, OrderNumberPattern,
};
pub use text_extractor::{extract_text_blocking, is_pdf, PdfTextExtractor, TextExtractor};
