use serde::{Deserialize, Serialize};
use std::fmt;

/// A product code in one of two formats, each carrying its own associated values.
///
/// Matching binds the payload to names that live only inside the arm:
///
/// ```
/// use tour_domain::Barcode;
///
/// let code = Barcode::QrCode("2dstring".to_owned());
/// let text = match &code {
///     Barcode::Upc(a, b, c, d) => format!("{a}{b}{c}{d}"),
///     Barcode::QrCode(code) => code.clone(),
/// };
/// assert_eq!(text, "2dstring");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Barcode {
    /// Number system, manufacturer, product, and check digit.
    Upc(i32, i32, i32, i32),
    QrCode(String),
}

impl Barcode {
    pub fn qr_code(code: impl Into<String>) -> Self {
        Self::QrCode(code.into())
    }

    /// All four UPC values as a single group, if this is a UPC barcode.
    #[must_use]
    pub const fn upc_parts(&self) -> Option<(i32, i32, i32, i32)> {
        match *self {
            Self::Upc(number_system, manufacturer, product, check) => {
                Some((number_system, manufacturer, product, check))
            },
            Self::QrCode(_) => None,
        }
    }

    #[must_use]
    pub fn qr_code_text(&self) -> Option<&str> {
        match self {
            Self::Upc(..) => None,
            Self::QrCode(code) => Some(code),
        }
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upc(number_system, manufacturer, product, check) => {
                write!(f, "UPC value: {number_system}-{manufacturer} {product}-{check}")
            },
            Self::QrCode(code) => write!(f, "QRCode: {code}"),
        }
    }
}
