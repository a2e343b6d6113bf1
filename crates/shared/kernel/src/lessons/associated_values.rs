use crate::error::TourError;
use std::io::{self, Write};
use tour_domain::Barcode;

pub(super) fn run<W: Write>(out: &mut W) -> Result<(), TourError> {
    let mut product_barcode = Barcode::Upc(8, 85909, 51226, 3);
    describe(out, &product_barcode)?;

    product_barcode = Barcode::qr_code("ABCDEFGHIJKLMNOP");
    describe(out, &product_barcode)?;

    Ok(())
}

fn describe<W: Write>(out: &mut W, barcode: &Barcode) -> io::Result<()> {
    match barcode {
        Barcode::Upc(number_system, manufacturer, product, check) => {
            writeln!(out, "UPC value: {number_system}-{manufacturer} {product}-{check}")
        },
        Barcode::QrCode(code) => writeln!(out, "QRCode: {code}"),
    }
}
