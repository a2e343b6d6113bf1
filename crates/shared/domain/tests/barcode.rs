use tour_domain::Barcode;

#[test]
fn upc_payload_is_extracted_unchanged_and_in_order() {
    let product_barcode = Barcode::Upc(8, 12345, 67890, 1);

    match product_barcode {
        Barcode::Upc(a, b, c, d) => {
            assert_eq!(a, 8);
            assert_eq!(b, 12345);
            assert_eq!(c, 67890);
            assert_eq!(d, 1);
        },
        Barcode::QrCode(_) => panic!("UPC barcode matched the QR code arm"),
    }
}

#[test]
fn upc_payload_binds_as_a_group() {
    let product_barcode = Barcode::Upc(8, 85909, 51226, 3);

    assert_eq!(product_barcode.upc_parts(), Some((8, 85909, 51226, 3)));

    let grouped = match &product_barcode {
        upc @ Barcode::Upc(..) => upc.upc_parts(),
        Barcode::QrCode(_) => None,
    };
    assert_eq!(grouped, Some((8, 85909, 51226, 3)));
}

#[test]
fn qr_code_selects_the_text_arm() {
    let product_barcode = Barcode::qr_code("2dstring");

    let code = match product_barcode {
        Barcode::Upc(..) => panic!("QR code matched the UPC arm"),
        Barcode::QrCode(code) => code,
    };

    assert_eq!(code, "2dstring");
}

#[test]
fn equality_compares_variant_and_payload() {
    assert_eq!(Barcode::Upc(8, 85909, 51226, 3), Barcode::Upc(8, 85909, 51226, 3));
    assert_ne!(Barcode::Upc(8, 85909, 51226, 3), Barcode::Upc(8, 85909, 51226, 4));
    assert_ne!(Barcode::qr_code("8"), Barcode::Upc(8, 0, 0, 0));
    assert_eq!(Barcode::qr_code("ABC"), Barcode::QrCode("ABC".to_owned()));
}

#[test]
fn display_uses_message_templates() {
    assert_eq!(Barcode::Upc(8, 85909, 51226, 3).to_string(), "UPC value: 8-85909 51226-3");
    assert_eq!(Barcode::qr_code("ABCDEFGHIJKLMNOP").to_string(), "QRCode: ABCDEFGHIJKLMNOP");
}

#[test]
fn accessors_return_none_for_the_other_variant() {
    assert_eq!(Barcode::qr_code("x").upc_parts(), None);
    assert_eq!(Barcode::Upc(1, 2, 3, 4).qr_code_text(), None);
    assert_eq!(Barcode::qr_code("x").qr_code_text(), Some("x"));
}

#[test]
fn serde_keeps_the_payload() {
    let json = serde_json::to_value(Barcode::Upc(8, 85909, 51226, 3)).expect("serialize");
    assert_eq!(json, serde_json::json!({ "upc": [8, 85909, 51226, 3] }));

    let back: Barcode = serde_json::from_value(serde_json::json!({ "qrCode": "2dstring" }))
        .expect("deserialize");
    assert_eq!(back, Barcode::qr_code("2dstring"));
}
