//! End-to-end flows from inbound requests to rendered matrices.

use quickcode_core::config::{EncoderConfig, ErrorCorrection, PhoneStyle, TitleCatalog};
use quickcode_service::barcode::{BLACK, CharacterSet, QrCodeWriter, WHITE};
use quickcode_service::encode::phone::formatter_for;
use quickcode_service::encode::resource::MemoryResourceReader;
use quickcode_service::encode::{Assembler, ContactFields, FieldRequest, ShareRequest};
use quickcode_service::encoder::QrCodeEncoder;
use quickcode_service::error::EncodeError;

fn encoder_config() -> EncoderConfig {
    EncoderConfig {
        dimension: 400,
        error_correction: ErrorCorrection::M,
        margin: 2,
        max_dimension: 4096,
    }
}

#[test_log::test]
fn contact_fields_render_to_pixels() {
    let titles = TitleCatalog::default();
    let phone = formatter_for(PhoneStyle::Nanp);
    let assembler = Assembler::new(phone.as_ref(), &titles);

    let fields: ContactFields = [
        ("name", "J. Doe"),
        ("phone", "4155551234"),
        ("secondary_phone", "415 555 1234"),
        ("URL_KEY", "https://example.com/~jdoe"),
    ]
    .into_iter()
    .collect();
    let request = FieldRequest {
        content_type: Some("CONTACT_TYPE".into()),
        fields: Some(fields),
        ..FieldRequest::default()
    };

    let encoder = QrCodeEncoder::from_fields(&request, &assembler).unwrap();

    assert_eq!(
        encoder.contents(),
        "MECARD:N:J. Doe;TEL:4155551234;TEL:415 555 1234;URL:https://example.com/~jdoe;;"
    );
    assert_eq!(
        encoder.display_contents(),
        "J. Doe\n415-555-1234\n415-555-1234\nhttps://example.com/~jdoe"
    );
    assert_eq!(encoder.title(), "Contact");

    let config = encoder_config();
    let matrix = encoder
        .encode_as_matrix(&QrCodeWriter, config.dimension, config.dimension, &config)
        .unwrap();
    let pixels = matrix.to_argb();

    assert_eq!(pixels.len(), 400 * 400);
    assert!(pixels.iter().all(|p| *p == BLACK || *p == WHITE));
    assert_eq!(pixels[0], WHITE);
}

#[test_log::test]
fn shared_mecard_round_trips_into_payload() {
    let titles = TitleCatalog::default();
    let phone = formatter_for(PhoneStyle::PassThrough);
    let assembler = Assembler::new(phone.as_ref(), &titles);

    let reader = MemoryResourceReader::new().with(
        "shared",
        b"MECARD:N:Doe,Jane;TEL:555-1234;EMAIL:jane@example.com;URL:http\\://x.com;;".to_vec(),
    );
    let request = ShareRequest {
        stream: Some("shared".into()),
        stream_type: Some("MECARD".into()),
        ..ShareRequest::default()
    };

    let encoder = QrCodeEncoder::from_share(&request, &reader, &assembler).unwrap();

    assert_eq!(
        encoder.contents(),
        "MECARD:N:Jane Doe;TEL:555-1234;EMAIL:jane@example.com;URL:http://x.com;;"
    );
    assert_eq!(
        encoder.display_contents(),
        "Jane Doe\n555-1234\njane@example.com\nhttp://x.com"
    );
}

#[test]
fn shared_vcard_with_unicode_declares_utf8() {
    let titles = TitleCatalog::default();
    let phone = formatter_for(PhoneStyle::PassThrough);
    let assembler = Assembler::new(phone.as_ref(), &titles);

    let card = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jürgen Łukasz\r\nEMAIL:j@x.com\r\nEND:VCARD\r\n";
    let reader = MemoryResourceReader::new().with("card", card.as_bytes().to_vec());
    let request = ShareRequest {
        stream: Some("card".into()),
        ..ShareRequest::default()
    };

    let encoder = QrCodeEncoder::from_share(&request, &reader, &assembler).unwrap();

    assert_eq!(
        encoder.contents(),
        "MECARD:N:Jürgen Łukasz;EMAIL:j@x.com;;"
    );
    assert_eq!(
        encoder.character_set().map(CharacterSet::as_str),
        Some("UTF-8")
    );
    assert!(
        encoder
            .encode_as_matrix(&QrCodeWriter, 100, 100, &encoder_config())
            .is_ok()
    );
}

#[test]
fn vcard_without_mecard_fields_is_no_result() {
    let titles = TitleCatalog::default();
    let phone = formatter_for(PhoneStyle::PassThrough);
    let assembler = Assembler::new(phone.as_ref(), &titles);

    let card = "BEGIN:VCARD\r\nVERSION:3.0\r\nORG:Acme\r\nEND:VCARD\r\n";
    let reader = MemoryResourceReader::new().with("card", card.as_bytes().to_vec());
    let request = ShareRequest {
        stream: Some("card".into()),
        stream_type: Some("text/vcard".into()),
        ..ShareRequest::default()
    };

    let err = QrCodeEncoder::from_share(&request, &reader, &assembler).unwrap_err();

    assert!(matches!(err, EncodeError::EmptyAssembly));
}

#[test]
fn shared_text_uses_subject_as_display() {
    let titles = TitleCatalog::default();
    let phone = formatter_for(PhoneStyle::Nanp);
    let assembler = Assembler::new(phone.as_ref(), &titles);

    let request = ShareRequest {
        text: Some("https://example.com/article".into()),
        subject: Some("Interesting article".into()),
        ..ShareRequest::default()
    };

    let encoder =
        QrCodeEncoder::from_share(&request, &MemoryResourceReader::new(), &assembler).unwrap();

    assert_eq!(encoder.contents(), "https://example.com/article");
    assert_eq!(encoder.display_contents(), "Interesting article");
    assert_eq!(encoder.title(), "Text");
}
