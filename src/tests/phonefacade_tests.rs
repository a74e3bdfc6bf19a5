use std::borrow::Cow;

use super::{
    region_code::RegionCode,
    stubs::{StubDirectory, StubEngine},
};
use crate::{NumberTypeTable, ParseFailure, PhoneFacade, PhoneNumberType};

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_facade() -> PhoneFacade {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneFacade::bundled().expect("Bundled resources should be valid")
}

fn stub_facade(engine: StubEngine) -> PhoneFacade {
    PhoneFacade::new(
        Box::new(StubDirectory::with_keys(&[("1", "us")])),
        Box::new(engine),
        NumberTypeTable::bundled().unwrap(),
    )
}

#[test]
fn facade_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PhoneFacade>();
}

#[test]
fn get_all_countries() {
    let facade = get_facade();
    let countries = facade.get_all_countries();
    assert!(countries.len() > 200);
    assert!(countries.iter().any(|c| c.iso2() == "us"));
}

#[test]
fn get_country_data_by_code() {
    let facade = get_facade();
    let germany = facade.get_country_data_by_code(RegionCode::de()).unwrap();
    assert_eq!(germany.name(), "Germany");
    assert_eq!(germany.dial_code(), "49");
    assert!(facade.get_country_data_by_code(RegionCode::zz()).is_none());
}

#[test]
fn get_country_code_of_number() {
    let facade = get_facade();
    assert_eq!(facade.get_country_code_of_number("+1 650 253 0000"), "us");
    assert_eq!(facade.get_country_code_of_number("+1 204 555 0100"), "ca");
    assert_eq!(facade.get_country_code_of_number("+1 242 555 0100"), "bs");
    assert_eq!(facade.get_country_code_of_number("+44 7400 123456"), "gb");
    assert_eq!(facade.get_country_code_of_number("+7 495 123 4567"), "ru");
    assert_eq!(facade.get_country_code_of_number("+49 30 123456"), "de");
    assert_eq!(facade.get_country_code_of_number("650 253 0000"), "");
}

#[test]
fn parse() {
    let facade = get_facade();
    let parsed = facade.parse("(650) 253-0000", Some(RegionCode::us())).unwrap();
    assert!(parsed.is_valid());
    assert_eq!(parsed.international(), "+16502530000");
    assert_eq!(parsed.calling_code(), 1);

    let err = facade.parse("not a number", Some(RegionCode::us())).unwrap_err();
    assert!(err.is_malformed());

    assert_eq!(
        facade.parse("6502530000", Some(RegionCode::xx())),
        Err(ParseFailure::UnknownRegion(RegionCode::xx().to_owned()))
    );
    assert!(facade.try_parse("6502530000", Some(RegionCode::xx())).is_none());
}

#[test]
fn is_valid_number() {
    let facade = get_facade();
    assert!(facade.is_valid_number("+1 650-253-0000", None));
    assert!(facade.is_valid_number("(650) 253-0000", Some("us")));
    assert!(facade.is_valid_number("+44 20 8765 4321", Some(RegionCode::us())));
    assert!(facade.is_valid_number("020 8765 4321", Some(RegionCode::gb())));

    assert!(!facade.is_valid_number("+1 123 456 7890", None));
    assert!(!facade.is_valid_number("not a number", Some(RegionCode::us())));
    assert!(!facade.is_valid_number("(650) 253-0000", Some(RegionCode::xx())));
    assert!(!facade.is_valid_number("", None));
}

#[test]
fn format_international() {
    let facade = get_facade();
    assert_eq!(
        facade.format_international("(650) 253-0000", Some(RegionCode::us())),
        Some("+16502530000".to_owned())
    );
    assert_eq!(
        facade.format_international("020 8765 4321", Some(RegionCode::gb())),
        Some("+442087654321".to_owned())
    );
    assert_eq!(facade.format_international("+1 123 456 7890", None), None);
}

#[test]
fn format_national() {
    let facade = get_facade();
    assert_eq!(facade.format_national("+16502530000", None), "(650) 253-0000");
    assert_eq!(facade.format_national("+44 20 8765 4321", None), "020 8765 4321");
}

#[test]
fn invalid_number_fallbacks_diverge() {
    let facade = get_facade();
    for (input, region) in [
        ("+1 123 456 7890", None),
        ("not a number", Some(RegionCode::us())),
        ("12", Some(RegionCode::de())),
        ("(650) 253-0000", Some(RegionCode::xx())),
    ] {
        assert!(matches!(facade.format_national(input, region), Cow::Borrowed(s) if s == input));
        assert_eq!(facade.format_international(input, region), None);
    }
}

#[test]
fn format_as_you_type() {
    let facade = get_facade();
    assert_eq!(facade.format("+16502530000", RegionCode::us()), "+1 650-253-0000");
    assert_eq!(facade.format("6502530000", "us"), "(650) 253-0000");
    assert_eq!(facade.format("+4", RegionCode::us()), "+4");
    assert_eq!(facade.format("", RegionCode::us()), "");
}

#[test]
fn format_agrees_with_format_national_on_vanity_numbers() {
    let facade = get_facade();
    let national = facade.format_national("1-800-FLOWERS", Some(RegionCode::us()));
    assert_ne!(national, "1-800-FLOWERS");
    assert_eq!(facade.format("1-800-FLOWERS", RegionCode::us()), national);
}

#[test]
fn format_keeps_partial_numbers_ungrouped() {
    let facade = get_facade();
    assert_eq!(facade.format("650253", RegionCode::us()), "650253");
    assert_eq!(facade.format("+1650253", RegionCode::us()), "+1 650253");
}

#[test]
fn get_number_type() {
    let facade = get_facade();
    assert_eq!(facade.get_number_type("+44 7400 123456", None), Some("MOBILE"));
    assert_eq!(
        facade.get_number_type("020 8765 4321", Some(RegionCode::gb())),
        Some("FIXED_LINE")
    );
    assert!(facade.get_number_type("+1 650 253 0000", None).is_some());
    assert_eq!(facade.get_number_type("not a number", Some(RegionCode::us())), None);
    assert_eq!(facade.get_number_type("+1 123 456 7890", None), None);
}

#[test]
fn operations_are_idempotent() {
    let facade = get_facade();
    let number = "+44 20 8765 4321";
    assert_eq!(facade.parse(number, None), facade.parse(number, None));
    assert_eq!(facade.format_national(number, None), facade.format_national(number, None));
    assert_eq!(facade.format(number, RegionCode::gb()), facade.format(number, RegionCode::gb()));
    assert_eq!(facade.get_number_type(number, None), facade.get_number_type(number, None));
    assert_eq!(facade.get_dial_code(number), facade.get_dial_code(number));
}

#[test]
fn engine_failures_never_escape() {
    let facade = stub_facade(StubEngine::returning(Err(ParseFailure::Engine(
        "metadata exploded".to_owned(),
    ))));
    assert!(facade.try_parse("+15550100", None).is_none());
    assert!(!facade.is_valid_number("+15550100", None));
    assert_eq!(facade.format_international("+15550100", None), None);
    assert_eq!(facade.format_national("+15550100", None), "+15550100");
    assert_eq!(facade.get_number_type("+15550100", None), None);
}

#[test]
fn results_come_from_the_engine() {
    let facade = stub_facade(StubEngine::valid(PhoneNumberType::Mobile.code()));
    assert!(facade.is_valid_number("anything", Some("us")));
    assert_eq!(facade.format_international("anything", None), Some("+15550100".to_owned()));
    assert_eq!(facade.format_national("anything", None), "555-0100");
    assert_eq!(facade.get_number_type("anything", None), Some("MOBILE"));

    let facade = stub_facade(StubEngine::invalid());
    assert!(!facade.is_valid_number("anything", None));
    assert_eq!(facade.format_national("anything", None), "anything");
    assert_eq!(facade.get_number_type("anything", None), None);
}

#[test]
fn format_uses_a_fresh_formatter_per_call() {
    let facade = stub_facade(StubEngine::invalid());
    assert_eq!(facade.format("123", "us"), "[us]123");
    assert_eq!(facade.format("123", "us"), "[us]123");
    assert_eq!(facade.format("4", "gb"), "[gb]4");
}

#[test]
fn builder_accepts_custom_collaborators() {
    let facade = PhoneFacade::builder()
        .directory(StubDirectory::with_keys(&[("99", "xa")]))
        .engine(StubEngine::valid(0))
        .number_types([("LANDLINE".to_owned(), 0)].into_iter().collect())
        .build()
        .unwrap();
    assert_eq!(facade.get_country_code_of_number("+99 123"), "xa");
    assert_eq!(facade.get_number_type("anything", None), Some("LANDLINE"));
    assert_eq!(facade.get_all_countries().len(), 1);
}
