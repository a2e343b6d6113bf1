use tour_domain::RawValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValue)]
#[raw_value(type = i16)]
enum Floor {
    #[raw(-2)]
    Parking,
    Basement,
    Ground,
    #[raw = 10]
    Roof,
}

fn main() {
    assert_eq!(Floor::Parking.raw_value(), -2);
    assert_eq!(Floor::Ground.raw_value(), 0);
    assert_eq!(Floor::from_raw_value(-1), Some(Floor::Basement));
    assert_eq!(Floor::from_raw_value(10), Some(Floor::Roof));
    assert_eq!(Floor::from_raw_value(1), None);
    assert!(Floor::try_from(5_i16).is_err());
}
