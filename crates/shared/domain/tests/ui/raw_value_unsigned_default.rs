use tour_domain::RawValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValue)]
#[raw_value(type = u8)]
enum Priority {
    Low,
    Normal,
    High,
}

fn main() {
    assert_eq!(Priority::Low.raw_value(), 0);
    assert_eq!(Priority::High.raw_value(), 2);
    assert_eq!(Priority::try_from(1_u8), Ok(Priority::Normal));
}
