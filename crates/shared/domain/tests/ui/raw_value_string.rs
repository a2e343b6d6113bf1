use tour_domain::RawValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValue)]
#[raw_value(type = &'static str)]
enum Season {
    Spring,
    #[raw = "summertime"]
    Summer,
    EarlyAutumn,
}

fn main() {
    assert_eq!(Season::Spring.raw_value(), "spring");
    assert_eq!(Season::Summer.raw_value(), "summertime");
    assert_eq!(Season::EarlyAutumn.raw_value(), "earlyAutumn");

    let owned = String::from("earlyAutumn");
    assert_eq!(Season::try_from(owned.as_str()), Ok(Season::EarlyAutumn));
    assert_eq!(Season::from_raw_value("summer"), None);
}
