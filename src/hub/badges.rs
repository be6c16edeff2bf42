pub const SUPER_STAR: &str = "Super Star";
pub const SUPER_STAR_THRESHOLD: u32 = 5;

/// The badge a user should be handed after reaching `events_joined`, if they don't already hold it.
pub fn earned(events_joined: u32, badges: &[String]) -> Option<&'static str> {
    if events_joined >= SUPER_STAR_THRESHOLD && !badges.iter().any(|b| b == SUPER_STAR) {
        Some(SUPER_STAR)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, None)]
    #[case(4, None)]
    #[case(5, Some(SUPER_STAR))]
    #[case(6, Some(SUPER_STAR))]
    fn super_star_from_fifth_join(#[case] joined: u32, #[case] expected: Option<&str>) {
        assert_eq!(earned(joined, &["Newbie".to_owned()]), expected);
    }

    #[test]
    fn super_star_is_not_granted_twice() {
        let badges = vec!["Newbie".to_owned(), SUPER_STAR.to_owned()];
        assert_eq!(earned(7, &badges), None);
    }
}
