//! Japanese labels for weather conditions and city titles.

use std::borrow::Cow;

const CONDITIONS: &[(&str, &str)] = &[
    ("Clear", "晴れ"),
    ("Clouds", "曇り"),
    ("Rain", "雨"),
    ("Drizzle", "小雨"),
    ("Thunderstorm", "雷雨"),
    ("Snow", "雪"),
    ("Mist", "霧"),
    ("Fog", "霧"),
    ("Haze", "霞"),
];

const CITY_TITLES: &[(&str, &str)] = &[
    ("Sapporo", "札幌"),
    ("Sendai", "仙台"),
    ("Tokyo", "東京"),
    ("Nagoya", "名古屋"),
    ("Osaka", "大阪"),
    ("Hiroshima", "広島"),
    ("Fukuoka", "福岡"),
];

/// Translate a condition keyword; keywords without a label pass through.
pub fn translate_condition(keyword: &str) -> Cow<'_, str> {
    lookup(CONDITIONS, keyword)
}

/// Japanese display title for an English city name, or the name itself.
pub fn city_title(city: &str) -> Cow<'_, str> {
    lookup(CITY_TITLES, city)
}

fn lookup<'a>(table: &[(&str, &'static str)], key: &'a str) -> Cow<'a, str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| Cow::Borrowed(*v))
        .unwrap_or(Cow::Borrowed(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_are_translated() {
        assert_eq!(translate_condition("Clear"), "晴れ");
        assert_eq!(translate_condition("Thunderstorm"), "雷雨");
        assert_eq!(translate_condition("Fog"), translate_condition("Mist"));
    }

    #[test]
    fn unknown_condition_passes_through() {
        assert_eq!(translate_condition("Tornado"), "Tornado");
        assert_eq!(translate_condition("clear"), "clear");
    }

    #[test]
    fn city_titles() {
        assert_eq!(city_title("Tokyo"), "東京");
        assert_eq!(city_title("Hiroshima"), "広島");
        assert_eq!(city_title("Kyoto"), "Kyoto");
    }
}
