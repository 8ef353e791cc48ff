use serde::Serialize;

const KCW_SOURCE: &str = "Source: CMHC 2024 Rental Market Survey (KCW CMA)";
const GUELPH_SOURCE: &str = "Source: CMHC 2024 Rental Market Survey (Guelph CMA)";

/// Average monthly rent by bedroom count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageRents {
    pub one_bedroom: u32,
    pub two_bedroom: u32,
    pub three_bedroom: u32,
}

/// A city the business manages properties in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceArea {
    pub slug: &'static str,
    pub name: &'static str,
    pub average_rents: AverageRents,
    pub source: &'static str,
}

const KCW_RENTS: AverageRents = AverageRents {
    one_bedroom: 1499,
    two_bedroom: 1747,
    three_bedroom: 1789,
};

pub static SERVICE_AREAS: [ServiceArea; 4] = [
    ServiceArea {
        slug: "kitchener",
        name: "Kitchener",
        average_rents: KCW_RENTS,
        source: KCW_SOURCE,
    },
    ServiceArea {
        slug: "waterloo",
        name: "Waterloo",
        average_rents: KCW_RENTS,
        source: KCW_SOURCE,
    },
    ServiceArea {
        slug: "cambridge",
        name: "Cambridge",
        average_rents: KCW_RENTS,
        source: KCW_SOURCE,
    },
    ServiceArea {
        slug: "guelph",
        name: "Guelph",
        average_rents: AverageRents {
            one_bedroom: 1598,
            two_bedroom: 1736,
            three_bedroom: 1935,
        },
        source: GUELPH_SOURCE,
    },
];

pub fn find_area(city: &str) -> Option<&'static ServiceArea> {
    let city = city.trim();
    SERVICE_AREAS
        .iter()
        .find(|area| area.slug.eq_ignore_ascii_case(city) || area.name.eq_ignore_ascii_case(city))
}

/// Content for a city landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityPage {
    pub city: String,
    pub headline: String,
    pub summary: String,
    pub lead_form_anchor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<&'static ServiceArea>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AreaLookupError {
    #[error("city name is required")]
    MissingCity,
}

impl CityPage {
    /// Build a landing page for any city name; known service areas also get
    /// their rent figures attached.
    pub fn for_city(raw: &str) -> Result<Self, AreaLookupError> {
        let city = title_case(raw.trim());
        if city.is_empty() {
            return Err(AreaLookupError::MissingCity);
        }

        Ok(Self {
            headline: format!("{city} Property Management"),
            summary: format!(
                "Professional leasing, responsive maintenance, and transparent reporting in {city}. \
                 Get a free rent analysis to see your expected monthly income."
            ),
            lead_form_anchor: "/#lead",
            area: find_area(&city),
            city,
        })
    }
}

/// Uppercase the first character of every word, leaving the rest untouched.
pub fn title_case(raw: &str) -> String {
    let mut at_word_start = true;
    raw.chars()
        .map(|ch| {
            let is_word = ch.is_alphanumeric() || ch == '_';
            let mapped = if at_word_start && is_word {
                ch.to_uppercase().collect::<String>()
            } else {
                ch.to_string()
            };
            at_word_start = !is_word;
            mapped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("kitchener"), "Kitchener");
        assert_eq!(title_case("niagara-on-the-lake"), "Niagara-On-The-Lake");
        assert_eq!(title_case("new hamburg"), "New Hamburg");
        assert_eq!(title_case("mIXED"), "MIXED");
    }

    #[test]
    fn known_city_includes_rents() {
        let page = CityPage::for_city("guelph").expect("page builds");
        assert_eq!(page.city, "Guelph");
        assert_eq!(page.headline, "Guelph Property Management");
        let area = page.area.expect("guelph is served");
        assert_eq!(area.average_rents.three_bedroom, 1935);
        assert!(area.source.contains("Guelph CMA"));
    }

    #[test]
    fn unknown_city_renders_without_rents() {
        let page = CityPage::for_city("elmira").expect("page builds");
        assert_eq!(page.headline, "Elmira Property Management");
        assert!(page.summary.contains("in Elmira."));
        assert!(page.area.is_none());
    }

    #[test]
    fn blank_city_is_rejected() {
        assert_eq!(CityPage::for_city("  "), Err(AreaLookupError::MissingCity));
    }

    #[test]
    fn kcw_cities_share_cmhc_figures() {
        let kitchener = find_area("Kitchener").expect("served");
        let cambridge = find_area("cambridge").expect("served");
        assert_eq!(kitchener.average_rents, cambridge.average_rents);
        assert_eq!(kitchener.average_rents.one_bedroom, 1499);
    }
}
