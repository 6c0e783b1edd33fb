// crates/heritage-core/src/model/site.rs
use super::lenient;
use super::value::FreeMap;
use serde::{Deserialize, Serialize};

/// One heritage site, as stored in a single record file.
///
/// Only `id` is mandatory. Every other group is optional and missing data is
/// simply "not provided". Lists are `Option<Vec<_>>` so an explicit empty list
/// stays distinguishable from an absent one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tagline: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub site_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub era: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_built: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub unesco_world_heritage_site: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub unesco_tentative_list: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub managed_by: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Description>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Location>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<Contact>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub visiting_information: Option<VisitingInformation>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub features: Option<Features>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub images: Option<Images>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub nearby_attractions: Option<Vec<NearbyAttraction>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub resources: Option<FreeMap>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub suitable_for: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub weather_dependent: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub indoor_activities: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub outdoor_activities: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub film_locations: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub archaeological_information: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub heritage: Option<FreeMap>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub interesting_facts: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub visit_planning: Option<FreeMap>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_information: Option<FreeMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub short: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub full: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub history: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub significance: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<Address>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub coordinates: Option<Coordinates>,
    /// Free-form "how to get there" notes keyed by mode (`byCar`, `byBus`, ...).
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub directions: Option<FreeMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub street: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub town: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub county: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub postcode: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_media: Option<FreeMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitingInformation {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_times: Option<OpeningTimes>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub admission_prices: Option<FreeMap>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub tour_options: Option<Vec<TourOption>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_visit_duration: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub busy_periods: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub advice_for_visitors: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningTimes {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub standard: Option<StandardHours>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub seasonal: Option<Vec<SeasonalHours>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub parklands: Option<FreeMap>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub special_closures: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardHours {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub days: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_admission: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalHours {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub season: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub days: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hours: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_admission: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_guided_tour: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourOption {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tour_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub included: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub booking_required: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub seasonal: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub admission: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlights: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub facilities: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessibility: Option<Accessibility>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheelchair_accessible: Option<WheelchairAccess>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessibility_level: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub restrictions: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessibility_notes: Option<String>,
}

/// Records state wheelchair access either as a flag or as a short note
/// (`"Partial"`, `"Ground floor only"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WheelchairAccess {
    Flag(bool),
    Note(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub hero_image: Option<Image>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub gallery: Option<Vec<Image>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub caption: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NearbyAttraction {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub attraction_type: Option<String>,
}

// -----------------------------------------------------------------------------
// ACCESSORS
// -----------------------------------------------------------------------------

/// `Some(s)` only when `s` is present and not blank.
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl Site {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagline(&self) -> Option<&str> {
        non_blank(self.tagline.as_ref())
    }

    pub fn era(&self) -> Option<&str> {
        non_blank(self.era.as_ref())
    }

    pub fn site_type(&self) -> Option<&str> {
        non_blank(self.site_type.as_ref())
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn categories(&self) -> &[String] {
        self.categories.as_deref().unwrap_or(&[])
    }

    pub fn suitable_for(&self) -> &[String] {
        self.suitable_for.as_deref().unwrap_or(&[])
    }

    pub fn highlights(&self) -> &[String] {
        self.features
            .as_ref()
            .and_then(|f| f.highlights.as_deref())
            .unwrap_or(&[])
    }

    pub fn address(&self) -> Option<&Address> {
        self.location.as_ref().and_then(|l| l.address.as_ref())
    }

    pub fn county(&self) -> Option<&str> {
        self.address().and_then(|a| non_blank(a.county.as_ref()))
    }

    pub fn region(&self) -> Option<&str> {
        self.address().and_then(|a| non_blank(a.region.as_ref()))
    }

    pub fn hero_image(&self) -> Option<&Image> {
        self.images.as_ref().and_then(|i| i.hero_image.as_ref())
    }

    pub fn gallery(&self) -> &[Image] {
        self.images
            .as_ref()
            .and_then(|i| i.gallery.as_deref())
            .unwrap_or(&[])
    }

    /// URL of the image that represents the site: the hero image, else the
    /// first gallery image. Images without a usable `url` are passed over.
    pub fn hero_image_url(&self) -> Option<&str> {
        self.hero_image()
            .into_iter()
            .chain(self.gallery())
            .find_map(|img| non_blank(Some(&img.url)))
    }

    pub fn opening_times(&self) -> Option<&OpeningTimes> {
        self.visiting_information
            .as_ref()
            .and_then(|v| v.opening_times.as_ref())
    }

    pub fn tour_options(&self) -> &[TourOption] {
        self.visiting_information
            .as_ref()
            .and_then(|v| v.tour_options.as_deref())
            .unwrap_or(&[])
    }

    /// Short place name for listings: county, then region, then town.
    ///
    /// Falls back to `"Ireland"` when the record has no address at all.
    pub fn location_label(&self) -> &str {
        self.address()
            .and_then(|a| {
                a.county
                    .as_deref()
                    .or(a.region.as_deref())
                    .or(a.town.as_deref())
            })
            .unwrap_or("Ireland")
    }

    /// `"Name: Tagline"`, or just the name when there is no tagline.
    pub fn headline(&self) -> String {
        match self.tagline() {
            Some(tagline) => format!("{}: {}", self.name, tagline),
            None => self.name.clone(),
        }
    }

    /// Best available blurb: history, significance, short, then the first
    /// 160 characters of the full description.
    pub fn summary(&self) -> Option<String> {
        let d = self.description.as_ref()?;
        d.history
            .clone()
            .or_else(|| d.significance.clone())
            .or_else(|| d.short.clone())
            .or_else(|| d.full.as_ref().map(|f| f.chars().take(160).collect()))
    }
}
