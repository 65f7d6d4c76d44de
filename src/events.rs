/// One card-event campaign: where its listing lives, where its catalog
/// is written, and how many listing pages to visit at most.
#[derive(Debug, Clone)]
pub struct EventConfig {
    pub name: &'static str,
    pub url_base: &'static str,
    pub output_file: &'static str,
    pub max_pages: u32,
}

impl EventConfig {
    /// Listing URL for one page. The site pages from 1 and expects the
    /// tier filter to be present even when unset.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}&tier=null", self.url_base, page)
    }
}

/// The deployed set of events. Page bounds track how deep each listing
/// actually goes; anything past the end stops on its own.
pub const EVENTS: &[EventConfig] = &[
    EventConfig {
        name: "Winter Cards",
        url_base: "https://shoob.gg/card-events/christmas",
        output_file: "winter_cards.json",
        max_pages: 83,
    },
    EventConfig {
        name: "Summer Cards",
        url_base: "https://shoob.gg/card-events/summer",
        output_file: "summer_cards.json",
        max_pages: 99,
    },
    EventConfig {
        name: "Halloween Cards",
        url_base: "https://shoob.gg/card-events/halloween",
        output_file: "halloween_cards.json",
        max_pages: 77,
    },
    EventConfig {
        name: "Chinese New Year Cards",
        url_base: "https://shoob.gg/card-events/chinese-new-year",
        output_file: "chinese_new_year_cards.json",
        max_pages: 39,
    },
    EventConfig {
        name: "Valentines Day Cards",
        url_base: "https://shoob.gg/card-events/valentines-day",
        output_file: "valentines_day_cards.json",
        max_pages: 48,
    },
    EventConfig {
        name: "Easter Cards",
        url_base: "https://shoob.gg/card-events/easter",
        output_file: "easter_cards.json",
        max_pages: 10,
    },
    EventConfig {
        name: "My Hero Academia CCG Cards",
        url_base: "https://shoob.gg/card-events/my-hero-academia-ccg",
        output_file: "my_hero_academia_ccg_cards.json",
        max_pages: 1,
    },
    EventConfig {
        name: "Maid Day Cards",
        url_base: "https://shoob.gg/card-events/maid-day",
        output_file: "maid_day_cards.json",
        max_pages: 16,
    },
    EventConfig {
        name: "Gala Cards",
        url_base: "https://shoob.gg/card-events/gala",
        output_file: "gala_cards.json",
        max_pages: 25,
    },
    EventConfig {
        name: "Sworn Cards",
        url_base: "https://shoob.gg/card-events/sworn",
        output_file: "sworn_cards.json",
        max_pages: 1,
    },
];
