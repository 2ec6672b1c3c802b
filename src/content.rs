//! Static page copy: slides, fleet, FAQ and navigation.

/// A hero slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

/// A boat in the charter fleet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vessel {
    pub name: &'static str,
    pub kind: &'static str,
    pub guests: u8,
    pub daily_rate: u32,
    pub image: &'static str,
}

/// A frequently asked question
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A navbar link to a page section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Sail Beyond the Harbor",
        subtitle: "Skippered and bareboat charters along the coast",
        image: "/assets/hero-1.jpg",
    },
    HeroSlide {
        title: "Quiet Coves, Clear Water",
        subtitle: "Anchor where the tour boats can't",
        image: "/assets/hero-2.jpg",
    },
    HeroSlide {
        title: "Sunset Cruises Every Evening",
        subtitle: "Two hours, small groups, local wine",
        image: "/assets/hero-3.jpg",
    },
];

/// The first row is shown while the grid is collapsed
pub const FLEET: &[Vessel] = &[
    Vessel { name: "Tern", kind: "Sailing yacht, 38 ft", guests: 6, daily_rate: 420, image: "/assets/fleet-tern.jpg" },
    Vessel { name: "Kestrel", kind: "Catamaran, 42 ft", guests: 10, daily_rate: 690, image: "/assets/fleet-kestrel.jpg" },
    Vessel { name: "Osprey", kind: "Motor yacht, 45 ft", guests: 8, daily_rate: 880, image: "/assets/fleet-osprey.jpg" },
    Vessel { name: "Petrel", kind: "Day sailer, 24 ft", guests: 4, daily_rate: 190, image: "/assets/fleet-petrel.jpg" },
    Vessel { name: "Gannet", kind: "Sailing yacht, 46 ft", guests: 8, daily_rate: 610, image: "/assets/fleet-gannet.jpg" },
    Vessel { name: "Skua", kind: "RIB, 28 ft", guests: 10, daily_rate: 350, image: "/assets/fleet-skua.jpg" },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need a sailing licence?",
        answer: "Only for bareboat charters. Every boat can be booked with one of our skippers instead.",
    },
    FaqEntry {
        question: "What happens if the weather turns?",
        answer: "If the harbor master advises against sailing we move your booking or refund it in full.",
    },
    FaqEntry {
        question: "Can we bring food and drinks?",
        answer: "Yes. Every boat has a cool box, and the catamarans have a galley.",
    },
    FaqEntry {
        question: "How far in advance should we book?",
        answer: "Two to three weeks for summer weekends. Weekday sunset cruises can often be booked the same day.",
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Fleet", href: "#fleet" },
    NavLink { label: "FAQ", href: "#faq" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Ids of the page sections anchors may point at
pub const SECTION_IDS: &[&str] = &["home", "fleet", "faq", "contact"];

/// Whether the page has a section with this id
pub fn section_exists(id: &str) -> bool {
    SECTION_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harborline_core::AnchorTarget;

    #[test]
    fn nav_links_point_at_sections() {
        for link in NAV_LINKS {
            let target = AnchorTarget::parse(link.href).unwrap();
            assert!(section_exists(target.id()), "{} has no section", link.href);
        }
    }

    #[test]
    fn hero_has_slides() {
        assert!(!HERO_SLIDES.is_empty());
    }
}
