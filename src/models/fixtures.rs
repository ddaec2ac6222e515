//! Static park data rendered by the screens. Read-only.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animal {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub zone: &'static str,
    pub tags: &'static [&'static str],
    pub fact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub crowd: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkEvent {
    pub time: &'static str,
    pub title: &'static str,
    pub zone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketType {
    pub id: &'static str,
    pub label: &'static str,
    pub price_cents: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestTag {
    pub id: &'static str,
    pub label: &'static str,
}

pub const ZONES: &[Zone] = &[
    Zone { id: "savanna", name: "African Savanna", glyph: "🌾", crowd: "Moderate" },
    Zone { id: "polar", name: "Polar Coast", glyph: "🧊", crowd: "Low" },
    Zone { id: "rainforest", name: "Rainforest Dome", glyph: "🌴", crowd: "Busy" },
    Zone { id: "highlands", name: "Asian Highlands", glyph: "⛰", crowd: "Low" },
];

pub const ANIMALS: &[Animal] = &[
    Animal {
        id: "lion",
        name: "Lion",
        glyph: "🦁",
        zone: "savanna",
        tags: &["big-cats", "mammals"],
        fact: "A lion's roar can be heard up to 8 km away.",
    },
    Animal {
        id: "giraffe",
        name: "Giraffe",
        glyph: "🦒",
        zone: "savanna",
        tags: &["mammals"],
        fact: "Giraffes only need 5 to 30 minutes of sleep a day.",
    },
    Animal {
        id: "elephant",
        name: "Elephant",
        glyph: "🐘",
        zone: "savanna",
        tags: &["mammals", "endangered"],
        fact: "Elephants recognise themselves in a mirror.",
    },
    Animal {
        id: "penguin",
        name: "Penguin",
        glyph: "🐧",
        zone: "polar",
        tags: &["birds", "aquatic"],
        fact: "Gentoo penguins swim at up to 36 km/h.",
    },
    Animal {
        id: "sea-lion",
        name: "Sea Lion",
        glyph: "🦭",
        zone: "polar",
        tags: &["mammals", "aquatic"],
        fact: "Sea lions can sleep underwater by holding their breath.",
    },
    Animal {
        id: "gorilla",
        name: "Gorilla",
        glyph: "🦍",
        zone: "rainforest",
        tags: &["primates", "endangered"],
        fact: "Gorillas share about 98% of their DNA with humans.",
    },
    Animal {
        id: "flamingo",
        name: "Flamingo",
        glyph: "🦩",
        zone: "rainforest",
        tags: &["birds"],
        fact: "Flamingos are pink because of the shrimp they eat.",
    },
    Animal {
        id: "tortoise",
        name: "Giant Tortoise",
        glyph: "🐢",
        zone: "rainforest",
        tags: &["reptiles"],
        fact: "Giant tortoises can live for more than 150 years.",
    },
    Animal {
        id: "red-panda",
        name: "Red Panda",
        glyph: "🐼",
        zone: "highlands",
        tags: &["mammals", "endangered"],
        fact: "Red pandas use their tails as blankets.",
    },
    Animal {
        id: "snow-leopard",
        name: "Snow Leopard",
        glyph: "🐆",
        zone: "highlands",
        tags: &["big-cats", "endangered"],
        fact: "Snow leopards cannot roar; they chuff instead.",
    },
];

pub const EVENTS: &[ParkEvent] = &[
    ParkEvent { time: "10:30", title: "Penguin feeding", zone: "polar" },
    ParkEvent { time: "12:00", title: "Keeper talk: Big cats", zone: "savanna" },
    ParkEvent { time: "14:15", title: "Flamingo parade", zone: "rainforest" },
    ParkEvent { time: "15:45", title: "Red panda enrichment", zone: "highlands" },
];

pub const TICKET_TYPES: &[TicketType] = &[
    TicketType { id: "adult", label: "Adult", price_cents: 2995 },
    TicketType { id: "child", label: "Child (3-12)", price_cents: 1995 },
    TicketType { id: "senior", label: "Senior (65+)", price_cents: 2495 },
    TicketType { id: "parking", label: "Parking", price_cents: 1200 },
    TicketType { id: "safari", label: "Safari ride add-on", price_cents: 850 },
];

pub const INTEREST_TAGS: &[InterestTag] = &[
    InterestTag { id: "big-cats", label: "Big cats" },
    InterestTag { id: "birds", label: "Birds" },
    InterestTag { id: "mammals", label: "Mammals" },
    InterestTag { id: "primates", label: "Primates" },
    InterestTag { id: "reptiles", label: "Reptiles" },
    InterestTag { id: "aquatic", label: "Aquatic life" },
    InterestTag { id: "endangered", label: "Endangered species" },
];

pub fn animal(id: &str) -> Option<&'static Animal> {
    ANIMALS.iter().find(|a| a.id == id)
}

pub fn zone(id: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.id == id)
}

pub fn animals_in_zone(zone_id: &str) -> impl Iterator<Item = &'static Animal> + '_ {
    ANIMALS.iter().filter(move |a| a.zone == zone_id)
}

/// Display name for an animal id, falling back to the raw id.
pub fn animal_name(id: &str) -> String {
    animal(id).map(|a| a.name.to_string()).unwrap_or_else(|| id.to_string())
}
