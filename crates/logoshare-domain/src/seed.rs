//! Sample catalog used by the local variant until something else is stored.

use crate::{ExternalLink, Logo, LogoColor, LogoStatus};

struct SeedLogo {
    id: &'static str,
    name: &'static str,
    client: &'static str,
    category: &'static str,
    status: LogoStatus,
    image_seed: &'static str,
    fonts: [&'static str; 2],
    colors: [(&'static str, &'static str); 2],
    style: &'static str,
    tags: [&'static str; 3],
    designer: &'static str,
    studio: &'static str,
    licences: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const SEEDS: [SeedLogo; 9] = [
    SeedLogo {
        id: "1",
        name: "NovaTech Solutions",
        client: "Innovate Corp",
        category: "Technology",
        status: LogoStatus::Published,
        image_seed: "novatech",
        fonts: ["Montserrat", "Roboto"],
        colors: [("Primary Blue", "#4A55A2"), ("Accent Gray", "#808080")],
        style: "Tech",
        tags: ["technology", "software", "innovation"],
        designer: "Jane Doe",
        studio: "Innovate Design Labs",
        licences: "Exclusive Commercial Use",
        links: &[
            ("Project Brief", "https://example.com/novatech-brief"),
            ("Moodboard", "https://example.com/novatech-moodboard"),
        ],
    },
    SeedLogo {
        id: "2",
        name: "GreenLeaf Organics",
        client: "Earthly Goods",
        category: "Retail",
        status: LogoStatus::Draft,
        image_seed: "greenleaf",
        fonts: ["Playfair Display", "Lato"],
        colors: [("Forest Green", "#228B22"), ("Warm Brown", "#A52A2A")],
        style: "Vintage",
        tags: ["organic", "nature", "health"],
        designer: "John Smith",
        studio: "Root & Branch",
        licences: "Internal Use Only",
        links: &[],
    },
    SeedLogo {
        id: "3",
        name: "Apex Fitness",
        client: "GymNation",
        category: "Health & Fitness",
        status: LogoStatus::Published,
        image_seed: "apexfit",
        fonts: ["Bebas Neue", "Open Sans"],
        colors: [("Dynamic Red", "#FF0000"), ("Power Black", "#000000")],
        style: "Modern",
        tags: ["fitness", "sport", "energy"],
        designer: "Alice Brown",
        studio: "Peak Performance Design",
        licences: "Standard Commercial License",
        links: &[("Brand Guidelines", "https://example.com/apex-guidelines")],
    },
    SeedLogo {
        id: "4",
        name: "The Cozy Corner Cafe",
        client: "Local Brews",
        category: "Food & Beverage",
        status: LogoStatus::Published,
        image_seed: "cozycafe",
        fonts: ["Lobster", "Merriweather"],
        colors: [("Coffee Brown", "#6F4E37"), ("Cream Orange", "#FFA500")],
        style: "Playful",
        tags: ["cafe", "coffee", "bakery"],
        designer: "Emily White",
        studio: "Sweet Beans Creative",
        licences: "Web & Print License",
        links: &[],
    },
    SeedLogo {
        id: "5",
        name: "Quantum Dynamics",
        client: "Future Systems",
        category: "Science",
        status: LogoStatus::Draft,
        image_seed: "quantumdyn",
        fonts: ["Orbitron", "Exo 2"],
        colors: [("Nebula Purple", "#8A2BE2"), ("Cyber Teal", "#008080")],
        style: "Abstract",
        tags: ["science", "research", "futuristic"],
        designer: "Dr. Quantum",
        studio: "Particle Studios",
        licences: "Research & Development",
        links: &[],
    },
    SeedLogo {
        id: "6",
        name: "Minimaluxe Interiors",
        client: "Design Spaces",
        category: "Design",
        status: LogoStatus::Published,
        image_seed: "minimaluxe",
        fonts: ["Helvetica Neue", "Arial"],
        colors: [("Pure White", "#FFFFFF"), ("Charcoal Gray", "#36454F")],
        style: "Minimalist",
        tags: ["interior", "design", "simple"],
        designer: "Clara Minimalist",
        studio: "Less Is More Inc.",
        licences: "Full Copyright Transfer",
        links: &[],
    },
    SeedLogo {
        id: "7",
        name: "Global Connect",
        client: "Worldwide Inc.",
        category: "Services",
        status: LogoStatus::Published,
        image_seed: "globalconn",
        fonts: ["Ubuntu", "Noto Sans"],
        colors: [("Ocean Blue", "#0077BE"), ("Leaf Green", "#2E8B57")],
        style: "Corporate",
        tags: ["global", "network", "communication"],
        designer: "David Network",
        studio: "Connect Solutions",
        licences: "Global Usage Rights",
        links: &[],
    },
    SeedLogo {
        id: "8",
        name: "Artisan Bakery Co.",
        client: "Artisan Goods",
        category: "Food & Beverage",
        status: LogoStatus::Draft,
        image_seed: "artisanbake",
        fonts: ["Sacramento", "Raleway"],
        colors: [("Pastel Pink", "#FFD1DC"), ("Chocolate Brown", "#7B3F00")],
        style: "Vintage",
        tags: ["bakery", "handmade", "artisan"],
        designer: "Bella Baker",
        studio: "The Flour Pot",
        licences: "Local Business License",
        links: &[],
    },
    SeedLogo {
        id: "9",
        name: "Cyber Secure",
        client: "SecureNet",
        category: "Technology",
        status: LogoStatus::Published,
        image_seed: "cybersec",
        fonts: ["Agency FB", "Consolas"],
        colors: [("Matrix Black", "#000000"), ("Electric Blue", "#00FFFF")],
        style: "Tech",
        tags: ["security", "cyber", "data"],
        designer: "Alex Hacker",
        studio: "Digital Fortress",
        licences: "Software and Digital Use",
        links: &[],
    },
];

impl SeedLogo {
    fn to_logo(&self) -> Logo {
        Logo {
            id: self.id.to_string(),
            name: self.name.to_string(),
            image_url: format!("https://picsum.photos/seed/{}/400/300", self.image_seed),
            fonts_used: self.fonts.iter().map(|f| f.to_string()).collect(),
            colors: self
                .colors
                .iter()
                .map(|(name, hex)| LogoColor::new(*name, *hex))
                .collect(),
            style: Some(self.style.to_string()),
            client: Some(self.client.to_string()),
            category_name: self.category.to_string(),
            status: self.status,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            designer: Some(self.designer.to_string()),
            studio: Some(self.studio.to_string()),
            licences: Some(self.licences.to_string()),
            description: None,
            external_links: self
                .links
                .iter()
                .map(|(name, url)| ExternalLink::new(*name, *url))
                .collect(),
            created_at: None,
        }
    }
}

pub fn sample_logos() -> Vec<Logo> {
    SEEDS.iter().map(SeedLogo::to_logo).collect()
}
