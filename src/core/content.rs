// Static page content. Everything here is immutable and rendered once.

pub const LOGO_URL: &str =
    "https://images.unsplash.com/photo-1549413280-48f869911e86?auto=format&fit=crop&w=800&q=80";
pub const SITE_TITLE: &str = "SAHRA ALI HERSI / MAMA HERSI";
pub const TAGLINE: &str = "THE ROOT OF THE LEGACY. THE HEART OF THE WORK.";
pub const HERO_QUOTE: &str = "\"From Bungoma to East Africa: A story of vision, courage, and entrepreneurship. Honoring the life of the Iron Lady and the foundation of a dynasty.\"";
pub const ADDRESS: &str = "Cheptais, Moi Ave, Bungoma, Kenya";
pub const ENTITY: &str = "New Nyanza Wholesalers Ltd";
pub const ARCHIVE_EMAIL: &str = "archive@hersi-legacy.com";
pub const COPYRIGHT: &str = "© 2025 Sahra Ali Hersi Archive. All rights reserved.";
pub const MAP_TITLE: &str = "Bungoma Town Center Location";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d15959.03457161614!2d34.550571!3d-0.563507!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x178129219089989b%3A0x6a0c0e7b9b9b9b9b!2sBungoma%2C+Kenya!5e0!3m2!1sen!2ske!4v1700000000000!5m2!1sen!2ske";

pub const LEGACY_INTRO: &str = "\"The legacy of Mama Hersi and the New Nyanza household was not a singular path but a constellation of callings. Built on a foundation of integrity, discipline, and entrepreneurial grit, her values found unique expression in the lives of her children. Together, they expanded the family's influence from the heart of Bungoma into the halls of government, the boardrooms of industry, and the fabric of community, each embodying a vital pillar of a remarkable heritage.\"";
pub const INSTITUTION_INTRO: &str = "More than a business, New Nyanza Wholesalers Ltd is a living monument to discipline, continuity, and matriarchal leadership. Founded by Sahra Ali Hersi, it has been a cornerstone of Bungoma's economy for decades.";
pub const INSTITUTION_QUOTE: &str =
    "\"She is not a memory. She is not retired. She is present. She is New Nyanza.\"";
pub const CONTACT_INTRO: &str = "This is a living archive. We welcome contributions from family, friends, and community members who have been touched by Mama Hersi's story.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", anchor: "hero" },
    NavLink { label: "Biography", anchor: "story" },
    NavLink { label: "Legacy", anchor: "legacy" },
    NavLink { label: "Institution", anchor: "institution" },
    NavLink { label: "Timeline", anchor: "timeline" },
    NavLink { label: "Contact", anchor: "contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct Chapter {
    pub title: &'static str,
    pub period: &'static str,
    pub body: &'static str,
    pub highlight: &'static str,
    pub image_url: &'static str,
}

pub const CHAPTERS: [Chapter; 8] = [
    Chapter {
        title: "Roots & Formation",
        period: "Pre-1958",
        body: "The origin story establishes the foundational values of the Hersi name. Her early upbringing and influences shaped the woman who would become a queen of commerce, instilling the courage needed for the journeys ahead.",
        highlight: "Establishing origin story and foundational values.",
        image_url: "https://images.unsplash.com/photo-1516026672322-bc52d61a55d5?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "The Pioneer Arrives",
        period: "1958 Migration",
        body: "The pivotal move from Nakuru to Bungoma. In a quiet outpost, Sahra Ali Hersi saw potential where others saw distance, demonstrating the vision to see opportunity in a frontier town.",
        highlight: "The courage to move and vision to build.",
        image_url: "https://images.unsplash.com/photo-1547471080-7cc2caa01a7e?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "Building New Nyanza",
        period: "1960s - 1980s",
        body: "Establishing New Nyanza Wholesalers and securing a crucial Bamburi Cement agency. This period defined her as the 'Iron Lady' of hardware and commodities, becoming essential to regional growth.",
        highlight: "Institutionalizing trade and construction.",
        image_url: "https://images.unsplash.com/photo-1503387762-592dea58ed23?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "The Iron Matriarch",
        period: "Widowhood & Resilience",
        body: "Losing her husband when daughter Amina was only nine, Sahra became the sole provider for six children. Her resilience in the face of tragedy became the bedrock of the family's strength.",
        highlight: "Sole provider for six, building strength from tragedy.",
        image_url: "https://images.unsplash.com/photo-1523438885200-e635ba2c371e?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "Mentor & Architect",
        period: "Training the Generation",
        body: "Sahra was the family's first business school. She taught her daughters accounting and business management on the shop floor, taking them on cross-border routes to master regional trade.",
        highlight: "The first business school was the family shop.",
        image_url: "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "Cross-Border Vision",
        period: "Regional Expansion",
        body: "Strategic thinking beyond borders. She encouraged daughter Amina's expansion into Uganda after loss, recognizing that a change of environment would facilitate healing and unprecedented growth.",
        highlight: "Strategic expansion across national borders.",
        image_url: "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "The Daily Discipline",
        period: "Present Day at the Helm",
        body: "Despite health challenges, she is at the helm of New Nyanza every day. She proves that retirement is a concept for those without a mission. Purpose is her medicine.",
        highlight: "Work is purpose, not obligation.",
        image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=800&q=80",
    },
    Chapter {
        title: "The Fruit of the Legacy",
        period: "Generational Impact",
        body: "Her teachings manifested through Amina's Uganda empire, Asha's foundation, and the success of the extended family. The seed planted in Bungoma has grown into a pan-African forest.",
        highlight: "A legacy of entrepreneurs and community leaders.",
        image_url: "https://images.unsplash.com/photo-1531123897727-8f129e16f8ec?auto=format&fit=crop&w=800&q=80",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Pillar {
    pub numeral: &'static str,
    pub role: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub body: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        numeral: "I",
        role: "The Statesman",
        name: "Adan Hersi",
        tagline: "A Legacy of Public Service and Leadership",
        body: "Serving in government, Adan carried forward the family's deeply rooted values into the sphere of public service. His work represents the Diplomatic Pillar, demonstrating how principles shaped at New Nyanza apply to national leadership.",
    },
    Pillar {
        numeral: "II",
        role: "The Industrialist",
        name: "Amina Hersi Moghe",
        tagline: "Scaling the Spirit of New Nyanza",
        body: "Amina transformed the entrepreneurial foundation laid in Bungoma into one of East Africa's success stories. Her journey across regional borders reflects resilience and strategic vision.",
    },
    Pillar {
        numeral: "III",
        role: "The Philanthropist",
        name: "Asha Hersi",
        tagline: "The Guardian of Home and Community",
        body: "Asha represents the humanitarian heart. Through the Asha Hersi Foundation, she focuses on supporting vulnerable individuals, anchoring family success firmly to service.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEvent; 7] = [
    TimelineEvent {
        year: "1958",
        title: "THE PIONEER ARRIVES",
        description: "Migration from Nakuru to Bungoma outpost. Vision takes root.",
    },
    TimelineEvent {
        year: "1960s",
        title: "BUILDING FOUNDATIONS",
        description: "New Nyanza established. Becomes major agent for Bamburi Cement.",
    },
    TimelineEvent {
        year: "1970s",
        title: "CROSS-BORDER TRADE",
        description: "Strategic networks develop between Kenya and Uganda.",
    },
    TimelineEvent {
        year: "1980s",
        title: "THE IRON MATRIARCH",
        description: "Sole provider for 6 children. Extraordinary strength in tragedy.",
    },
    TimelineEvent {
        year: "1996",
        title: "UGANDA EXPANSION",
        description: "Strategic move to Kampala, transforming grief into opportunity.",
    },
    TimelineEvent {
        year: "2010s",
        title: "SKYLINE TRANSFORMATION",
        description: "Landmark developments reshaped East African infrastructure.",
    },
    TimelineEvent {
        year: "TODAY",
        title: "STILL AT THE HELM",
        description: "Daily presence at New Nyanza. A living archive.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const CLOSED: &str = "Closed";

impl BusinessHours {
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.hours == CLOSED
    }
}

pub const BUSINESS_HOURS: [BusinessHours; 7] = [
    BusinessHours { day: "Monday", hours: "8am - 5pm" },
    BusinessHours { day: "Tuesday", hours: "8am - 5pm" },
    BusinessHours { day: "Wednesday", hours: "8am - 5pm" },
    BusinessHours { day: "Thursday", hours: "8am - 5pm" },
    BusinessHours { day: "Friday", hours: "8am - 5pm" },
    BusinessHours { day: "Saturday", hours: "8am - 12pm" },
    BusinessHours { day: "Sunday", hours: CLOSED },
];
