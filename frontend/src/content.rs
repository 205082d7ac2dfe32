use crate::carousel::CarouselItem;
use crate::components::video_player::AspectRatio;

pub const STUDIO_NAME: &str = "Framestate Studios";
pub const TAGLINE: &str = "Cinematic storytelling for the real estate world.";

pub const PHONE_DISPLAY: &str = "+91 95587 37783";
pub const PHONE_HREF: &str = "tel:+919558737783";
pub const EMAIL: &str = "hello@framestatestudios.com";
pub const WHATSAPP_NUMBER: &str = "919558737783";
pub const RESPONSE_TIME_NOTE: &str =
    "We typically respond within 2 hours during business hours (9 AM - 7 PM IST).";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/framestate_studio/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/framestate-studio/";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@FramestateStudio";

pub const LOGO_SRC: &str = "/assets/framestate-logo.png";
pub const BEHIND_SCENES_SRC: &str = "/assets/behind-scenes.jpg";

/// Media copied from `frontend/assets/` by Trunk. The files themselves are
/// supplied at deploy time; see `frontend/assets/README.md`.
pub const BUNDLED_ASSETS: [&str; 7] = [
    "/assets/framestate-logo.png",
    "/assets/behind-scenes.jpg",
    "/assets/hero-villa.jpg",
    "/assets/video1.mp4",
    "/assets/video2.mp4",
    "/assets/video3.mp4",
    "/assets/video5.mp4",
];

pub const TIME_SLOTS: [&str; 3] = [
    "Morning (9:00 AM - 12:00 PM)",
    "Afternoon (12:00 PM - 5:00 PM)",
    "Evening (5:00 PM - 8:00 PM)",
];

struct ShowcaseVideo {
    src: &'static str,
    title: &'static str,
    client: &'static str,
    impact: &'static str,
    aspect_ratio: &'static str,
}

const SHOWCASE: [ShowcaseVideo; 4] = [
    ShowcaseVideo {
        src: "/assets/video1.mp4",
        title: "Modern Luxury Villa",
        client: "Premium Real Estate",
        impact: "Sold within 2 weeks",
        aspect_ratio: "16:9",
    },
    ShowcaseVideo {
        src: "/assets/video2.mp4",
        title: "Contemporary Penthouse",
        client: "Elite Properties",
        impact: "3x viewing requests",
        aspect_ratio: "9:16",
    },
    ShowcaseVideo {
        src: "/assets/video3.mp4",
        title: "Lakeside Villa Tour",
        client: "Luxury Estates",
        impact: "Featured in top listings",
        aspect_ratio: "16:9",
    },
    ShowcaseVideo {
        src: "/assets/video5.mp4",
        title: "Downtown Loft",
        client: "Metropolitan Homes",
        impact: "Record-breaking engagement",
        aspect_ratio: "16:9",
    },
];

/// Panels for the showcase ring. Unknown ratio tags fall back to landscape.
pub fn showcase_items() -> Vec<CarouselItem> {
    SHOWCASE
        .iter()
        .map(|video| CarouselItem {
            src: video.src.into(),
            title: video.title.into(),
            client: video.client.into(),
            impact: video.impact.into(),
            aspect_ratio: AspectRatio::parse(video.aspect_ratio).unwrap_or(AspectRatio::Landscape),
        })
        .collect()
}

pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { icon: "fas fa-chart-line", value: "250K+", label: "Organic Engagements" },
    Stat { icon: "fas fa-users", value: "100+", label: "Premium Collaborations" },
    Stat { icon: "fas fa-video", value: "500+", label: "Cinematic Videos" },
    Stat { icon: "fas fa-award", value: "100%", label: "Cinematic Quality" },
];

pub struct Package {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub const PACKAGES: [Package; 3] = [
    Package {
        name: "Essential Showcase",
        icon: "🎥",
        description: "Perfect for apartments and compact luxury listings",
        price: "Starting at ₹25,000",
        popular: false,
        features: &[
            "2-3 minute cinematic walkthrough",
            "Instagram Reel edit (9:16)",
            "Professional color grading",
            "Licensed music",
            "One round of revisions included",
            "Delivery within 5 business days",
        ],
    },
    Package {
        name: "Enhanced Highlight",
        icon: "🎬",
        description: "Designed to highlight features and boost engagement",
        price: "Starting at ₹45,000",
        popular: true,
        features: &[
            "Everything in Essential Showcase",
            "3D text overlays (sq. ft., amenities, landmarks)",
            "Animated intro/outro with logo",
            "1 main cinematic video + 2 social reels",
            "Enhanced motion graphics",
            "Drone footage (if applicable)",
            "Two rounds of revisions",
            "Delivery within 7 business days",
        ],
    },
    Package {
        name: "Storytelling Experience",
        icon: "🎞️",
        description: "A narrative-driven experience that builds emotional connection",
        price: "Starting at ₹75,000",
        popular: false,
        features: &[
            "Everything in Enhanced Highlight",
            "Scripted storytelling with voiceover narration",
            "Lifestyle cut-ins (cafés, nearby areas)",
            "3-4 min cinematic property story + 3 Reels",
            "Professional voice talent",
            "Advanced motion design",
            "Multiple location shoots",
            "Unlimited revisions",
            "Priority delivery within 10 business days",
        ],
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS: [ProcessStep; 3] = [
    ProcessStep {
        number: "01",
        title: "Plan & Scout",
        body: "We visit your property, understand its unique features, and plan the perfect shoot schedule for optimal lighting.",
    },
    ProcessStep {
        number: "02",
        title: "Shoot & Capture",
        body: "Using professional cinema cameras and equipment, we capture every angle with cinematic precision and artistic vision.",
    },
    ProcessStep {
        number: "03",
        title: "Edit & Deliver",
        body: "Post-production magic: color grading, music, motion graphics, and storytelling that makes buyers want to see more.",
    },
];

pub const WHY_CHOOSE_US: [(&str, &str); 4] = [
    ("Cinematic Quality:", "Film-grade equipment and techniques used in every project"),
    ("Quick Turnaround:", "Professional delivery without compromising on quality"),
    ("ROI-Focused:", "Videos designed to generate genuine buyer interest and faster sales"),
    ("Full Service:", "From concept to final delivery, we handle everything"),
];
