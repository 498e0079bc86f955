/// One screen of the hero phone carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideContent {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub background: &'static str,
}

pub static SLIDES: [SlideContent; 5] = [
    SlideContent {
        icon: "📸",
        title: "AI Camera",
        description: "Point camera at cattle for instant breed recognition",
        background: "linear-gradient(135deg, #2d5016, #4a7c3a)",
    },
    SlideContent {
        icon: "🐄",
        title: "Gir Cattle",
        description: "Breed: Gir\nAccuracy: 97%\nOrigin: Gujarat",
        background: "linear-gradient(135deg, #1e3a8a, #3b82f6)",
    },
    SlideContent {
        icon: "🧬",
        title: "Genetic Analysis",
        description: "Advanced AI identifies genetic markers and breeding potential",
        background: "linear-gradient(135deg, #7c2d12, #ea580c)",
    },
    SlideContent {
        icon: "📊",
        title: "Health Monitor",
        description: "Track health metrics and get alerts for potential issues",
        background: "linear-gradient(135deg, #581c87, #8b5cf6)",
    },
    SlideContent {
        icon: "💰",
        title: "Market Prices",
        description: "Real-time market prices and demand forecasts for breeds",
        background: "linear-gradient(135deg, #166534, #22c55e)",
    },
];

/// Big number with a caption, used by the hero and CTA.
#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "50+", label: "Breed Types" },
    Stat { value: "99%", label: "Accuracy" },
    Stat { value: "10K+", label: "Farmers" },
];

pub const CTA_STATS: [Stat; 4] = [
    Stat { value: "10,000+", label: "Active Farmers" },
    Stat { value: "50+", label: "Breed Types" },
    Stat { value: "99%", label: "Accuracy Rate" },
    Stat { value: "24/7", label: "Support" },
];

pub const TRUST_BADGES: [(&str, &str); 4] = [
    ("🏆", "Award-Winning Technology"),
    ("🔒", "Secure & Private"),
    ("🇮🇳", "Made in India"),
    ("💡", "Government Backed"),
];

#[derive(PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub static RECOGNITION: Highlight = Highlight {
    title: "Intelligent Breed Recognition",
    subtitle: "Advanced AI Technology",
    description: "Our cutting-edge AI system can identify over 50 cattle and buffalo breeds native to India with 99% accuracy. Simply point your camera at the animal and get instant results.",
    points: &[
        "50+ Indian cattle breeds supported",
        "Real-time recognition in 2 seconds",
        "Works in various lighting conditions",
        "Offline capability for remote areas",
    ],
};

pub static EMPOWERING: Highlight = Highlight {
    title: "Empowering Farmers",
    subtitle: "Data-Driven Decisions",
    description: "Make informed decisions about breeding, feeding, and healthcare with AI-powered insights tailored for Indian livestock management.",
    points: &[
        "Optimize breeding programs",
        "Prevent genetic diseases",
        "Track lineage and genetics",
        "Connect with veterinarians",
    ],
};

/// Longer copy shown under each benefit, in the same order as `EMPOWERING.points`.
pub const BENEFIT_DETAILS: [&str; 4] = [
    "Make informed decisions about breeding pairs to improve genetic diversity and milk production.",
    "Early detection of genetic diseases and health issues through breed-specific health profiles.",
    "Maintain detailed records of animal lineage for better breeding program management.",
    "Get instant access to qualified veterinarians specialized in your cattle breeds.",
];

pub struct MetricCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    /// Hover tilt in degrees.
    pub tilt: i8,
}

pub const METRICS: [MetricCard; 4] = [
    MetricCard { icon: "📈", title: "Productivity", value: "+35%", tilt: 2 },
    MetricCard { icon: "💰", title: "Revenue", value: "+28%", tilt: -2 },
    MetricCard { icon: "⏱️", title: "Time Saved", value: "60%", tilt: 2 },
    MetricCard { icon: "🎯", title: "Accuracy", value: "99%", tilt: -2 },
];

pub struct GridFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 4],
}

pub const GRID_FEATURES: [GridFeature; 6] = [
    GridFeature {
        icon: "🔍",
        title: "Advanced Breed Recognition",
        description: "Identify 50+ Indian cattle and buffalo breeds with industry-leading accuracy using computer vision.",
        points: ["Real-time identification", "Works in all lighting", "Offline capability", "99% accuracy rate"],
    },
    GridFeature {
        icon: "📊",
        title: "Health Monitoring",
        description: "Track animal health metrics and receive alerts for potential health issues based on breed-specific data.",
        points: ["Disease prediction", "Health alerts", "Vaccination tracking", "Growth monitoring"],
    },
    GridFeature {
        icon: "🧬",
        title: "Genetic Analysis",
        description: "Analyze genetic traits and breeding potential to optimize your livestock breeding program.",
        points: ["Lineage tracking", "Genetic diversity", "Breeding recommendations", "Trait analysis"],
    },
    GridFeature {
        icon: "💰",
        title: "Market Intelligence",
        description: "Get real-time market prices and demand forecasts for different breeds in your region.",
        points: ["Price tracking", "Market trends", "Demand forecasts", "Profit optimization"],
    },
    GridFeature {
        icon: "🌱",
        title: "Nutrition Management",
        description: "Receive breed-specific nutrition recommendations to maximize milk production and animal health.",
        points: ["Custom feed plans", "Nutrition tracking", "Cost optimization", "Growth enhancement"],
    },
    GridFeature {
        icon: "👨‍⚕️",
        title: "Veterinary Connect",
        description: "Connect with qualified veterinarians who specialize in your specific cattle breeds.",
        points: ["Expert consultation", "24/7 support", "Emergency assistance", "Breed specialists"],
    },
];

pub const SOCIAL_LINKS: [(&str, &str); 5] = [
    ("Facebook", "📘"),
    ("Twitter", "🐦"),
    ("Instagram", "📷"),
    ("LinkedIn", "💼"),
    ("YouTube", "📺"),
];
