//! Copy and link tables for the page. Everything here is fixed at build time.

pub mod palette {
    pub const SAND: &str = "#C9A87C";
    pub const TERRA: &str = "#00774D";
    pub const TERRA_LIGHT: &str = "#1A9B6B";
    pub const CREAM: &str = "#F0EBE3";
    pub const SAGE: &str = "#7A9E8E";
    pub const BLUSH: &str = "#E8D5C4";
    pub const SKY: &str = "#89B4C8";
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[Link] = &[
    Link { label: "Aeviti Baseline", href: "#baseline" },
    Link { label: "Markers", href: "#coverage" },
    Link { label: "Approach", href: "#approach" },
    Link { label: "FAQs", href: "#faq" },
];

pub const FOOTER_OFFERINGS: &[Link] = &[
    Link { label: "Labs", href: "/labs" },
    Link { label: "Weight Loss", href: "/weight-loss" },
    Link { label: "Sexual Health", href: "/sexual-health" },
    Link { label: "Mental Health", href: "/mental-health" },
    Link { label: "About the Company", href: "/about" },
];

pub const FOOTER_TOOLS: &[Link] = &[
    Link { label: "BMI Calculator", href: "/tools/bmi" },
    Link { label: "TDEE Calculator", href: "/tools/tdee" },
    Link { label: "Calorie Deficit Calculator", href: "/tools/calorie-deficit" },
    Link { label: "Protein Calculator", href: "/tools/protein" },
    Link { label: "Water Intake Calculator", href: "/tools/water-intake" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub count: u32,
    pub subtitle: &'static str,
    pub markers: &'static [&'static str],
    pub color: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        key: "blood",
        name: "Blood",
        count: 22,
        subtitle: "to understand your foundation",
        markers: &["CBC", "Ferritin", "Iron", "GFR"],
        color: palette::TERRA,
    },
    Category {
        key: "metabolic",
        name: "Metabolic",
        count: 18,
        subtitle: "to map your energy systems",
        markers: &["HbA1c", "Insulin", "LDL-P", "ApoB"],
        color: palette::SAND,
    },
    Category {
        key: "inflammation",
        name: "Inflammation",
        count: 14,
        subtitle: "to track silent signals",
        markers: &["hs-CRP", "IL-6", "Homocysteine", "ESR"],
        color: palette::SAGE,
    },
    Category {
        key: "hormone",
        name: "Hormone",
        count: 16,
        subtitle: "to decode your balance",
        markers: &["TSH", "Free T4", "Cortisol", "DHEA"],
        color: palette::SKY,
    },
    Category {
        key: "aging",
        name: "Aging",
        count: 12,
        subtitle: "Long-horizon signals for longevity-minded decisions.",
        markers: &["IGF-1", "SHBG", "Vitamin D", "Telomere"],
        color: palette::BLUSH,
    },
];

pub fn total_markers() -> u32 {
    CATEGORIES.iter().map(|category| category.count).sum()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What is Aeviti Baseline?",
        answer: "Aeviti Baseline is your comprehensive wellness snapshot: core biomarker categories organized into a clear, steady plan. We interpret each category in plain language and map results to prioritized next steps across sleep, nutrition, activity, stress, and follow-up.",
    },
    Faq {
        question: "Is this about pricing, protocols, or fads?",
        answer: "None of the above. Aeviti Baseline is designed around conservative guidance and long-term consistency. We don't sell protocols, push supplements, or chase trends. We help you understand what your markers mean and what steady steps to take.",
    },
    Faq {
        question: "Do I need to be an expert to understand my results?",
        answer: "Not at all. Every result comes with a plain-language interpretation. Context over charts: clear explanations you can repeat back in one sentence, not a spreadsheet you need a PhD to decode.",
    },
    Faq {
        question: "Is Aeviti medical care?",
        answer: "No. Aeviti is a wellness interpretation tool, not a medical provider. We don't diagnose or treat conditions. When something needs a doctor's eye, we tell you clearly and calmly, with specific guidance on what kind of follow-up to seek.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const APPROACH_STEPS: &[Step] = &[
    Step {
        num: "01",
        title: "Establish your baseline",
        desc: "We organize core categories into a simple snapshot you can understand in minutes.",
    },
    Step {
        num: "02",
        title: "Translate into actions",
        desc: "We map signals into safe, steady recommendations you can keep doing.",
    },
    Step {
        num: "03",
        title: "Recheck with intention",
        desc: "Progress is measured over weeks and months, so changes are meaningful, not noisy.",
    },
];

pub const BASELINE_COLUMNS: &[Step] = &[
    Step {
        num: "01",
        title: "Meaningful interpretation",
        desc: "Context over charts. Clear explanations you can repeat back in one sentence.",
    },
    Step {
        num: "02",
        title: "Actionable next steps",
        desc: "A prioritized plan for sleep, nutrition, activity, stress, and follow-ups, built for real life.",
    },
    Step {
        num: "03",
        title: "Steady progress",
        desc: "Track movement over weeks and months, not daily swings. No hype cycles.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

/// Background clips behind the hero, played in order. Served from the
/// site's `/videos` directory; an empty list leaves the gradient alone.
pub const HERO_REEL: &[&str] = &[
    "/videos/AdobeStock_1624163355_Video_HD_Preview.mov",
    "/videos/AdobeStock_1887586841_Video_4K_Preview.mov",
    "/videos/AdobeStock_539933893_Video_HD_Preview.mov",
    "/videos/AdobeStock_605651631_Video_HD_Preview.mov",
];

pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "◎", title: "Interpretation", desc: "Plain-language meaning of each marker category.", color: palette::TERRA },
    Highlight { icon: "◐", title: "Action", desc: "Prioritized next steps you can sustain.", color: palette::SAGE },
    Highlight { icon: "◑", title: "Steadiness", desc: "Progress over weeks and months. No spikes, no fads.", color: palette::SKY },
    Highlight { icon: "○", title: "What you get", desc: "A calm dashboard that helps you decide what matters next.", color: palette::SAND },
];

pub const PRINCIPLES: &[Highlight] = &[
    Highlight { icon: "◎", title: "Safety-first", desc: "We default to conservative guidance and clear escalation when needed.", color: palette::TERRA_LIGHT },
    Highlight { icon: "◐", title: "Steady over extreme", desc: "We optimize for habits you'll keep, not aggressive changes you'll abandon.", color: palette::TERRA_LIGHT },
    Highlight { icon: "◑", title: "Long-term lens", desc: "We care about what compounds: sleep, movement, nutrition, stress, and follow-up.", color: palette::TERRA_LIGHT },
];

pub const SIGNAL_TAGS: &[&str] = &["Conservative guidance", "Long-term view", "Clear priorities"];

pub const TRUST_BADGES: &[&str] = &["CLIA certified", "CAP accredited"];

/// Monthly wellness-score bars on the trust card.
pub const TRUST_BARS: &[u32] = &[22, 30, 35, 40, 38, 48, 55, 60, 65, 72];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// The weekly protocol shown on the third approach step.
pub const PROTOCOL_ITEMS: &[Highlight] = &[
    Highlight { icon: "🥗", title: "Nutrition", desc: "Anti-inflammatory foods, omega-3 rich...", color: palette::SAGE },
    Highlight { icon: "💊", title: "Supplements", desc: "Vitamin D3, Magnesium glycinate...", color: palette::TERRA },
    Highlight { icon: "🏃", title: "Movement", desc: "Zone 2 cardio, resistance training...", color: palette::SKY },
];

pub const ACTION_PLAN: &[PlanItem] = &[
    PlanItem { icon: "🥗", label: "Nutrition", active: true },
    PlanItem { icon: "💊", label: "Supplements", active: true },
    PlanItem { icon: "🏃", label: "Movement", active: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_counts_add_up_to_advertised_total() {
        assert_eq!(total_markers(), 82);
        assert!(CATEGORIES.iter().all(|category| category.markers.len() == 4));
    }

    #[test]
    fn in_page_links_point_at_anchors() {
        assert!(NAV_ITEMS.iter().all(|link| link.href.starts_with('#')));
    }
}
