//! Static marketing copy.
//!
//! Everything shown on the panels that never changes at runtime: feature
//! cards, testimonials, FAQ entries and the fixed texts of the notices. Kept
//! free of widget types so state and tests can refer to it directly.

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Scale,
    Users,
    Calendar,
    Cpu,
    ShieldCheck,
    CalendarDays,
    MessageSquare,
    CircleCheck,
    ListOrdered,
    User,
    WandSparkles,
    Calculator,
    Timer,
    ShieldAlert,
}

/// A clickable feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

impl Feature {
    const fn new(icon: FeatureIcon, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }

    /// Title of the detail notice opened by clicking the card.
    pub fn detail_title(&self) -> String {
        format!("Service — {}", self.title)
    }

    /// Body of the detail notice opened by clicking the card.
    pub fn detail_body(&self) -> String {
        format!(
            "{}\n\n{}\n\nDetailed info, pricing tiers, FAQs, and sign-up CTA would go here.",
            self.title, self.description
        )
    }
}

/// A customer quote shown in the home carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

/// A question/answer pair of the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

// =============================================================================
// HOME
// =============================================================================

pub const HOME_HEADLINE: &str = "Where Your Talent is the Currency";

pub const HOME_TAGLINE: &str =
    "Join a global network of learners and teachers who trade skills instead of money.";

pub const HOME_CTA: &str = "Join SkillBarter — It's Free";

pub static HOME_FEATURES: [Feature; 3] = [
    Feature::new(
        FeatureIcon::Scale,
        "Earn & Spend Points",
        "Teach to earn points, spend them to learn new skills.",
    ),
    Feature::new(
        FeatureIcon::Users,
        "AI Skill Matchmaking",
        "Find ideal skill exchange partners with AI.",
    ),
    Feature::new(
        FeatureIcon::Calendar,
        "Smart Scheduling",
        "Plan and manage sessions effortlessly.",
    ),
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Asha",
        quote: "I learned UI design in 3 weeks!",
    },
    Testimonial {
        author: "Ravi",
        quote: "Great teachers and fair points system.",
    },
    Testimonial {
        author: "Leena",
        quote: "Scheduling and chat made learning painless.",
    },
];

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_TITLE: &str = "About SkillBarter";

pub const ABOUT_INTRO: &str =
    "SkillBarter is a futuristic platform where knowledge becomes a shared currency.";

pub const ABOUT_MISSION: &str = "Our mission is to connect passionate learners and teachers \
     worldwide — enabling them to exchange skills, time, and creativity in a cash-free ecosystem.";

pub static FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "What is SkillBarter?",
        answer: "A peer-to-peer skill exchange platform.",
    },
    FaqEntry {
        question: "How do points work?",
        answer: "Earn points by teaching; spend them to learn.",
    },
    FaqEntry {
        question: "Is it free?",
        answer: "Yes — core features are free; premium features planned.",
    },
];

// =============================================================================
// SERVICES & MODULES
// =============================================================================

pub const SERVICES_TITLE: &str = "Our Services";

pub static SERVICES: [Feature; 6] = [
    Feature::new(
        FeatureIcon::Cpu,
        "AI Matchmaking",
        "Intelligent partner recommendations based on your goals.",
    ),
    Feature::new(
        FeatureIcon::ShieldCheck,
        "Secure Points",
        "Encrypted points ledger and dispute resolution.",
    ),
    Feature::new(
        FeatureIcon::CalendarDays,
        "Scheduler",
        "Take care of timezones and bookings.",
    ),
    Feature::new(
        FeatureIcon::MessageSquare,
        "Chat",
        "Real-time translation and messaging.",
    ),
    Feature::new(
        FeatureIcon::CircleCheck,
        "Feedback",
        "Maintain high quality with ratings.",
    ),
    Feature::new(
        FeatureIcon::ListOrdered,
        "Analytics",
        "Progress reports and learning insights.",
    ),
];

pub const MODULES_TITLE: &str = "Core Modules";

pub static MODULES: [Feature; 6] = [
    Feature::new(
        FeatureIcon::User,
        "User Management",
        "Profiles, authentication, and roles.",
    ),
    Feature::new(
        FeatureIcon::WandSparkles,
        "Recommender",
        "Suggests ideal matches using signals.",
    ),
    Feature::new(
        FeatureIcon::Calculator,
        "Points Engine",
        "Handles balances and transactions.",
    ),
    Feature::new(
        FeatureIcon::Timer,
        "Scheduler",
        "Bookings, cancellations, and reminders.",
    ),
    Feature::new(
        FeatureIcon::MessageSquare,
        "Messaging",
        "Encrypted chat and notifications.",
    ),
    Feature::new(
        FeatureIcon::ShieldAlert,
        "Admin Console",
        "Moderation and analytics.",
    ),
];

// =============================================================================
// CONTACT, PROFILE, FOOTER
// =============================================================================

pub const CONTACT_TITLE: &str = "Contact Us";

pub const PROFILE_TITLE: &str = "Profile";

pub const PROFILE_INFO: &str =
    "You are not logged in. Use Ctrl+S or the Login button to sign in.";

pub const TERMS_TEXT: &str = "Terms and Conditions placeholder.";

pub const PRIVACY_TEXT: &str = "Privacy policy placeholder.";

// =============================================================================
// NOTICE TEXTS
// =============================================================================

pub const LOGIN_SUCCESS: &str = "Login successful (demo). Welcome!";

pub const CONTACT_SUCCESS: &str = "Message Sent Successfully!";

/// Canned results listed for every search query.
pub static SEARCH_RESULTS: [&str; 3] = ["UI Design", "Java Swing", "Photography"];

/// Confirmation shown after a successful registration.
pub fn register_success(name: &str) -> String {
    format!("Account created (demo). Welcome, {name}")
}

/// Body of the search results notice.
pub fn search_results(query: &str) -> String {
    let mut body = format!("Search results for: {query}\n");
    for result in SEARCH_RESULTS {
        body.push_str("\n- ");
        body.push_str(result);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_list_every_canned_entry() {
        assert_eq!(
            search_results("rust"),
            "Search results for: rust\n\n- UI Design\n- Java Swing\n- Photography"
        );
    }

    #[test]
    fn feature_detail_mentions_title_and_description() {
        let chat = SERVICES[3];
        assert_eq!(chat.detail_title(), "Service — Chat");
        assert!(chat.detail_body().starts_with("Chat\n\nReal-time translation"));
    }
}
