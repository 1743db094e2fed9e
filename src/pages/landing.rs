//! Landing page.

use askama::Template;
use axum::response::Response;

use crate::pages::nav::NavBar;
use crate::pages::render;

struct FeatureCard {
    href: &'static str,
    title: &'static str,
    blurb: &'static str,
    action: &'static str,
    accent: &'static str,
}

static CARDS: [FeatureCard; 3] = [
    FeatureCard {
        href: "/research",
        title: "Research",
        blurb: "Get comprehensive insights, statistics, and quotes on any topic",
        action: "Start Research",
        accent: "blue",
    },
    FeatureCard {
        href: "/topics",
        title: "Topics",
        blurb: "Discover trending topics with analytics and engagement metrics",
        action: "Explore Topics",
        accent: "purple",
    },
    FeatureCard {
        href: "/script-generator",
        title: "Script Generator",
        blurb: "Create platform-optimized content scripts with visual suggestions",
        action: "Generate Script",
        accent: "pink",
    },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature { icon: "⚡", title: "Fast & Efficient", text: "Get results in seconds" },
    Feature { icon: "📋", title: "Easy Copy", text: "One-click copy functionality" },
    Feature { icon: "🎯", title: "Accurate Data", text: "AI-powered insights" },
    Feature { icon: "🚀", title: "Platform Ready", text: "Optimized for all platforms" },
];

#[derive(Template)]
#[template(path = "index.html")]
struct LandingTemplate {
    nav: NavBar,
    cards: &'static [FeatureCard],
    features: &'static [Feature],
}

/// GET /
pub async fn show() -> Response {
    render(&LandingTemplate {
        nav: NavBar::for_path("/"),
        cards: &CARDS,
        features: &FEATURES,
    })
}
