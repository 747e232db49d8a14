//! Site shell: routes, navigation and static page copy
//!
//! None of this changes at runtime. It is served so a front end can build
//! the navigation bar, the home page and each page's intro panel from one
//! place.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// Product name used in headers and the footer
pub const SITE_NAME: &str = "Bloom";

/// Shown in the footer of every page
pub const CRISIS_LINE: &str = "If you're experiencing a mental health crisis, please call or text 988 to reach the Suicide & Crisis Lifeline.";

/// Errors from resolving a route
#[derive(Error, Debug, PartialEq)]
pub enum SiteError {
    #[error("Unknown page: {0}")]
    UnknownRoute(String),
}

/// The five top-level pages
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Forums,
    Tracker,
    Journal,
    Resources,
}

impl Route {
    /// Routes in navigation order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Forums,
            Route::Tracker,
            Route::Journal,
            Route::Resources,
        ]
    }

    /// Bare page name, as used in `/site/pages/:route`
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Forums => "forums",
            Route::Tracker => "tracker",
            Route::Journal => "journal",
            Route::Resources => "resources",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Forums => "/forums",
            Route::Tracker => "/tracker",
            Route::Journal => "/journal",
            Route::Resources => "/resources",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Forums => "Community Forums",
            Route::Tracker => "Mood Tracker",
            Route::Journal => "Journal",
            Route::Resources => "Resources",
        }
    }

    /// Match a request path; trailing slashes are ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all().iter().copied().find(|r| r.path() == normalized)
    }

    /// Intro panel for the page
    pub fn intro(&self) -> PageIntro {
        match self {
            Route::Home => PageIntro {
                title: "Join Our Supportive Community",
                heading: "About Bloom",
                points: vec![
                    "Bloom is a safe space where you can connect with others, track your mental wellness journey, and access resources to support your growth.",
                ],
            },
            Route::Forums => PageIntro {
                title: "Community Forums",
                heading: "Community Guidelines",
                points: vec![
                    "Be respectful and supportive of others, even when disagreeing.",
                    "Protect your privacy and that of others. Don't share identifying information.",
                    "This is a peer support space, not a substitute for professional mental health care.",
                    "In crisis? Call or text 988 for immediate help.",
                ],
            },
            Route::Tracker => PageIntro {
                title: "Mood Tracker",
                heading: "Benefits of Mood Tracking",
                points: vec![
                    "Recognize patterns and triggers that affect your mood",
                    "Increase self-awareness and emotional intelligence",
                    "Identify effective coping strategies for difficult emotions",
                    "Track your progress over time",
                ],
            },
            Route::Journal => PageIntro {
                title: "Guided Journal",
                heading: "The Power of Journaling",
                points: vec![
                    "Express and process emotions in a healthy way",
                    "Gain clarity and perspective on challenging situations",
                    "Practice gratitude and positive reflection",
                    "Track your personal growth journey",
                ],
            },
            Route::Resources => PageIntro {
                title: "Wellness Resources",
                heading: "About Our Resource Directory",
                points: vec![
                    "Explore our curated collection of mental wellness resources. From articles and videos to interactive tools and podcasts, you'll find content to support various aspects of your mental health journey. Resources are regularly updated and community-rated for helpfulness.",
                ],
            },
        }
    }
}

impl FromStr for Route {
    type Err = SiteError;

    /// Accepts a path ("/journal") or a bare name ("journal")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Route::from_path(&name)
            .or_else(|| Route::all().iter().copied().find(|r| r.name() == name))
            .ok_or(SiteError::UnknownRoute(s.to_string()))
    }
}

/// One link in the navigation bar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Navigation links with the current page marked active
pub fn navigation(current_path: &str) -> Vec<NavItem> {
    let current = Route::from_path(current_path);
    Route::all()
        .iter()
        .map(|r| NavItem {
            name: r.label(),
            path: r.path(),
            active: current == Some(*r),
        })
        .collect()
}

/// Heading and bullet points shown at the top of a page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageIntro {
    pub title: &'static str,
    pub heading: &'static str,
    pub points: Vec<&'static str>,
}

/// A call-to-action button on the home hero
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

/// A feature card on the home page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
}

/// Everything on the landing page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomePage {
    pub headline: [&'static str; 2],
    pub lead: &'static str,
    pub calls_to_action: Vec<CallToAction>,
    pub features: Vec<Feature>,
    pub crisis_line: &'static str,
}

pub fn home_page() -> HomePage {
    HomePage {
        headline: ["Your Space for", "Mental Wellness"],
        lead: "A supportive community where you can share, track, and grow your mental well-being. Connect anonymously with peers, access resources, and develop wellness habits.",
        calls_to_action: vec![
            CallToAction {
                label: "Join Community",
                route: Route::Forums,
            },
            CallToAction {
                label: "Explore Resources",
                route: Route::Resources,
            },
        ],
        features: vec![
            Feature {
                name: "Anonymous Peer Support",
                description: "Connect with others going through similar challenges without revealing your identity.",
            },
            Feature {
                name: "Mood Tracking",
                description: "Track your emotional patterns and recognize triggers that affect your well-being.",
            },
            Feature {
                name: "Guided Journaling",
                description: "Express yourself through thought-provoking prompts designed to promote self-reflection.",
            },
            Feature {
                name: "Resource Directory",
                description: "Access a curated collection of articles, videos, and tools for mental wellness.",
            },
            Feature {
                name: "Wellness Activities",
                description: "Schedule and track mindfulness and stress-reduction techniques in your daily routine.",
            },
        ],
        crisis_line: CRISIS_LINE,
    }
}

/// Footer copyright line for `year`
pub fn footer(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/tracker/"), Some(Route::Tracker));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_parse_route_by_name() {
        assert_eq!("journal".parse::<Route>().unwrap(), Route::Journal);
        assert_eq!("/resources".parse::<Route>().unwrap(), Route::Resources);
        assert_eq!("home".parse::<Route>().unwrap(), Route::Home);
        assert!("admin".parse::<Route>().is_err());
    }

    #[test]
    fn test_navigation_marks_current() {
        let items = navigation("/journal");
        assert_eq!(items.len(), 5);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.name).collect();
        assert_eq!(active, vec!["Journal"]);
        assert_eq!(items[1].name, "Community Forums");
    }

    #[test]
    fn test_navigation_unknown_path_has_no_active() {
        assert!(navigation("/nowhere").iter().all(|i| !i.active));
    }

    #[test]
    fn test_home_page() {
        let home = home_page();
        assert_eq!(home.features.len(), 5);
        assert_eq!(home.calls_to_action[0].route, Route::Forums);
        assert!(home.crisis_line.contains("988"));
    }

    #[test]
    fn test_forum_intro_mentions_crisis_line() {
        let intro = Route::Forums.intro();
        assert_eq!(intro.heading, "Community Guidelines");
        assert!(intro.points.iter().any(|p| p.contains("988")));
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer(2024), "© 2024 Bloom. All rights reserved.");
    }
}
