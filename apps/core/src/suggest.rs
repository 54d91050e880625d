// Static suggestion content shown on the empty-query and no-results paths.

pub const POPULAR_SEARCHES: [&str; 8] = [
    "VS Code",
    "Photoshop",
    "Chrome",
    "Copy",
    "Paste",
    "Save",
    "Undo",
    "Excel",
];

pub const RETRY_SEARCHES: [&str; 5] = ["VS Code", "Photoshop", "Chrome", "Copy", "Paste"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub fn quick_actions() -> &'static [QuickAction] {
    &[
        QuickAction {
            id: "quick-quiz",
            title: "Take a Quiz",
            url: "quiz-integrated.html",
        },
        QuickAction {
            id: "quick-apps",
            title: "Browse Apps",
            url: "all-applications.html",
        },
        QuickAction {
            id: "quick-community",
            title: "Join Community",
            url: "community-ultimate.html",
        },
    ]
}
