use log::debug;

use crate::{
    gate::AuthGate,
    post::{visible_posts, Filter, Post},
    route::Navigator,
    session::{Session, SessionStore},
};

const MENU_ACTIONS: [&str; 3] = ["Automate", "Create", "Connect"];
const SIDEBAR_LINKS: [&str; 8] = [
    "Liked Posts",
    "Create Post",
    "Automate",
    "Advanced Plans",
    "API Keys",
    "Latest Updates",
    "Dashboard",
    "Settings",
];
const CONTENT_PREVIEW: usize = 120;

/// Community feed, behind the auth gate.
#[derive(Debug, Default)]
pub struct CommunityPage {
    gate: AuthGate,
    filter: Filter,
    posts: Vec<Post>,
}

impl CommunityPage {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn select(&mut self, filter: Filter) {
        debug!("filter {}", filter);
        self.filter = filter;
    }

    /// Runs the gate; `true` when the feed may be shown.
    pub fn mount<S, N>(&mut self, session: &Session<S>, navigator: &mut N) -> bool
    where
        S: SessionStore,
        N: Navigator,
    {
        self.gate.mount(session, navigator);
        self.gate.is_ready()
    }

    pub fn visible(&self) -> Vec<&Post> {
        visible_posts(&self.posts, self.filter)
    }

    pub fn render(&self) -> String {
        self.gate.render(|_| {
            let mut lines = vec![];
            self.render_header(&mut lines);
            self.render_sort_bar(&mut lines);
            self.render_grid(&mut lines);
            self.render_sidebar(&mut lines);
            lines.join("\n")
        })
    }

    fn render_header(&self, lines: &mut Vec<String>) {
        lines.push("CREATE. ENGAGE. GROW.".to_string());
        lines.push("Everything you need to share your ideas.".to_string());
        let actions: Vec<String> = MENU_ACTIONS
            .iter()
            .map(|action| match *action {
                "Create" => format!("[{}]", action.to_uppercase()),
                _ => action.to_uppercase(),
            })
            .collect();
        lines.push(actions.join("  "));
        lines.push(String::new());
    }

    fn render_sort_bar(&self, lines: &mut Vec<String>) {
        let filters: Vec<String> = Filter::LIST
            .iter()
            .map(|filter| {
                if *filter == self.filter {
                    format!("({})", filter.label())
                } else {
                    filter.label().to_string()
                }
            })
            .collect();
        lines.push(format!("Find: {}", filters.join(" ")));
        lines.push(String::new());
    }

    fn render_grid(&self, lines: &mut Vec<String>) {
        let posts = self.visible();
        if posts.is_empty() {
            lines.push("No posts yet.".to_string());
        }
        for post in posts {
            lines.push(format!("@{}  {}", post.username, post.created_at));
            lines.push(format!("  {} [{}]", post.title, post.category));
            lines.push(format!("  {}", preview(&post.content)));
            lines.push(format!("  ♥ {}", post.likes));
            lines.push(String::new());
        }
    }

    fn render_sidebar(&self, lines: &mut Vec<String>) {
        lines.push("---".to_string());
        for link in SIDEBAR_LINKS {
            lines.push(format!("  {}", link));
        }
    }
}

fn preview(content: &str) -> String {
    if content.chars().count() <= CONTENT_PREVIEW {
        return content.to_string();
    }
    let cut: String = content.chars().take(CONTENT_PREVIEW).collect();
    format!("{}…", cut.trim_end())
}
