use std::sync::LazyLock;

use folio_domain::project::{Project, ProjectCategory, ProjectStatus};

/// The projects shown on the site, in display order.
#[must_use]
pub fn catalog() -> &'static [Project] {
    &PROJECTS
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: 1,
            title: "E-Commerce Platform".to_owned(),
            summary: "Full featured storefront with cart, checkout, and an admin dashboard."
                .to_owned(),
            description: "A complete storefront built for a local retailer: product catalog \
                          with faceted search, persistent carts, Stripe checkout, and an admin \
                          dashboard for inventory, orders, and revenue reporting. The admin side \
                          ships role based access so staff accounts only see the screens they \
                          need."
                .to_owned(),
            image: "/images/projects/ecommerce.webp".to_owned(),
            screenshots: owned(&[
                "/images/projects/ecommerce-catalog.webp",
                "/images/projects/ecommerce-checkout.webp",
                "/images/projects/ecommerce-admin.webp",
            ]),
            technologies: owned(&[
                "React",
                "TypeScript",
                "Node.js",
                "Express",
                "MongoDB",
                "Redis",
                "Stripe",
            ]),
            category: ProjectCategory::Fullstack,
            status: ProjectStatus::Completed,
            features: owned(&[
                "Faceted product search with instant results",
                "Carts that survive sign-out and device switches",
                "Stripe checkout with webhooks for payment events",
                "Role based admin dashboard for inventory and orders",
                "Daily revenue and bestseller reports",
            ]),
            challenges: owned(&[
                "Keeping cart state consistent across guest and signed-in sessions",
                "Search latency on a catalog of forty thousand products",
            ]),
            solutions: owned(&[
                "Merged guest carts into the account cart on sign-in with last-write-wins per line item",
                "Moved search to a Redis backed index refreshed by a nightly job",
            ]),
            duration: "4 months".to_owned(),
            team_size: "3 developers".to_owned(),
            role: "Full Stack Developer".to_owned(),
            start_date: "2024-01".to_owned(),
            end_date: Some("2024-04".to_owned()),
            repository: Some("https://github.com/trahoangdev/ecommerce-platform".to_owned()),
            live_url: Some("https://shop.trahoang.dev".to_owned()),
        },
        Project {
            id: 2,
            title: "Task Management App".to_owned(),
            summary: "Kanban board with drag and drop, labels, and offline support.".to_owned(),
            description: "A personal kanban tool: boards, swim lanes, drag and drop between \
                          columns, labels and due dates, with all state mirrored to local \
                          storage so the board keeps working offline and syncs when the \
                          connection returns."
                .to_owned(),
            image: "/images/projects/tasks.webp".to_owned(),
            screenshots: owned(&[
                "/images/projects/tasks-board.webp",
                "/images/projects/tasks-detail.webp",
            ]),
            technologies: owned(&["React", "TypeScript", "Tailwind CSS", "Zustand", "Vite"]),
            category: ProjectCategory::Frontend,
            status: ProjectStatus::Completed,
            features: owned(&[
                "Drag and drop cards across columns and boards",
                "Labels, due dates, and checklist items per card",
                "Offline first with background sync",
                "Keyboard driven quick-add and search",
            ]),
            challenges: owned(&[
                "Reordering cards without re-rendering the whole board",
                "Reconciling offline edits made on two devices",
            ]),
            solutions: owned(&[
                "Fractional ordering keys so a move touches exactly one card",
                "Per-card version counters with a simple latest-edit-wins merge",
            ]),
            duration: "2 months".to_owned(),
            team_size: "Solo".to_owned(),
            role: "Frontend Developer".to_owned(),
            start_date: "2024-05".to_owned(),
            end_date: Some("2024-06".to_owned()),
            repository: Some("https://github.com/trahoangdev/taskboard".to_owned()),
            live_url: Some("https://tasks.trahoang.dev".to_owned()),
        },
        Project {
            id: 3,
            title: "Realtime Chat API".to_owned(),
            summary: "WebSocket chat backend with rooms, presence, and message history."
                .to_owned(),
            description: "The backend for a team chat product: WebSocket fan-out with rooms \
                          and typing indicators, presence tracking, and a paginated message \
                          history API. Runs as a small cluster behind a load balancer with \
                          Redis pub/sub carrying events between nodes."
                .to_owned(),
            image: "/images/projects/chat-api.webp".to_owned(),
            screenshots: owned(&["/images/projects/chat-api-metrics.webp"]),
            technologies: owned(&[
                "Node.js",
                "NestJS",
                "PostgreSQL",
                "Redis",
                "WebSocket",
                "Docker",
            ]),
            category: ProjectCategory::Backend,
            status: ProjectStatus::Completed,
            features: owned(&[
                "Rooms with membership and moderation rules",
                "Presence and typing indicators",
                "Cursor paginated message history",
                "Horizontal scaling over Redis pub/sub",
            ]),
            challenges: owned(&[
                "Delivering events in order when clients reconnect mid-stream",
            ]),
            solutions: owned(&[
                "Per-room sequence numbers with a replay window served from Postgres",
            ]),
            duration: "3 months".to_owned(),
            team_size: "2 developers".to_owned(),
            role: "Backend Developer".to_owned(),
            start_date: "2024-08".to_owned(),
            end_date: Some("2024-10".to_owned()),
            repository: Some("https://github.com/trahoangdev/chat-api".to_owned()),
            live_url: None,
        },
        Project {
            id: 4,
            title: "Portfolio Website".to_owned(),
            summary: "This site: a WebAssembly single page app compiled from Rust.".to_owned(),
            description: "The site you are looking at. A single page app written in Rust with \
                          Dioxus and compiled to WebAssembly, with a small Axum server hosting \
                          the static bundle. Theme preference, scroll driven animations, and \
                          the project modal are all plain signals and browser APIs, no \
                          JavaScript framework involved."
                .to_owned(),
            image: "/images/projects/folio.webp".to_owned(),
            screenshots: owned(&[
                "/images/projects/folio-light.webp",
                "/images/projects/folio-dark.webp",
            ]),
            technologies: owned(&["Rust", "Dioxus", "WebAssembly", "Axum"]),
            category: ProjectCategory::Frontend,
            status: ProjectStatus::Completed,
            features: owned(&[
                "Light, dark, and system theme with a persisted preference",
                "Scroll synced navigation and reveal animations",
                "Project gallery with a keyboard friendly detail modal",
                "Ships as a static bundle behind a tiny host server",
            ]),
            challenges: owned(&[
                "Driving IntersectionObserver and media queries from Rust",
            ]),
            solutions: owned(&[
                "Thin wrappers over web-sys that hand results back as signals",
            ]),
            duration: "6 weeks".to_owned(),
            team_size: "Solo".to_owned(),
            role: "Developer".to_owned(),
            start_date: "2025-02".to_owned(),
            end_date: Some("2025-03".to_owned()),
            repository: Some("https://github.com/trahoangdev/folio".to_owned()),
            live_url: Some("https://trahoang.dev".to_owned()),
        },
        Project {
            id: 5,
            title: "Fitness Tracking App".to_owned(),
            summary: "Cross platform workout tracker with offline logging and progress charts."
                .to_owned(),
            description: "A mobile workout tracker: plan routines, log sets with a rest timer, \
                          and watch progress charts per exercise. Logging works fully offline; \
                          history syncs to the cloud when a connection is available."
                .to_owned(),
            image: "/images/projects/fittrack.webp".to_owned(),
            screenshots: owned(&[
                "/images/projects/fittrack-log.webp",
                "/images/projects/fittrack-charts.webp",
            ]),
            technologies: owned(&["React Native", "Expo", "TypeScript", "SQLite", "Supabase"]),
            category: ProjectCategory::Mobile,
            status: ProjectStatus::InProgress,
            features: owned(&[
                "Routine builder with supersets and rest timers",
                "Offline set logging backed by on-device SQLite",
                "Per-exercise progress and volume charts",
            ]),
            challenges: owned(&[
                "Sync conflicts when the same workout is edited on two devices",
            ]),
            solutions: owned(&[
                "Append-only workout log with idempotent upserts keyed by client id",
            ]),
            duration: "Ongoing".to_owned(),
            team_size: "Solo".to_owned(),
            role: "Mobile Developer".to_owned(),
            start_date: "2025-05".to_owned(),
            end_date: None,
            repository: Some("https://github.com/trahoangdev/fittrack".to_owned()),
            live_url: None,
        },
    ]
});
