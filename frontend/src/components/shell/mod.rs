//! Sidebar and header around the active page.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Courses,
    Students,
    Faculty,
    Notifications,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Courses, Page::Students, Page::Faculty, Page::Notifications];

    fn label(self) -> &'static str {
        match self {
            Page::Courses => "Courses",
            Page::Students => "Students",
            Page::Faculty => "Faculty",
            Page::Notifications => "Notifications",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Courses => "menu_book",
            Page::Students => "school",
            Page::Faculty => "groups",
            Page::Notifications => "notifications",
        }
    }
}

pub fn sidebar(active: Page, on_select: &Callback<Page>) -> Html {
    html! {
        <nav class="sidebar">
            <div class="brand">{"Tutor Admin"}</div>
            { for Page::ALL.iter().map(|page| {
                let page = *page;
                let on_select = on_select.clone();
                html! {
                    <button
                        class={classes!("nav-item", (page == active).then_some("active"))}
                        onclick={Callback::from(move |_| on_select.emit(page))}
                    >
                        <i class="material-icons">{ page.icon() }</i>
                        { page.label() }
                    </button>
                }
            }) }
        </nav>
    }
}

/// Top bar with the bell. The badge is hidden when nothing is unread.
pub fn header(title: &'static str, unread: usize, on_bell: &Callback<()>) -> Html {
    let on_bell = on_bell.clone();
    html! {
        <header class="header">
            <span class="header-title">{ title }</span>
            <button class="icon-btn bell" title="Notifications" onclick={Callback::from(move |_| on_bell.emit(()))}>
                <i class="material-icons">{"notifications"}</i>
                if unread > 0 {
                    <span class="badge">{ unread.to_string() }</span>
                }
            </button>
        </header>
    }
}
