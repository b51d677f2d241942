//! Application shell: top header, left sidebar navigation, content area
//!
//! Navigation is a plain signal holding the current page; there is no
//! router and no per-page URL state.

use leptos::prelude::*;

use crate::shared::icons::icon;

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Bookings,
    Customers,
    RateRecords,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Bookings => "Bookings",
            Self::Customers => "Customers",
            Self::RateRecords => "Rate records",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Self::Bookings => "bookings",
            Self::Customers => "customers",
            Self::RateRecords => "rates",
        }
    }
}

const NAV_PAGES: [Page; 3] = [Page::Bookings, Page::Customers, Page::RateRecords];

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(current_page: RwSignal<Page>, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__brand">"FreightDesk"</span>
                <span class="top-header__page">{move || current_page.get().title()}</span>
            </header>

            <div class="app-body">
                <nav class="sidebar">
                    {NAV_PAGES
                        .iter()
                        .map(|&page| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || current_page.get() == page
                                    on:click=move |_| current_page.set(page)
                                >
                                    {icon(page.icon_name())}
                                    <span class="sidebar__label">{page.title()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
