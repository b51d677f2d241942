use leptos::prelude::*;

use crate::domain::c001_customer::ui::list::CustomerList;
use crate::domain::c002_booking::ui::details::BookingDetails;
use crate::domain::c003_rate_record::ui::list::RateRecordList;
use crate::layout::{Page, Shell};

#[component]
pub fn App() -> impl IntoView {
    let current_page = RwSignal::new(Page::Bookings);
    provide_context(current_page);

    view! {
        <Shell current_page=current_page>
            {move || match current_page.get() {
                Page::Bookings => view! { <BookingDetails /> }.into_any(),
                Page::Customers => view! { <CustomerList /> }.into_any(),
                Page::RateRecords => view! { <RateRecordList /> }.into_any(),
            }}
        </Shell>
    }
}
