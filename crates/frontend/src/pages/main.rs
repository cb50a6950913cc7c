//! Learning dashboard: attendance and progress at a glance.

use yew::prelude::*;

use crate::components::{AttendanceCalendar, ProgressRing};

// Placeholder figures until the backend starts serving attendance and
// progress.
const ATTENDED_DATES: [u32; 5] = [1, 3, 23, 24, 28];
const TODAY_PROGRESS: u32 = 80;
const OVERALL_PROGRESS: u32 = 70;

/// Dashboard page component.
#[function_component(MainPage)]
pub fn main_page() -> Html {
    html! {
        <div class="dashboard">
            <section class="dashboard-calendar">
                <h2 class="section-title">{"출석 현황"}</h2>
                <AttendanceCalendar attended={ATTENDED_DATES.to_vec()} />
            </section>
            <section class="dashboard-progress">
                <div class="card progress-card">
                    <h3>{"오늘의 학습"}</h3>
                    <ProgressRing percent={TODAY_PROGRESS} />
                </div>
                <div class="card progress-card">
                    <h3>{"전체 진행률"}</h3>
                    <ProgressRing percent={OVERALL_PROGRESS} />
                </div>
            </section>
        </div>
    }
}
