//! Monthly attendance calendar.

use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

/// Monday-first weekday header, Sunday last.
const WEEKDAY_LABELS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

#[derive(Properties, PartialEq)]
pub struct AttendanceCalendarProps {
    /// Day numbers shown with an attendance mark.
    pub attended: Vec<u32>,
}

/// Month view with previous/next paging and attendance marks.
#[function_component(AttendanceCalendar)]
pub fn attendance_calendar(props: &AttendanceCalendarProps) -> Html {
    let today = js_sys::Date::new_0();
    let view = use_state(|| (today.get_full_year() as i32, today.get_month() + 1));
    let (year, month) = *view;

    let on_previous = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *view;
            view.set(previous_month(year, month));
        })
    };

    let on_next = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *view;
            view.set(next_month(year, month));
        })
    };

    html! {
        <div class="card calendar">
            <div class="calendar-header">
                <button class="calendar-nav" onclick={on_previous}>{"‹"}</button>
                <span class="calendar-title">{ format!("{year}년 {month}월") }</span>
                <button class="calendar-nav" onclick={on_next}>{"›"}</button>
            </div>
            <div class="calendar-grid">
                { for WEEKDAY_LABELS.iter().enumerate().map(|(index, label)| {
                    let class = if index == 6 { "calendar-weekday sunday" } else { "calendar-weekday" };
                    html! { <div class={class}>{ *label }</div> }
                })}
                { for calendar_cells(year, month).into_iter().map(|cell| match cell {
                    Some(day) => {
                        let attended = props.attended.contains(&day);
                        html! {
                            <div class={classes!("calendar-day", attended.then_some("attended"))}>
                                <span>{ day }</span>
                                if attended {
                                    <span class="attendance-mark">{"✓"}</span>
                                }
                            </div>
                        }
                    }
                    None => html! { <div class="calendar-day empty"></div> },
                })}
            </div>
        </div>
    }
}

/// Cells for a Monday-first month grid: leading blanks, then the day
/// numbers.
fn calendar_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells = vec![None; leading];
    cells.extend((1..=days_in_month(year, month)).map(Some));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_on_monday() {
        // August 2026 opens on a Saturday: five leading blanks.
        let cells = calendar_cells(2026, 8);
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(Option::is_none));
        assert_eq!(cells[5], Some(1));
        assert_eq!(cells[35], Some(31));
    }

    #[test]
    fn monday_opening_month_has_no_leading_blanks() {
        // June 2026 opens on a Monday.
        let cells = calendar_cells(2026, 6);
        assert_eq!(cells[0], Some(1));
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn month_lengths_respect_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn paging_rolls_over_year_boundaries() {
        assert_eq!(previous_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2026, 7), (2026, 8));
        assert_eq!(previous_month(2026, 7), (2026, 6));
    }
}
