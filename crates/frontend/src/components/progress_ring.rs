//! Circular progress indicator.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    /// 0..=100; larger values are clamped.
    pub percent: u32,
    #[prop_or(120)]
    pub size: u32,
}

/// SVG ring with the percentage centered inside.
#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let percent = props.percent.min(100);
    let size = props.size as f64;
    let stroke = 12.0;
    let radius = (size - stroke) / 2.0;
    let circumference = std::f64::consts::TAU * radius;
    let offset = circumference * (1.0 - percent as f64 / 100.0);
    let center = size / 2.0;

    html! {
        <div class="progress-ring" style={format!("width:{size}px;height:{size}px;")}>
            <svg
                width={props.size.to_string()}
                height={props.size.to_string()}
                style="transform: rotate(-90deg);"
            >
                <circle
                    cx={center.to_string()}
                    cy={center.to_string()}
                    r={radius.to_string()}
                    fill="none"
                    stroke="#e9d5ff"
                    stroke-width={stroke.to_string()}
                />
                <circle
                    cx={center.to_string()}
                    cy={center.to_string()}
                    r={radius.to_string()}
                    fill="none"
                    stroke="#9333ea"
                    stroke-linecap="round"
                    stroke-width={stroke.to_string()}
                    stroke-dasharray={circumference.to_string()}
                    stroke-dashoffset={offset.to_string()}
                />
            </svg>
            <span class="progress-ring-value">{ format!("{percent}%") }</span>
        </div>
    }
}
