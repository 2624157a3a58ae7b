use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::animation::FieldVariant;
use crate::domain::chart::SampleChart;
use crate::presentation::{AnimatedBackground, ChartPanel};

const STYLES: &str = r#"
.motion-app {
    position: relative;
    min-height: 100vh;
    background: #0a0b0d;
    color: #e6e8eb;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
}

.motion-background {
    position: fixed;
    inset: 0;
    width: 100vw;
    height: 100vh;
    pointer-events: none;
}

.motion-background--flow {
    opacity: 0.8;
}

.chart-gallery {
    position: relative;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 24px;
    padding: 48px;
}

.chart-panel {
    margin: 0;
    padding: 16px;
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 12px;
    background: rgba(13, 14, 16, 0.8);
}

.chart-panel__title {
    font-size: 12px;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    color: rgba(255, 255, 255, 0.5);
    margin-bottom: 12px;
}

.chart-panel__frame {
    position: relative;
}

.chart-panel__svg {
    cursor: crosshair;
}

.chart-tooltip {
    position: absolute;
    transform: translate(-50%, calc(-100% - 10px));
    padding: 6px 10px;
    border: 1px solid rgba(0, 212, 170, 0.3);
    border-radius: 6px;
    background: #0d0e10;
    font-size: 11px;
    white-space: nowrap;
    pointer-events: none;
}

.chart-tooltip__label {
    color: rgba(255, 255, 255, 0.5);
    margin-right: 6px;
}

.chart-tooltip__value {
    color: #00d4aa;
}
"#;

/// Demo host: both backgrounds behind the full chart gallery.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <div class="motion-app">
            <AnimatedBackground variant=FieldVariant::Aurora />
            <main class="chart-gallery">
                <For
                    each=move || SampleChart::iter()
                    key=|sample| *sample
                    children=move |sample| view! { <ChartPanel sample=sample /> }
                />
            </main>
        </div>
    }
}
